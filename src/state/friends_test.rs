use super::*;

#[test]
fn placeholder_friends_are_the_three_seed_users() {
    let friends = placeholder_friends();
    let names: Vec<_> = friends.iter().map(|f| (f.username.as_str(), f.nickname.as_str())).collect();
    assert_eq!(names, vec![("john_doe", "John"), ("janedoe", "Jane"), ("aliceee", "Alice")]);
    assert!(friends.iter().all(|f| f.avatar == PLACEHOLDER_AVATAR));
}

#[test]
fn rerender_replaces_list_without_duplicates() {
    let mut state = FriendsState::default();
    state.rerender();
    state.rerender();
    assert_eq!(state.friends.len(), 3);
}
