//! Friend list sidebar.

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::config::FRIEND_PROFILE_DRAWER;
use crate::net::types::Friend;
use crate::state::drawer::DrawerParams;

/// Friend list, rebuilt on every `drawer-opened` dispatch.
#[component]
pub fn FriendList() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let drawer = ctx.drawer;
    let friends = ctx.friends;

    Effect::new(move |previous: Option<u64>| {
        let seq = drawer.with(|d| d.opened_seq);
        if previous.is_some_and(|p| p != seq) {
            friends.update(|f| f.rerender());
        }
        seq
    });

    view! {
        <ul class="friend-list" id="friend-list">
            {move || {
                friends
                    .with(|f| f.friends.clone())
                    .into_iter()
                    .map(|friend| view! { <FriendItem friend=friend/> })
                    .collect_view()
            }}
        </ul>
    }
}

#[component]
fn FriendItem(friend: Friend) -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let alt = format!("{}'s avatar", friend.nickname);
    let username = friend.username.clone();
    let on_click = move |_| {
        let params = DrawerParams::new(ctx.config.friend_drawer_url.clone()).with_query("username", username.clone());
        ctx.open_drawer(FRIEND_PROFILE_DRAWER, params);
    };

    view! {
        <li class="friend-list__item" on:click=on_click>
            <img class="friend-list__avatar" src=friend.avatar alt=alt/>
            <div class="friend-list__names">
                <span class="friend-list__nickname">{friend.nickname}</span>
                <span class="friend-list__username">"@"{friend.username}</span>
            </div>
        </li>
    }
}
