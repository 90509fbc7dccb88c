//! Home page: header, friend list, drawer and modal containers.

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::components::drawer_host::DrawerHost;
use crate::components::friend_list::FriendList;
use crate::components::modal_host::ModalHost;
use crate::config::PROFILE_DRAWER;
use crate::state::drawer::DrawerParams;

/// Home page. Signed-out visitors get the sign-in/sign-up modal triggers,
/// signed-in users a button for their own profile drawer.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let session = ctx.session;
    let signed_in = move || session.with(|s| s.user.is_some());
    let nickname = move || session.with(|s| s.user.as_ref().map(|u| u.profile.nickname.clone()).unwrap_or_default());

    let on_profile = move |_| {
        ctx.open_drawer(PROFILE_DRAWER, DrawerParams::new(ctx.config.profile_drawer_url.clone()));
    };

    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>"Pong"</h1>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <button class="btn btn-primary" data-modal="signin">"Sign in"</button>
                            <button class="btn btn-secondary" data-modal="signup">"Sign up"</button>
                        }
                    }
                >
                    <button class="btn btn-link home-page__profile" on:click=on_profile.clone()>
                        {nickname}
                    </button>
                </Show>
            </header>
            <main class="home-page__body">
                <FriendList/>
                <DrawerHost/>
            </main>
            <ModalHost/>
        </div>
    }
}
