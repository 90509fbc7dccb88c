//! Root application component and the shared `ClientContext`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ClientContext` replaces page-global singletons: config, the fetch
//! capability, every state signal and both registries travel together
//! through Leptos context. Components call its `open_*`/`close_*` methods,
//! which spawn the async drivers in `drawer` and `modal`.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::drawer::DrawerRegistry;
use crate::drawer::chat_room::ChatRoomDrawer;
use crate::net::chat_socket::ChatController;
use crate::net::fetch::BrowserFetch;
use crate::net::types::CurrentUser;
use crate::pages::home::HomePage;
use crate::state::chat_room::ChatRoomState;
use crate::state::drawer::{DrawerParams, DrawerState};
use crate::state::friends::FriendsState;
use crate::state::modal::{ModalRegistry, ModalState};
use crate::state::session::SessionState;

/// Everything UI code needs, provided once at the root.
#[derive(Clone)]
pub struct ClientContext {
    pub config: Arc<ClientConfig>,
    pub fetch: BrowserFetch,
    pub session: RwSignal<SessionState>,
    pub drawer: RwSignal<DrawerState>,
    pub drawers: DrawerRegistry,
    pub modal: RwSignal<ModalState>,
    pub modals: Arc<ModalRegistry>,
    pub friends: RwSignal<FriendsState>,
    pub chat: ChatController,
    pub chat_room: RwSignal<ChatRoomState>,
}

impl ClientContext {
    /// Build the context and register the page's drawer kinds.
    pub fn new(config: ClientConfig, session: SessionState, chat: ChatController) -> Self {
        let config = Arc::new(config);
        let fetch = BrowserFetch;
        let chat_room = RwSignal::new(ChatRoomState::default());

        let mut drawers = DrawerRegistry::default();
        drawers.register(ChatRoomDrawer::new(fetch, config.clone(), chat_room));

        let mut friends = FriendsState::default();
        friends.rerender();

        Self {
            config,
            fetch,
            session: RwSignal::new(session),
            drawer: RwSignal::new(DrawerState::default()),
            drawers,
            modal: RwSignal::new(ModalState::default()),
            modals: Arc::new(ModalRegistry::with_defaults()),
            friends: RwSignal::new(friends),
            chat,
            chat_room,
        }
    }

    pub fn open_drawer(&self, name: &str, params: DrawerParams) {
        #[cfg(feature = "csr")]
        {
            let ctx = self.clone();
            let name = name.to_owned();
            leptos::task::spawn_local(async move {
                if let Err(e) = crate::drawer::open_drawer(&ctx.fetch, &ctx.drawer, &ctx.drawers, &name, params).await {
                    leptos::logging::log!("drawer {name} not opened: {e}");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, params);
        }
    }

    pub fn close_drawer(&self) {
        crate::drawer::close_drawer(&self.drawer, &self.drawers);
    }

    pub fn open_modal(&self, name: &str) {
        #[cfg(feature = "csr")]
        {
            let ctx = self.clone();
            let name = name.to_owned();
            leptos::task::spawn_local(async move {
                let _ = crate::modal::open_modal(&ctx.fetch, &ctx.modals, &ctx.modal, &name).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
        }
    }

    pub fn close_modal(&self) {
        crate::modal::close_modal(&self.modal);
    }
}

/// Root application component.
///
/// Provides `ClientContext`, starts the chat socket and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = crate::util::dom::embedded_json::<CurrentUser>("current_user")
        .map(SessionState::signed_in)
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    let ctx = {
        let (chat, rx) = ChatController::channel();
        let ctx = ClientContext::new(ClientConfig::default(), session, chat);
        crate::net::chat_socket::spawn_chat_socket(ctx.config.clone(), ctx.chat_room, rx);
        ctx
    };
    #[cfg(not(feature = "csr"))]
    let ctx = ClientContext::new(ClientConfig::default(), session, ChatController::disconnected());

    provide_context(ctx);

    view! {
        <Stylesheet id="leptos" href="/pkg/social-client.css"/>
        <Title text="Pong"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
