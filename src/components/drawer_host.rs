//! Drawer container: fetched markup plus the open drawer's own view.

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::state::drawer::DrawerPhase;

/// Single sliding drawer shared by every drawer kind.
///
/// Elements carrying `data-drawer`, `data-drawer-url` and optionally
/// `data-drawer-query` open that drawer when clicked.
#[component]
pub fn DrawerHost() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let drawer = ctx.drawer;
    let open_name = Memo::new(move |_| drawer.with(|d| d.open_name().map(str::to_owned)));
    let is_open = move || drawer.with(|d| d.phase == DrawerPhase::Open);
    let markup = move || drawer.with(|d| d.markup.clone());

    #[cfg(feature = "csr")]
    {
        let open_ctx = ctx.clone();
        let click = window_event_listener(leptos::ev::click, move |ev| {
            let Some(el) = crate::util::dom::closest_with_attribute(&ev, "data-drawer") else {
                return;
            };
            let name = el.get_attribute("data-drawer").unwrap_or_default();
            let url = el.get_attribute("data-drawer-url");
            let query = el.get_attribute("data-drawer-query");
            if let Some((name, params)) = crate::drawer::trigger_target(&name, url.as_deref(), query.as_deref()) {
                ev.prevent_default();
                open_ctx.open_drawer(&name, params);
            }
        });
        on_cleanup(move || click.remove());
    }

    let close_ctx = ctx.clone();
    let on_close = move |_| close_ctx.close_drawer();

    let body = move || open_name.get().and_then(|name| ctx.drawers.view_for(&name));

    view! {
        <aside class="drawer" id="drawer" class:drawer-open=is_open>
            <button class="drawer__close" id="closeDrawerBtn" on:click=on_close title="Close">
                "✕"
            </button>
            <div class="drawer__content" id="drawer-content" inner_html=markup></div>
            {body}
        </aside>
    }
}
