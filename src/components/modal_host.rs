//! Modal overlay and container.

use leptos::prelude::*;

use crate::app::ClientContext;

/// The page's single modal container.
///
/// Click on the overlay or the close button closes the modal; clicks inside
/// the content stop at the content. Escape closes too. Any element with a
/// `data-modal` attribute opens the named modal.
#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let modal = ctx.modal;
    let active = move || modal.with(|m| m.active);
    let active_name = move || modal.with(|m| m.active_name().map(str::to_owned));
    let markup = move || modal.with(|m| m.rendered.as_ref().map(|r| r.markup.clone()).unwrap_or_default());

    #[cfg(feature = "csr")]
    {
        let open_ctx = ctx.clone();
        let click = window_event_listener(leptos::ev::click, move |ev| {
            let Some(el) = crate::util::dom::closest_with_attribute(&ev, "data-modal") else {
                return;
            };
            ev.prevent_default();
            if let Some(name) = el.get_attribute("data-modal") {
                open_ctx.open_modal(&name);
            }
        });
        let key_ctx = ctx.clone();
        let keydown = window_event_listener(leptos::ev::keydown, move |ev| {
            if ev.key() == "Escape" && key_ctx.modal.with_untracked(|m| m.active) {
                key_ctx.close_modal();
            }
        });
        on_cleanup(move || {
            click.remove();
            keydown.remove();
        });
    }

    let overlay_ctx = ctx.clone();
    let on_overlay = move |_| overlay_ctx.close_modal();
    let on_close = move |_| ctx.close_modal();

    view! {
        <div class="modal-overlay" id="modalOverlay" class:modal-active=active on:click=on_overlay>
            <div class="modal" id="modal" class:modal-active=active data-active-modal=active_name on:click=|ev| ev.stop_propagation()>
                <button class="modal__close" id="closeModalBtn" on:click=on_close title="Close">
                    "✕"
                </button>
                <div class="modal__content" id="modal-content" inner_html=markup></div>
            </div>
        </div>
    }
}
