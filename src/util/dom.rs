//! Browser DOM helpers.
//!
//! Requires a browser environment; native builds get no-op fallbacks where
//! callers outside `csr` blocks need them.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

/// Value of cookie `name` in a `document.cookie` string.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
}

/// Django CSRF token from the `csrftoken` cookie.
pub fn csrf_token() -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let doc = web_sys::window()?.document()?;
        let cookies = doc.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()?;
        cookie_value(&cookies, "csrftoken")
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Decode the JSON text of the page element with `id` (a `json_script` node).
pub fn embedded_json<T: serde::de::DeserializeOwned>(id: &str) -> Option<T> {
    #[cfg(feature = "csr")]
    {
        let text = web_sys::window()?.document()?.get_element_by_id(id)?.text_content()?;
        serde_json::from_str(&text).ok()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Scroll `el` to its bottom edge.
#[cfg(feature = "csr")]
pub fn scroll_to_bottom(el: &web_sys::Element, smooth: bool) {
    let options = web_sys::ScrollToOptions::new();
    options.set_top(f64::from(el.scroll_height()));
    options.set_behavior(if smooth { web_sys::ScrollBehavior::Smooth } else { web_sys::ScrollBehavior::Auto });
    el.scroll_to_with_scroll_to_options(&options);
}

/// Closest element (from the click target upwards) carrying `attr`.
#[cfg(feature = "csr")]
pub fn closest_with_attribute(ev: &web_sys::MouseEvent, attr: &str) -> Option<web_sys::Element> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    target.closest(&format!("[{attr}]")).ok().flatten()
}
