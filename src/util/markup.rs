//! Helpers for reading data out of server-rendered partial markup.
//!
//! Django's `json_script` filter embeds values as
//! `<script id="..." type="application/json">"42"</script>`. Drawer bodies
//! carry their room id this way, so it can be read straight from the fetched
//! markup before the container is even painted.

#[cfg(test)]
#[path = "markup_test.rs"]
mod markup_test;

/// Text content of the first element whose `id` attribute is `id`.
///
/// Only attributes inside a start tag count: `data-id="..."` and text that
/// merely spells out `id="..."` are skipped.
pub fn element_text<'a>(markup: &'a str, id: &str) -> Option<&'a str> {
    let mut rest = markup;
    while let Some(open) = rest.find('<') {
        let after_lt = &rest[open + 1..];
        let tag_end = after_lt.find('>')?;
        let tag = &after_lt[..tag_end];
        let body = &after_lt[tag_end + 1..];
        if has_id_attribute(tag, id) {
            let close = body.find("</")?;
            return Some(&body[..close]);
        }
        rest = body;
    }
    None
}

fn has_id_attribute(tag: &str, id: &str) -> bool {
    if tag.starts_with(['/', '!', '?']) {
        return false;
    }
    [format!("id=\"{id}\""), format!("id='{id}'")].iter().any(|needle| {
        tag.match_indices(needle.as_str())
            .any(|(at, _)| tag[..at].ends_with(|c: char| c.is_ascii_whitespace()))
    })
}

/// JSON scalar embedded under `id`, normalized to a string.
///
/// Strings are returned verbatim and integers in decimal. Anything else,
/// including malformed JSON, yields `None`.
pub fn embedded_json_scalar(markup: &str, id: &str) -> Option<String> {
    let text = element_text(markup, id)?.trim();
    let value: serde_json::Value = serde_json::from_str(text).ok()?;
    crate::net::types::room_id_from_value(&value)
}
