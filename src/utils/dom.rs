//! Thin wrappers over `web_sys` browser APIs.

use web_sys::{Storage, Window};

use crate::config::{OPEN_URL_FEATURES, PREFERS_DARK_QUERY};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Whether the user agent prefers a dark colour scheme.
pub fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .is_some_and(|mq| mq.matches())
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if root.class_list().toggle_with_force(class, enabled).is_err() {
        warn(&format!("failed to update root class '{}'", class));
    }
}

/// Open `url` in a new browsing context without an opener reference.
pub fn open_in_new_tab(url: &str) {
    let Some(window) = window() else { return };
    if window
        .open_with_url_and_target_and_features(url, "_blank", OPEN_URL_FEATURES)
        .is_err()
    {
        warn(&format!("failed to open {}", url));
    }
}

pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}
