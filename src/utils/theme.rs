//! Theme persistence.
//!
//! The saved theme lives in localStorage under `THEME_STORAGE_KEY`. Without
//! a saved value the `prefers-color-scheme` media query decides.

use folio_core::Theme;

use super::dom;
use crate::config::{DARK_CLASS, THEME_STORAGE_KEY};
use crate::error::StorageError;

/// Theme to start with: saved, then system preference, then light.
pub fn initial_theme() -> Theme {
    saved_theme().unwrap_or_else(|| {
        if dom::prefers_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    })
}

fn saved_theme() -> Option<Theme> {
    let value = dom::local_storage()?.get_item(THEME_STORAGE_KEY).ok()??;
    parse_saved(&value)
}

/// Only the exact values written by [`save_theme`] are honoured.
fn parse_saved(value: &str) -> Option<Theme> {
    match value {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}

pub fn save_theme(theme: Theme) -> Result<(), StorageError> {
    let storage = dom::local_storage().ok_or(StorageError::Unavailable)?;
    storage
        .set_item(THEME_STORAGE_KEY, theme.as_str())
        .map_err(|_| StorageError::SaveFailed)
}

/// Reflect `theme` on the document root.
pub fn apply_theme(theme: Theme) {
    dom::set_root_class(DARK_CLASS, theme.is_dark());
}

/// Apply and save; storage failures are logged, the theme still applies.
pub fn persist_theme(theme: Theme) {
    apply_theme(theme);
    if let Err(e) = save_theme(theme) {
        dom::warn(&format!("theme not saved: {}", e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_saved() {
        assert_eq!(parse_saved("dark"), Some(Theme::Dark));
        assert_eq!(parse_saved("light"), Some(Theme::Light));
        assert_eq!(parse_saved("Dark"), None);
        assert_eq!(parse_saved(""), None);
    }
}
