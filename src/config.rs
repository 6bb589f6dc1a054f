//! Front-end configuration.
//!
//! Browser-side constants. Interpreter and content settings live in
//! `folio_core::config`.

/// localStorage key holding the saved theme (`light` or `dark`).
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Class set on `<html>` while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Media query used when no theme has been saved yet.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Window features for project links opened from the terminal.
pub const OPEN_URL_FEATURES: &str = "noopener,noreferrer";
