//! `theme [dark|light|toggle]` resolution.

use crate::config::usage;
use crate::models::{TerminalLine, Theme};

/// Argument accepted by the `theme` command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeTarget {
    Set(Theme),
    Toggle,
}

impl ThemeTarget {
    /// Parse an already lower-cased argument.
    pub fn parse(arg: &str) -> Option<Self> {
        match arg {
            "toggle" => Some(Self::Toggle),
            "dark" => Some(Self::Set(Theme::Dark)),
            "light" => Some(Self::Set(Theme::Light)),
            _ => None,
        }
    }
}

/// Resolve a `theme` argument against the current theme.
///
/// Returns the output lines and whether the caller should flip the theme.
/// The toggle message names the theme the caller is expected to switch to;
/// the interpreter does not flip anything itself.
pub fn resolve_theme(target: Option<&str>, current: Theme) -> (Vec<TerminalLine>, bool) {
    let Some(target) = target else {
        return (
            vec![
                TerminalLine::text(format!("Current theme: {}", current)),
                TerminalLine::muted(usage::THEME),
            ],
            false,
        );
    };

    match ThemeTarget::parse(target) {
        Some(ThemeTarget::Toggle) => (
            vec![TerminalLine::success(format!(
                "Theme toggled to {}.",
                current.toggled()
            ))],
            true,
        ),
        Some(ThemeTarget::Set(theme)) if theme == current => (
            vec![TerminalLine::muted(format!("Theme already set to {}.", current))],
            false,
        ),
        Some(ThemeTarget::Set(theme)) => (
            vec![TerminalLine::success(format!("Theme set to {}.", theme))],
            true,
        ),
        None => (vec![TerminalLine::error(usage::THEME)], false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_argument_reports_current() {
        let (lines, toggle) = resolve_theme(None, Theme::Light);
        assert!(!toggle);
        assert_eq!(
            lines,
            vec![
                TerminalLine::text("Current theme: light"),
                TerminalLine::muted("Usage: theme <dark|light|toggle>"),
            ]
        );
    }

    #[test]
    fn test_toggle_predicts_next_theme() {
        let (lines, toggle) = resolve_theme(Some("toggle"), Theme::Light);
        assert!(toggle);
        assert_eq!(lines, vec![TerminalLine::success("Theme toggled to dark.")]);

        let (lines, toggle) = resolve_theme(Some("toggle"), Theme::Dark);
        assert!(toggle);
        assert_eq!(lines, vec![TerminalLine::success("Theme toggled to light.")]);
    }

    #[test]
    fn test_invalid_target() {
        let (lines, toggle) = resolve_theme(Some("bad"), Theme::Light);
        assert!(!toggle);
        assert_eq!(
            lines,
            vec![TerminalLine::error("Usage: theme <dark|light|toggle>")]
        );
    }

    #[test]
    fn test_already_set() {
        let (lines, toggle) = resolve_theme(Some("light"), Theme::Light);
        assert!(!toggle);
        assert_eq!(lines, vec![TerminalLine::muted("Theme already set to light.")]);
    }

    #[test]
    fn test_switch_explicit() {
        let (lines, toggle) = resolve_theme(Some("dark"), Theme::Light);
        assert!(toggle);
        assert_eq!(lines, vec![TerminalLine::success("Theme set to dark.")]);
    }

    #[test]
    fn test_target_parse() {
        assert_eq!(ThemeTarget::parse("toggle"), Some(ThemeTarget::Toggle));
        assert_eq!(ThemeTarget::parse("dark"), Some(ThemeTarget::Set(Theme::Dark)));
        assert_eq!(ThemeTarget::parse("Dark"), None);
        assert_eq!(ThemeTarget::parse(""), None);
    }
}
