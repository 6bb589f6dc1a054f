//! Command execution result type.

use serde::{Deserialize, Serialize};

use crate::models::TerminalLine;

/// Result of executing a command.
///
/// Commands produce output lines and may request side effects from the
/// caller: clearing the screen, flipping the theme, or opening a URL.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// Trimmed input that was run
    pub executed_input: String,
    /// Previous history with this command appended
    pub next_command_history: Vec<String>,
    /// Output lines to display
    pub output: Vec<TerminalLine>,
    /// Discard everything currently on screen
    pub should_clear: bool,
    /// Flip between light and dark
    pub should_toggle_theme: bool,
    /// URL to open in a new browsing context
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_url: Option<String>,
}

impl CommandResult {
    /// Create a result with just output, no intents.
    pub fn output(
        executed_input: impl Into<String>,
        next_command_history: Vec<String>,
        lines: Vec<TerminalLine>,
    ) -> Self {
        Self {
            executed_input: executed_input.into(),
            next_command_history,
            output: lines,
            should_clear: false,
            should_toggle_theme: false,
            open_url: None,
        }
    }

    /// Create a result that clears the screen.
    pub fn clear(executed_input: impl Into<String>, next_command_history: Vec<String>) -> Self {
        Self {
            should_clear: true,
            ..Self::output(executed_input, next_command_history, vec![])
        }
    }

    /// Set the theme-toggle intent.
    pub fn with_toggle_theme(mut self, toggle: bool) -> Self {
        self.should_toggle_theme = toggle;
        self
    }

    /// Set the open-URL intent.
    pub fn with_open_url(mut self, url: Option<String>) -> Self {
        self.open_url = url;
        self
    }
}
