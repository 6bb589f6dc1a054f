//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `CommandResult` for command execution results
//! - `resolve` for turning one line of raw input into a result
//!
//! # Architecture
//!
//! Input is trimmed and split on whitespace. The first word is parsed into
//! the `Command` enum, then executed via `execute_command`. Every handler is
//! a pure function of its inputs; side effects (opening a URL, flipping the
//! theme, clearing the screen) are returned as intents on the result.

mod execute;
mod open;
mod result;
mod theme;

pub use execute::{execute_command, initial_lines, prompt_line, resolve};
pub use open::resolve_open;
pub use result::CommandResult;
pub use theme::{ThemeTarget, resolve_theme};

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Ls,
    Pwd,
    Whoami,
    /// `cat <file>`; `None` when no file was given
    Cat(Option<String>),
    Projects,
    /// `open <id|index>`, token kept in its original case
    Open(Option<String>),
    /// `theme [dark|light|toggle]`, argument lower-cased
    Theme(Option<String>),
    History,
    Clear,
    /// Unrecognised command name, in its original case
    Unknown(String),
}

impl Command {
    /// Get all available command names for autocomplete.
    pub fn names() -> &'static [&'static str] {
        &[
            "cat", "clear", "help", "history", "ls", "open", "projects", "pwd", "theme", "whoami",
        ]
    }

    /// Parse command from name and arguments.
    ///
    /// The name is matched case-insensitively. Extra arguments are ignored.
    pub fn parse(name: &str, args: &[&str]) -> Self {
        let first = args.first().map(|arg| arg.to_string());

        match name.to_lowercase().as_str() {
            "help" => Self::Help,
            "ls" => Self::Ls,
            "pwd" => Self::Pwd,
            "whoami" => Self::Whoami,
            "cat" => Self::Cat(first),
            "projects" => Self::Projects,
            "open" => Self::Open(first),
            "theme" => Self::Theme(first.map(|arg| arg.to_lowercase())),
            "history" => Self::History,
            "clear" => Self::Clear,
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Split trimmed input into a command name and its arguments.
///
/// Returns `None` for blank input.
pub fn tokenize(input: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = input.split_whitespace();
    let name = words.next()?;
    Some((name, words.collect()))
}

// =============================================================================
// Tests
// =============================================================================
