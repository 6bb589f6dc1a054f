//! Core logic for the portfolio terminal.
//!
//! This crate provides:
//! - [`resolve`] - the command interpreter, a pure function of its inputs
//! - [`TerminalSession`] - caller-side state that applies interpreter results
//! - [`autocomplete`] and [`get_hint`] for tab completion
//! - [`content`] - profile and project loading with validation
//!
//! Nothing here touches the DOM, storage or the network; front ends own
//! those and thread state in and out explicitly.

mod autocomplete;
pub mod commands;
pub mod config;
pub mod content;
pub mod contributions;
pub mod error;
pub mod models;
mod session;
pub mod utils;

pub use autocomplete::{AutocompleteResult, autocomplete, get_hint};
pub use commands::{Command, CommandResult, initial_lines, prompt_line, resolve};
pub use error::ContentError;
pub use models::{Profile, Project, TerminalLine, Theme, Tone};
pub use session::{Entry, Intent, TerminalSession};
