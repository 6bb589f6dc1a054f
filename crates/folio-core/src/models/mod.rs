//! Data models shared by the interpreter and its callers.
//!
//! Contains domain types for:
//! - [`Profile`], [`Project`] - Read-only site content
//! - [`TerminalLine`], [`Tone`] - Terminal output
//! - [`Theme`] - Light/dark colour scheme

mod profile;
mod project;
mod terminal;
mod theme;

pub use profile::Profile;
pub use project::Project;
pub use terminal::{TerminalLine, Tone};
pub use theme::{Theme, UnknownTheme};
