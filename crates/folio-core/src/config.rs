//! Core configuration.
//!
//! Centralizes the constants used by the interpreter and the terminal
//! session. Site content is embedded at compile time using `include_str!`.

// =============================================================================
// Embedded Content (loaded at compile time)
// =============================================================================

/// Profile document backing [`crate::content::load_profile`].
pub const PROFILE_JSON: &str = include_str!("../content/profile.json");

/// Project list backing [`crate::content::load_projects`].
pub const PROJECTS_JSON: &str = include_str!("../content/projects.json");

/// Source names used in validation messages.
pub mod sources {
    pub const PROFILE: &str = "content/profile.json";
    pub const PROJECTS: &str = "content/projects.json";
}

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Maximum number of output lines kept in the terminal buffer.
pub const MAX_TERMINAL_LINES: usize = 500;

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// The only file `cat` can read.
pub const ABOUT_FILE: &str = "about.txt";

/// Permission columns printed by `ls`.
pub mod listing {
    pub const DIRECTORY_MODE: &str = "drwxr-xr-x";
    pub const FILE_MODE: &str = "-rw-r--r--";
}

/// Fixed output of `help`: heading followed by muted command groups.
pub mod help {
    pub const HEADING: &str = "Available commands:";
    pub const GROUPS: &[&str] = &[
        "help, ls, pwd, whoami, cat about.txt",
        "projects, open <id|index>, theme <dark|light|toggle>",
        "history, clear",
    ];
}

/// Usage strings for commands that take arguments.
pub mod usage {
    pub const OPEN: &str = "Usage: open <id|index>";
    pub const THEME: &str = "Usage: theme <dark|light|toggle>";
}

/// Hint printed as the first line of a fresh terminal.
pub const WELCOME_HINT: &str = "Type 'help' to explore commands.";

/// Hint printed after an unknown command.
pub const UNKNOWN_COMMAND_HINT: &str = "Try 'help' for available commands.";
