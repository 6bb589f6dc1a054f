//! Tab autocomplete for terminal commands and their arguments.
//!
//! Completes:
//! - Command names (e.g., "pro" → "projects ")
//! - `cat` file names (only `about.txt`)
//! - `theme` targets (`dark`, `light`, `toggle`)
//! - `open` project ids
//!
//! The autocomplete system supports:
//! - Single match: Complete immediately
//! - Multiple matches: Show common prefix and all options
//! - Ghost text hints while typing

use crate::commands::Command;
use crate::config::ABOUT_FILE;
use crate::models::Project;

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single exact match - complete with this value.
    Single(String),
    /// Multiple matches - (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

const THEME_TARGETS: &[&str] = &["dark", "light", "toggle"];

// ============================================================================
// Completion Context
// ============================================================================

/// Split input into the command word and the partial argument, if any.
fn split_input(input: &str) -> (&str, Option<&str>) {
    match input.split_once(' ') {
        Some((cmd, rest)) => (cmd, Some(rest.trim_start())),
        None => (input, None),
    }
}

/// Candidate arguments for a command, `None` if it takes no argument.
fn argument_candidates(cmd: &str, projects: &[Project]) -> Option<Vec<String>> {
    match cmd.to_lowercase().as_str() {
        "cat" => Some(vec![ABOUT_FILE.to_string()]),
        "theme" => Some(THEME_TARGETS.iter().map(|s| s.to_string()).collect()),
        "open" => Some(projects.iter().map(|p| p.id.clone()).collect()),
        _ => None,
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, projects: &[Project]) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    match split_input(input) {
        (partial, None) => complete_command(partial),
        (cmd, Some(partial)) => {
            // Only the first argument is completed
            if partial.contains(char::is_whitespace) {
                return AutocompleteResult::None;
            }
            match argument_candidates(cmd, projects) {
                Some(candidates) => complete_argument(cmd, partial, &candidates),
                None => AutocompleteResult::None,
            }
        }
    }
}

/// Get autocomplete suggestion for ghost text hint (while typing).
///
/// Returns the suffix that would complete the current input.
pub fn get_hint(input: &str, projects: &[Project]) -> Option<String> {
    let input = input.trim_start();
    if input.is_empty() {
        return None;
    }

    match split_input(input) {
        (partial, None) => {
            let names: Vec<String> = Command::names().iter().map(|s| s.to_string()).collect();
            hint_from(partial, &names)
        }
        (cmd, Some(partial)) => {
            if partial.contains(char::is_whitespace) {
                return None;
            }
            hint_from(partial, &argument_candidates(cmd, projects)?)
        }
    }
}

// ============================================================================
// Completion
// ============================================================================

/// Complete command name.
fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .iter()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(|s| s.to_string())
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

/// Complete the first argument of `cmd`.
fn complete_argument(cmd: &str, partial: &str, candidates: &[String]) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = candidates
        .iter()
        .filter(|c| c.to_lowercase().starts_with(&partial_lower))
        .cloned()
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} {} ", cmd, matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(format!("{} {}", cmd, common), matches)
        }
    }
}

/// First candidate extending `partial`, as the missing suffix.
fn hint_from(partial: &str, candidates: &[String]) -> Option<String> {
    let partial_lower = partial.to_lowercase();
    candidates
        .iter()
        .find(|c| {
            let lower = c.to_lowercase();
            lower.starts_with(&partial_lower) && lower != partial_lower
        })
        .and_then(|c| c.get(partial.len()..))
        .map(str::to_string)
}

// ============================================================================
// Utilities
// ============================================================================

/// Find the common prefix of multiple strings (case-insensitive).
fn find_common_prefix(strings: &[String]) -> String {
    if strings.is_empty() {
        return String::new();
    }
    if strings.len() == 1 {
        return strings[0].clone();
    }

    let first = &strings[0];
    let mut prefix_chars = first.chars().count();

    for s in &strings[1..] {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

// ============================================================================
// Tests
// ============================================================================
