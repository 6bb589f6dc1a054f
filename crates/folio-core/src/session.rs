//! Caller-side terminal state.
//!
//! The interpreter never touches state; [`TerminalSession`] is the owner
//! that applies each [`CommandResult`]: it keeps the display buffer, the
//! command history and the current theme, and hands one-shot side effects
//! (opening a URL) back to the front end as an [`Intent`].

use crate::commands::{CommandResult, initial_lines, prompt_line, resolve};
use crate::config::{MAX_COMMAND_HISTORY, MAX_TERMINAL_LINES};
use crate::models::{Profile, Project, TerminalLine, Theme};
use crate::utils::RingBuffer;

/// A displayed line with a stable id for keyed rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub id: u64,
    pub line: TerminalLine,
}

/// Side effects the front end must carry out after a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Intent {
    /// URL to open in a new browsing context
    pub open_url: Option<String>,
    /// The session theme changed and should be applied and persisted
    pub theme_changed: bool,
}

/// Terminal state owned by the caller of the interpreter.
///
/// Output is kept in a [`RingBuffer`] bounded by `MAX_TERMINAL_LINES`, command
/// history is bounded by `MAX_COMMAND_HISTORY`.
#[derive(Clone, Debug)]
pub struct TerminalSession {
    lines: RingBuffer<Entry>,
    command_history: Vec<String>,
    history_index: Option<usize>,
    theme: Theme,
    next_id: u64,
}

impl TerminalSession {
    /// Creates a session showing the greeting lines for `profile`.
    pub fn new(profile: &Profile, theme: Theme) -> Self {
        let mut session = Self {
            lines: RingBuffer::new(MAX_TERMINAL_LINES),
            command_history: Vec::new(),
            history_index: None,
            theme,
            next_id: 0,
        };
        session.push_lines(initial_lines(profile));
        session
    }

    /// Run one line of input and apply its result.
    ///
    /// Blank input changes nothing and returns `None`.
    pub fn submit(&mut self, raw_input: &str, profile: &Profile, projects: &[Project]) -> Option<Intent> {
        let result = resolve(raw_input, profile, projects, self.theme, &self.command_history)?;
        Some(self.apply(result, profile))
    }

    /// Apply an interpreter result to this session.
    pub fn apply(&mut self, result: CommandResult, profile: &Profile) -> Intent {
        let CommandResult {
            executed_input,
            next_command_history,
            output,
            should_clear,
            should_toggle_theme,
            open_url,
        } = result;

        self.command_history = next_command_history;
        if self.command_history.len() > MAX_COMMAND_HISTORY {
            let excess = self.command_history.len() - MAX_COMMAND_HISTORY;
            self.command_history.drain(..excess);
        }
        self.history_index = None;

        if should_clear {
            self.lines.clear();
        } else {
            self.push_lines(std::iter::once(prompt_line(profile, &executed_input)).chain(output));
        }

        if should_toggle_theme {
            self.theme = self.theme.toggled();
        }

        Intent {
            open_url,
            theme_changed: should_toggle_theme,
        }
    }

    /// Appends lines, numbering each with the next id.
    fn push_lines(&mut self, lines: impl IntoIterator<Item = TerminalLine>) {
        let next_id = &mut self.next_id;
        self.lines.extend(lines.into_iter().map(|line| {
            let id = *next_id;
            *next_id += 1;
            Entry { id, line }
        }));
    }

    /// Step through command history.
    ///
    /// Negative `direction` moves to older commands, positive to newer ones.
    /// Moving past the newest entry returns `None` (an empty input line).
    pub fn navigate_history(&mut self, direction: i32) -> Option<String> {
        if self.command_history.is_empty() {
            return None;
        }

        let last = self.command_history.len() - 1;
        let new_index = match self.history_index {
            None if direction < 0 => Some(last),
            Some(i) if direction < 0 && i > 0 => Some(i - 1),
            Some(i) if direction > 0 && i < last => Some(i + 1),
            Some(_) if direction > 0 => None,
            current => current,
        };

        self.history_index = new_index;
        new_index.map(|i| self.command_history[i].clone())
    }

    pub fn lines(&self) -> &RingBuffer<Entry> {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.command_history
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
