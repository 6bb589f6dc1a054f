//! ANSI rendering of terminal lines.

use std::io::{self, Write};

use folio_core::{CommandResult, TerminalLine, Tone};

const RESET: &str = "\x1b[0m";

/// Colours lines by tone, or passes them through when disabled.
#[derive(Clone, Copy, Debug)]
pub struct Styler {
    color: bool,
}

impl Styler {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn is_color(&self) -> bool {
        self.color
    }

    fn code(tone: Tone) -> Option<&'static str> {
        match tone {
            Tone::Default => None,
            Tone::Accent => Some("\x1b[36m"),
            Tone::Error => Some("\x1b[31m"),
            Tone::Success => Some("\x1b[32m"),
            Tone::Muted => Some("\x1b[90m"),
        }
    }

    pub fn paint(&self, line: &TerminalLine) -> String {
        match Self::code(line.tone) {
            Some(code) if self.color => format!("{}{}{}", code, line.text, RESET),
            _ => line.text.clone(),
        }
    }
}

/// Describe the caller-side intents of a one-shot result.
pub fn write_intents(out: &mut impl Write, styler: &Styler, result: &CommandResult) -> io::Result<()> {
    if let Some(url) = &result.open_url {
        writeln!(out, "{}", styler.paint(&TerminalLine::muted(format!("open: {}", url))))?;
    }
    if result.should_toggle_theme {
        writeln!(out, "{}", styler.paint(&TerminalLine::muted("theme: toggle")))?;
    }
    if result.should_clear {
        writeln!(out, "{}", styler.paint(&TerminalLine::muted("screen: clear")))?;
    }
    Ok(())
}
