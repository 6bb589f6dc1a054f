//! Terminal-related data types for output rendering.

use serde::{Deserialize, Serialize};

/// Display hint attached to an output line.
///
/// Tones carry no meaning beyond presentation; the front end maps each one
/// to a colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Default,
    /// Prompt echoes and highlights
    Accent,
    Error,
    Success,
    /// Hints and secondary information
    Muted,
}

impl Tone {
    fn is_default(&self) -> bool {
        *self == Self::Default
    }
}

/// A single line of terminal output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalLine {
    pub text: String,
    #[serde(default, skip_serializing_if = "Tone::is_default")]
    pub tone: Tone,
}

impl TerminalLine {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self::new(s, Tone::Default)
    }

    pub fn accent(s: impl Into<String>) -> Self {
        Self::new(s, Tone::Accent)
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::new(s, Tone::Error)
    }

    pub fn success(s: impl Into<String>) -> Self {
        Self::new(s, Tone::Success)
    }

    pub fn muted(s: impl Into<String>) -> Self {
        Self::new(s, Tone::Muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_constructors() {
        assert_eq!(TerminalLine::text("a").tone, Tone::Default);
        assert_eq!(TerminalLine::accent("a").tone, Tone::Accent);
        assert_eq!(TerminalLine::error("a").tone, Tone::Error);
        assert_eq!(TerminalLine::success("a").tone, Tone::Success);
        assert_eq!(TerminalLine::muted("a").tone, Tone::Muted);
        assert_eq!(TerminalLine::text("hello").text, "hello");
    }

    #[test]
    fn test_default_tone_omitted_in_json() {
        let json = serde_json::to_string(&TerminalLine::text("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi"}"#);

        let json = serde_json::to_string(&TerminalLine::muted("hi")).unwrap();
        assert_eq!(json, r#"{"text":"hi","tone":"muted"}"#);
    }

    #[test]
    fn test_missing_tone_deserializes_as_default() {
        let line: TerminalLine = serde_json::from_str(r#"{"text":"x"}"#).unwrap();
        assert_eq!(line, TerminalLine::text("x"));
    }
}
