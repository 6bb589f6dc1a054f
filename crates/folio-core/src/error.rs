//! Error types for content loading.
//!
//! The interpreter itself never fails: every bad input becomes an
//! error-toned output line. Errors here only concern the profile and
//! project documents the interpreter is fed with.

use std::fmt;

use thiserror::Error;

/// A single validation problem found in a content document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// Dotted location of the offending value (`0.id`)
    pub path: String,
    pub message: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// All issues found in one document, rendered as `a: x; b: y`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Issues(pub Vec<Issue>);

impl fmt::Display for Issues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

/// Errors raised while parsing profile or project content.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not well-formed JSON or does not match the schema shape.
    #[error("Invalid {source_name}: {source}")]
    Json {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but failed validation.
    #[error("Invalid {source_name}: {issues}")]
    Invalid { source_name: String, issues: Issues },
}

impl ContentError {
    /// Validation issues, empty for JSON syntax errors.
    pub fn issues(&self) -> &[Issue] {
        match self {
            Self::Json { .. } => &[],
            Self::Invalid { issues, .. } => &issues.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_display() {
        assert_eq!(Issue::new("0.id", "empty").to_string(), "0.id: empty");
    }

    #[test]
    fn test_invalid_message_joins_issues() {
        let err = ContentError::Invalid {
            source_name: "content/projects.json".to_string(),
            issues: Issues(vec![Issue::new("0.id", "a"), Issue::new("1.title", "b")]),
        };
        assert_eq!(
            err.to_string(),
            "Invalid content/projects.json: 0.id: a; 1.title: b"
        );
        assert_eq!(err.issues().len(), 2);
    }
}
