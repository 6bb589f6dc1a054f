//! `open <id|index>` resolution.

use crate::models::{Project, TerminalLine};

/// Resolve an `open` token against the project list.
///
/// A token whose leading integer is an in-range 1-based index always selects
/// by position, even if some project id looks numeric (`2abc` and `2.0` both
/// select the second project). Otherwise the token is matched against ids
/// case-insensitively.
///
/// Returns the output lines and the URL to open, if any.
pub fn resolve_open(token: &str, projects: &[Project]) -> (Vec<TerminalLine>, Option<String>) {
    let normalized = token.to_lowercase();

    let by_index = leading_integer(&normalized)
        .and_then(|index| usize::try_from(index).ok())
        .filter(|index| (1..=projects.len()).contains(index))
        .map(|index| &projects[index - 1]);

    let selected = by_index.or_else(|| projects.iter().find(|p| p.matches_id(&normalized)));

    let Some(project) = selected else {
        return (
            vec![TerminalLine::error(format!(
                "Project '{}' not found. Use 'projects' to list available entries.",
                token
            ))],
            None,
        );
    };

    match project.link() {
        Some(url) => (
            vec![TerminalLine::success(format!("Opening {}...", project.title))],
            Some(url.to_string()),
        ),
        None => (
            vec![TerminalLine::error(format!(
                "Project '{}' has no configured link to open.",
                project.id
            ))],
            None,
        ),
    }
}

/// Integer value of an optional sign followed by the leading ASCII digits.
///
/// Trailing characters are ignored; no digits or overflow gives `None`.
fn leading_integer(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let value: i64 = rest[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;

    fn project(id: &str, live: Option<&str>, repo: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("{} title", id),
            summary: String::new(),
            highlights: vec![],
            stack: vec![],
            repo_url: repo.map(String::from),
            live_url: live.map(String::from),
        }
    }

    fn sample() -> Vec<Project> {
        vec![
            project("alpha", Some("https://alpha.dev"), Some("https://github.com/a")),
            project("beta", None, Some("https://github.com/b")),
            project("1", Some("https://numeric.dev"), None),
        ]
    }

    #[test]
    fn test_open_by_index() {
        let (lines, url) = resolve_open("2", &sample());
        assert_eq!(url.as_deref(), Some("https://github.com/b"));
        assert_eq!(lines, vec![TerminalLine::success("Opening beta title...")]);
    }

    #[test]
    fn test_open_by_id_case_insensitive() {
        let (_, url) = resolve_open("ALPHA", &sample());
        assert_eq!(url.as_deref(), Some("https://alpha.dev"));
    }

    #[test]
    fn test_index_takes_precedence_over_numeric_id() {
        // "1" is both the first index and the id of the third project
        let (_, url) = resolve_open("1", &sample());
        assert_eq!(url.as_deref(), Some("https://alpha.dev"));
    }

    #[test]
    fn test_out_of_range_index_falls_back_to_id() {
        let projects = vec![project("7", None, Some("https://github.com/seven"))];
        let (_, url) = resolve_open("7", &projects);
        assert_eq!(url.as_deref(), Some("https://github.com/seven"));
    }

    #[test]
    fn test_zero_and_negative_are_not_indices() {
        for token in ["0", "-1"] {
            let (lines, url) = resolve_open(token, &sample());
            assert_eq!(url, None);
            assert_eq!(lines[0].tone, Tone::Error);
        }
    }

    #[test]
    fn test_leading_digits_select_by_index() {
        for token in ["2abc", "2.0", "+2", "02"] {
            let (_, url) = resolve_open(token, &sample());
            assert_eq!(url.as_deref(), Some("https://github.com/b"), "token {}", token);
        }
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("12px"), Some(12));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("+"), None);
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_not_found_keeps_original_token() {
        let (lines, url) = resolve_open("Missing", &sample());
        assert_eq!(url, None);
        assert_eq!(
            lines,
            vec![TerminalLine::error(
                "Project 'Missing' not found. Use 'projects' to list available entries."
            )]
        );
    }

    #[test]
    fn test_no_link() {
        let projects = vec![project("no-link", None, None)];
        let (lines, url) = resolve_open("no-link", &projects);
        assert_eq!(url, None);
        assert_eq!(
            lines,
            vec![TerminalLine::error(
                "Project 'no-link' has no configured link to open."
            )]
        );
    }

    #[test]
    fn test_empty_project_list() {
        let (lines, url) = resolve_open("1", &[]);
        assert_eq!(url, None);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].text.contains("not found"));
    }
}
