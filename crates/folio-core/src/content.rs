//! Profile and project content loading.
//!
//! Documents are deserialized with serde, then checked for the constraints
//! serde cannot express (non-empty strings, URL shape, unique ids). All
//! problems in a document are collected and reported together.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{PROFILE_JSON, PROJECTS_JSON, sources};
use crate::error::{ContentError, Issue, Issues};
use crate::models::{Profile, Project};

/// Absolute http(s) URL with a non-empty host and no whitespace.
///
/// Matched against the lower-cased URL.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^ \t\r\n/?#]+[^ \t\r\n]*$").unwrap());

/// Check that a string looks like an absolute http(s) URL.
pub fn is_valid_url(url: &str) -> bool {
    URL_RE.is_match(&url.to_lowercase())
}

/// Parse and validate a project list.
pub fn parse_projects(json: &str) -> Result<Vec<Project>, ContentError> {
    parse_projects_named(json, sources::PROJECTS)
}

/// Parse and validate a project list, naming `source_name` in errors.
pub fn parse_projects_named(json: &str, source_name: &str) -> Result<Vec<Project>, ContentError> {
    let projects: Vec<Project> =
        serde_json::from_str(json).map_err(|source| ContentError::Json {
            source_name: source_name.to_string(),
            source,
        })?;

    let issues = validate_projects(&projects);
    if issues.is_empty() {
        Ok(projects)
    } else {
        Err(ContentError::Invalid {
            source_name: source_name.to_string(),
            issues: Issues(issues),
        })
    }
}

/// Parse and validate a profile document.
pub fn parse_profile(json: &str) -> Result<Profile, ContentError> {
    parse_profile_named(json, sources::PROFILE)
}

/// Parse and validate a profile document, naming `source_name` in errors.
pub fn parse_profile_named(json: &str, source_name: &str) -> Result<Profile, ContentError> {
    let profile: Profile = serde_json::from_str(json).map_err(|source| ContentError::Json {
        source_name: source_name.to_string(),
        source,
    })?;

    let issues = validate_profile(&profile);
    if issues.is_empty() {
        Ok(profile)
    } else {
        Err(ContentError::Invalid {
            source_name: source_name.to_string(),
            issues: Issues(issues),
        })
    }
}

/// The project list embedded at build time.
pub fn load_projects() -> Result<Vec<Project>, ContentError> {
    parse_projects(PROJECTS_JSON)
}

/// The profile embedded at build time.
pub fn load_profile() -> Result<Profile, ContentError> {
    parse_profile(PROFILE_JSON)
}

fn validate_projects(projects: &[Project]) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut seen_ids = HashSet::new();

    for (index, project) in projects.iter().enumerate() {
        require_non_empty(&mut issues, &format!("{index}.id"), &project.id);
        require_non_empty(&mut issues, &format!("{index}.title"), &project.title);
        require_non_empty(&mut issues, &format!("{index}.summary"), &project.summary);

        if !project.id.is_empty() && !seen_ids.insert(project.id.to_lowercase()) {
            issues.push(Issue::new(
                format!("{index}.id"),
                format!("Duplicate project id '{}'", project.id),
            ));
        }

        for (field, url) in [("repoUrl", &project.repo_url), ("liveUrl", &project.live_url)] {
            if let Some(url) = url
                && !is_valid_url(url)
            {
                issues.push(Issue::new(format!("{index}.{field}"), "Invalid URL"));
            }
        }
    }

    issues
}

fn validate_profile(profile: &Profile) -> Vec<Issue> {
    let mut issues = Vec::new();
    require_non_empty(&mut issues, "name", &profile.name);
    require_non_empty(&mut issues, "title", &profile.title);
    require_non_empty(&mut issues, "heroTerminalPath", &profile.hero_terminal_path);

    if !profile.github_url.is_empty() && !is_valid_url(&profile.github_url) {
        issues.push(Issue::new("githubUrl", "Invalid URL"));
    }

    issues
}

fn require_non_empty(issues: &mut Vec<Issue>, path: &str, value: &str) {
    if value.is_empty() {
        issues.push(Issue::new(path, "Must not be empty"));
    }
}
