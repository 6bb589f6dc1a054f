use serde::{Deserialize, Serialize};

/// A portfolio project entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Lookup key for `open`, compared case-insensitively
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub stack: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl Project {
    /// URL to open for this project, preferring the live deployment.
    pub fn link(&self) -> Option<&str> {
        self.live_url.as_deref().or(self.repo_url.as_deref())
    }

    /// Case-insensitive id comparison against an already lower-cased key.
    pub fn matches_id(&self, lowercase_key: &str) -> bool {
        self.id.to_lowercase() == lowercase_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(live: Option<&str>, repo: Option<&str>) -> Project {
        Project {
            id: "Demo".to_string(),
            title: "Demo".to_string(),
            summary: String::new(),
            highlights: vec![],
            stack: vec![],
            repo_url: repo.map(String::from),
            live_url: live.map(String::from),
        }
    }

    #[test]
    fn test_link_prefers_live_url() {
        let p = project(Some("https://live.example"), Some("https://github.com/x"));
        assert_eq!(p.link(), Some("https://live.example"));
    }

    #[test]
    fn test_link_falls_back_to_repo() {
        let p = project(None, Some("https://github.com/x"));
        assert_eq!(p.link(), Some("https://github.com/x"));
        assert_eq!(project(None, None).link(), None);
    }

    #[test]
    fn test_matches_id() {
        let p = project(None, None);
        assert!(p.matches_id("demo"));
        assert!(!p.matches_id("Demo"));
        assert!(!p.matches_id("other"));
    }
}
