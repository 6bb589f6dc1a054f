use serde::{Deserialize, Serialize};

/// Profile content shown on the site and in the hero terminal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: String,
    /// Paragraphs printed by `cat about.txt`
    pub about: Vec<String>,
    #[serde(default)]
    pub github_username: String,
    #[serde(default)]
    pub github_url: String,
    /// Working directory shown in the terminal prompt (e.g. `~/stack`)
    pub hero_terminal_path: String,
    /// Labels listed as directories by `ls`
    #[serde(default)]
    pub hero_terminal_directories: Vec<String>,
    /// Blinking cursor glyph after the input field
    #[serde(default = "default_prompt")]
    pub hero_terminal_prompt: String,
}

fn default_prompt() -> String {
    "_".to_string()
}
