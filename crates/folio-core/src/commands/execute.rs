//! Command execution logic.
//!
//! Contains `resolve`, the interpreter entry point, and `execute_command`,
//! which runs a parsed command against the profile and project content.

use crate::config::{
    ABOUT_FILE, UNKNOWN_COMMAND_HINT, WELCOME_HINT, help, listing, usage,
};
use crate::models::{Profile, Project, TerminalLine, Theme};

use super::{Command, CommandResult, resolve_open, resolve_theme, tokenize};

/// Interpret one line of raw terminal input.
///
/// Returns `None` for blank input, in which case nothing should change on
/// the caller's side. Otherwise the result carries the output lines, the
/// history with this command appended, and any intents for the caller.
///
/// # Arguments
///
/// * `raw_input` - Text as typed, possibly padded with whitespace
/// * `profile` - Profile content (`pwd`, `whoami`, `ls`, `cat about.txt`)
/// * `projects` - Project list (`projects`, `open`)
/// * `theme` - Current theme, read by `theme`
/// * `command_history` - Previously run commands, oldest first
pub fn resolve(
    raw_input: &str,
    profile: &Profile,
    projects: &[Project],
    theme: Theme,
    command_history: &[String],
) -> Option<CommandResult> {
    let input = raw_input.trim();
    let (name, args) = tokenize(input)?;

    let mut next_command_history = command_history.to_vec();
    next_command_history.push(input.to_string());

    let cmd = Command::parse(name, &args);
    Some(execute_command(
        cmd,
        input,
        next_command_history,
        profile,
        projects,
        theme,
    ))
}

/// Execute a parsed command and build its result.
pub fn execute_command(
    cmd: Command,
    input: &str,
    next_command_history: Vec<String>,
    profile: &Profile,
    projects: &[Project],
    theme: Theme,
) -> CommandResult {
    let lines = match cmd {
        Command::Clear => return CommandResult::clear(input, next_command_history),
        Command::Open(Some(token)) => {
            let (lines, url) = resolve_open(&token, projects);
            return CommandResult::output(input, next_command_history, lines).with_open_url(url);
        }
        Command::Theme(target) => {
            let (lines, toggle) = resolve_theme(target.as_deref(), theme);
            return CommandResult::output(input, next_command_history, lines)
                .with_toggle_theme(toggle);
        }
        Command::Help => execute_help(),
        Command::Ls => execute_ls(profile),
        Command::Pwd => vec![TerminalLine::text(&profile.hero_terminal_path)],
        Command::Whoami => vec![TerminalLine::text(format!(
            "{} ({})",
            profile.name, profile.title
        ))],
        Command::Cat(file) => execute_cat(file.as_deref(), profile),
        Command::Projects => execute_projects(projects),
        Command::Open(None) => vec![TerminalLine::error(usage::OPEN)],
        Command::History => execute_history(&next_command_history),
        Command::Unknown(name) => vec![
            TerminalLine::error(format!("Command not found: {}", name)),
            TerminalLine::muted(UNKNOWN_COMMAND_HINT),
        ],
    };

    CommandResult::output(input, next_command_history, lines)
}

/// Lines shown in a fresh terminal before any input.
pub fn initial_lines(profile: &Profile) -> Vec<TerminalLine> {
    let mut lines = vec![
        TerminalLine::muted(WELCOME_HINT),
        prompt_line(profile, "ls -la"),
    ];
    lines.extend(directory_lines(profile));
    lines
}

/// Echo of a submitted command, printed before its output.
pub fn prompt_line(profile: &Profile, input: &str) -> TerminalLine {
    TerminalLine::accent(format!("{} $ {}", profile.hero_terminal_path, input))
}

fn execute_help() -> Vec<TerminalLine> {
    std::iter::once(TerminalLine::text(help::HEADING))
        .chain(help::GROUPS.iter().map(|group| TerminalLine::muted(*group)))
        .collect()
}

fn directory_lines(profile: &Profile) -> impl Iterator<Item = TerminalLine> + '_ {
    profile
        .hero_terminal_directories
        .iter()
        .map(|dir| TerminalLine::text(format!("{} {}", listing::DIRECTORY_MODE, dir)))
}

fn execute_ls(profile: &Profile) -> Vec<TerminalLine> {
    let mut lines: Vec<_> = directory_lines(profile).collect();
    lines.push(TerminalLine::text(format!(
        "{} {}",
        listing::FILE_MODE,
        ABOUT_FILE
    )));
    lines
}

fn execute_cat(file: Option<&str>, profile: &Profile) -> Vec<TerminalLine> {
    match file {
        Some(file) if file.to_lowercase() == ABOUT_FILE => profile
            .about
            .iter()
            .map(|paragraph| TerminalLine::text(format!("- {}", paragraph)))
            .collect(),
        _ => vec![TerminalLine::error(format!(
            "Only 'cat {}' is supported.",
            ABOUT_FILE
        ))],
    }
}

fn execute_projects(projects: &[Project]) -> Vec<TerminalLine> {
    projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            TerminalLine::text(format!("[{}] {} - {}", i + 1, project.id, project.title))
        })
        .collect()
}

fn execute_history(history: &[String]) -> Vec<TerminalLine> {
    history
        .iter()
        .enumerate()
        .map(|(i, cmd)| TerminalLine::muted(format!("{}  {}", i + 1, cmd)))
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tone;

    fn profile() -> Profile {
        Profile {
            name: "Ada Example".to_string(),
            title: "Software Engineer".to_string(),
            tagline: String::new(),
            about: vec!["First paragraph.".to_string(), "Second paragraph.".to_string()],
            github_username: String::new(),
            github_url: String::new(),
            hero_terminal_path: "~/stack".to_string(),
            hero_terminal_directories: vec!["AI Models".to_string(), "Cloud Native".to_string()],
            hero_terminal_prompt: "_".to_string(),
        }
    }

    fn project(id: &str, live: Option<&str>, repo: Option<&str>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("{} title", id),
            summary: "summary".to_string(),
            highlights: vec![],
            stack: vec![],
            repo_url: repo.map(String::from),
            live_url: live.map(String::from),
        }
    }

    fn projects() -> Vec<Project> {
        vec![
            project("site", Some("https://site.dev"), Some("https://github.com/x/site")),
            project("tool", None, Some("https://github.com/x/tool")),
            project("Empty", None, None),
        ]
    }

    fn run(input: &str) -> CommandResult {
        run_with(input, Theme::Light, &[])
    }

    fn run_with(input: &str, theme: Theme, history: &[&str]) -> CommandResult {
        let history: Vec<String> = history.iter().map(|s| s.to_string()).collect();
        resolve(input, &profile(), &projects(), theme, &history).expect("non-blank input")
    }

    #[test]
    fn test_blank_input_is_noop() {
        for input in ["", "   ", "\t\n "] {
            assert_eq!(resolve(input, &profile(), &projects(), Theme::Light, &[]), None);
        }
    }

    #[test]
    fn test_history_appends_trimmed_input() {
        let result = run_with("  pwd  ", Theme::Light, &["help"]);
        assert_eq!(result.executed_input, "pwd");
        assert_eq!(result.next_command_history, vec!["help", "pwd"]);

        let result = run_with("clear", Theme::Light, &["help"]);
        assert_eq!(result.next_command_history, vec!["help", "clear"]);
    }

    #[test]
    fn test_clear() {
        let result = run("CLEAR");
        assert!(result.should_clear);
        assert!(result.output.is_empty());
        assert!(!result.should_toggle_theme);
        assert_eq!(result.open_url, None);
    }

    #[test]
    fn test_help() {
        let result = run("help");
        assert!(!result.should_clear);
        assert_eq!(
            result.output,
            vec![
                TerminalLine::text("Available commands:"),
                TerminalLine::muted("help, ls, pwd, whoami, cat about.txt"),
                TerminalLine::muted("projects, open <id|index>, theme <dark|light|toggle>"),
                TerminalLine::muted("history, clear"),
            ]
        );
    }

    #[test]
    fn test_ls() {
        assert_eq!(
            run("ls").output,
            vec![
                TerminalLine::text("drwxr-xr-x AI Models"),
                TerminalLine::text("drwxr-xr-x Cloud Native"),
                TerminalLine::text("-rw-r--r-- about.txt"),
            ]
        );
    }

    #[test]
    fn test_pwd_and_whoami() {
        assert_eq!(run("pwd").output, vec![TerminalLine::text("~/stack")]);
        assert_eq!(
            run("whoami").output,
            vec![TerminalLine::text("Ada Example (Software Engineer)")]
        );
    }

    #[test]
    fn test_cat_about() {
        assert_eq!(
            run("cat ABOUT.txt").output,
            vec![
                TerminalLine::text("- First paragraph."),
                TerminalLine::text("- Second paragraph."),
            ]
        );
    }

    #[test]
    fn test_cat_unsupported() {
        for input in ["cat x.txt", "cat"] {
            assert_eq!(
                run(input).output,
                vec![TerminalLine::error("Only 'cat about.txt' is supported.")]
            );
        }
    }

    #[test]
    fn test_projects_listing() {
        assert_eq!(
            run("projects").output,
            vec![
                TerminalLine::text("[1] site - site title"),
                TerminalLine::text("[2] tool - tool title"),
                TerminalLine::text("[3] Empty - Empty title"),
            ]
        );
        let empty = resolve("projects", &profile(), &[], Theme::Light, &[]).unwrap();
        assert!(empty.output.is_empty());
    }

    #[test]
    fn test_open() {
        let result = run("open 1");
        assert_eq!(result.open_url.as_deref(), Some("https://site.dev"));
        assert_eq!(result.output[0].tone, Tone::Success);
        assert!(!result.should_toggle_theme);

        let result = run("open TOOL");
        assert_eq!(result.open_url.as_deref(), Some("https://github.com/x/tool"));

        let result = run("open missing-id");
        assert_eq!(result.output.len(), 1);
        assert!(result.output[0].text.contains("not found"));
        assert_eq!(result.open_url, None);

        let result = run("open empty");
        assert_eq!(
            result.output,
            vec![TerminalLine::error("Project 'Empty' has no configured link to open.")]
        );
    }

    #[test]
    fn test_open_usage() {
        assert_eq!(
            run("open").output,
            vec![TerminalLine::error("Usage: open <id|index>")]
        );
    }

    #[test]
    fn test_theme_commands() {
        let result = run_with("theme toggle", Theme::Light, &[]);
        assert!(result.should_toggle_theme);
        assert_eq!(result.output[0].tone, Tone::Success);
        assert!(result.output[0].text.contains("dark"));

        let result = run_with("theme toggle", Theme::Dark, &[]);
        assert!(result.output[0].text.contains("light"));

        let result = run_with("theme LIGHT", Theme::Light, &[]);
        assert!(!result.should_toggle_theme);
        assert_eq!(
            result.output,
            vec![TerminalLine::muted("Theme already set to light.")]
        );

        let result = run_with("theme", Theme::Dark, &[]);
        assert_eq!(result.output[0], TerminalLine::text("Current theme: dark"));
        assert!(!result.should_toggle_theme);
    }

    #[test]
    fn test_history() {
        let result = run_with("history", Theme::Light, &["help", "pwd"]);
        assert_eq!(
            result.output,
            vec![
                TerminalLine::muted("1  help"),
                TerminalLine::muted("2  pwd"),
                TerminalLine::muted("3  history"),
            ]
        );
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            run("anything-unknown").output,
            vec![
                TerminalLine::error("Command not found: anything-unknown"),
                TerminalLine::muted("Try 'help' for available commands."),
            ]
        );
        assert_eq!(
            run("FooBar baz").output[0],
            TerminalLine::error("Command not found: FooBar")
        );
    }

    #[test]
    fn test_only_theme_and_open_set_intents() {
        for input in ["help", "ls", "pwd", "whoami", "cat about.txt", "projects", "history", "nope"] {
            let result = run(input);
            assert!(!result.should_clear, "{input}");
            assert!(!result.should_toggle_theme, "{input}");
            assert_eq!(result.open_url, None, "{input}");
        }
    }

    #[test]
    fn test_resolve_is_deterministic() {
        for input in ["help", "open 2", "theme toggle", "history", "clear", "zzz"] {
            assert_eq!(
                run_with(input, Theme::Dark, &["ls"]),
                run_with(input, Theme::Dark, &["ls"])
            );
        }
    }

    #[test]
    fn test_initial_lines() {
        let lines = initial_lines(&profile());
        assert_eq!(lines[0], TerminalLine::muted("Type 'help' to explore commands."));
        assert_eq!(lines[1], TerminalLine::accent("~/stack $ ls -la"));
        assert_eq!(lines[2], TerminalLine::text("drwxr-xr-x AI Models"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_prompt_line() {
        assert_eq!(
            prompt_line(&profile(), "open 1"),
            TerminalLine::accent("~/stack $ open 1")
        );
    }
}
