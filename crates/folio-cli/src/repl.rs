//! Interactive terminal loop.

use std::io::{BufRead, Write};

use folio_core::{Profile, Project, TerminalSession, Theme};

use crate::CliError;
use crate::render::Styler;

/// Words that end the session in addition to end of input.
const EXIT_COMMANDS: &[&str] = &["exit", "quit"];

/// Read commands line by line until EOF or `exit`.
///
/// Only lines added since the previous command are printed, so the loop
/// behaves like the web terminal's scrolling buffer. `clear` is rendered
/// as an ANSI screen clear when colours are enabled.
pub fn run_repl(
    profile: &Profile,
    projects: &[Project],
    theme: Theme,
    styler: Styler,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<(), CliError> {
    let mut session = TerminalSession::new(profile, theme);
    let mut last_seen = None;

    print_new_lines(&session, &mut last_seen, &styler, &mut out)?;
    write!(out, "{} $ ", profile.hero_terminal_path)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if EXIT_COMMANDS.contains(&line.trim().to_lowercase().as_str()) {
            break;
        }

        if let Some(intent) = session.submit(&line, profile, projects) {
            if session.lines().is_empty() {
                // Cleared
                last_seen = None;
                if styler.is_color() {
                    write!(out, "\x1b[2J\x1b[H")?;
                }
            } else {
                // The echoed prompt duplicates what the user just typed
                skip_echo(&session, &mut last_seen);
                print_new_lines(&session, &mut last_seen, &styler, &mut out)?;
            }

            if let Some(url) = intent.open_url {
                writeln!(out, "open: {}", url)?;
            }
            if intent.theme_changed {
                writeln!(out, "theme: {}", session.theme())?;
            }
        }

        write!(out, "{} $ ", profile.hero_terminal_path)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}

fn skip_echo(session: &TerminalSession, last_seen: &mut Option<u64>) {
    if let Some(entry) = session
        .lines()
        .iter()
        .find(|e| last_seen.is_none_or(|seen| e.id > seen))
    {
        *last_seen = Some(entry.id);
    }
}

fn print_new_lines(
    session: &TerminalSession,
    last_seen: &mut Option<u64>,
    styler: &Styler,
    out: &mut impl Write,
) -> Result<(), CliError> {
    for entry in session.lines() {
        if last_seen.is_some_and(|seen| entry.id <= seen) {
            continue;
        }
        writeln!(out, "{}", styler.paint(&entry.line))?;
        *last_seen = Some(entry.id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::content::{load_profile, load_projects};

    fn session_output(stdin: &str) -> String {
        let profile = load_profile().unwrap();
        let projects = load_projects().unwrap();
        let mut out = Vec::new();
        run_repl(
            &profile,
            &projects,
            Theme::Dark,
            Styler::new(false),
            stdin.as_bytes(),
            &mut out,
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_greeting_then_exit() {
        let out = session_output("exit\n");
        assert!(out.starts_with("Type 'help' to explore commands.\n~/stack $ ls -la\n"));
        assert!(out.ends_with("~/stack $ \n"));
    }

    #[test]
    fn test_command_output_without_echo() {
        let out = session_output("pwd\n");
        assert!(out.contains("~/stack $ ~/stack\n"));
        assert!(!out.contains("~/stack $ pwd"));
    }

    #[test]
    fn test_theme_intent_reported() {
        let out = session_output("theme toggle\n");
        assert!(out.contains("Theme toggled to light."));
        assert!(out.contains("theme: light\n"));
    }

    #[test]
    fn test_history_survives_clear() {
        let out = session_output("help\nclear\nhistory\n");
        assert!(out.contains("1  help\n2  clear\n3  history\n"));
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let out = session_output("\n   \nhistory\n");
        assert!(out.contains("1  history\n"));
        assert!(!out.contains("2  "));
    }
}
