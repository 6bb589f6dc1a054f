//! Native command-line front end for the portfolio terminal.
//!
//! Drives the same interpreter and session the web front end uses:
//! - `repl` - interactive terminal over stdin
//! - `run` - resolve a single command
//! - `validate` - check profile and project content

mod render;
mod repl;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use folio_core::content::{self, parse_profile_named, parse_projects_named};
use folio_core::contributions::parse_contribution_total;
use folio_core::{ContentError, Profile, Project, Theme, resolve};

pub use render::Styler;

#[derive(Parser, Debug)]
#[command(name = "folio-cli", about = "Portfolio terminal on the command line", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive terminal session
    Repl {
        #[command(flatten)]
        content: ContentArgs,
        /// Starting theme
        #[arg(long, default_value = "dark")]
        theme: Theme,
        /// Print plain text without ANSI colours
        #[arg(long)]
        no_color: bool,
    },
    /// Run a single command and print its result
    Run {
        #[command(flatten)]
        content: ContentArgs,
        /// Current theme passed to the interpreter
        #[arg(long, default_value = "dark")]
        theme: Theme,
        /// Previously run commands, oldest first (repeatable)
        #[arg(long = "history", value_name = "CMD")]
        history: Vec<String>,
        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
        /// Print plain text without ANSI colours
        #[arg(long)]
        no_color: bool,
        /// Command line to run, e.g. `open 1`
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        input: Vec<String>,
    },
    /// Validate profile and project content
    Validate {
        #[command(flatten)]
        content: ContentArgs,
        /// Contribution counter payload to check as well
        #[arg(long, value_name = "FILE")]
        contributions: Option<PathBuf>,
    },
}

/// Content sources; the embedded documents are used when omitted.
#[derive(Args, Debug, Default)]
pub struct ContentArgs {
    /// Profile JSON file
    #[arg(long, value_name = "FILE")]
    pub profile: Option<PathBuf>,
    /// Projects JSON file
    #[arg(long, value_name = "FILE")]
    pub projects: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("no numeric totalContributions in {0}")]
    Contributions(PathBuf),
    #[error(transparent)]
    Content(#[from] ContentError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ContentArgs {
    pub fn load_profile(&self) -> Result<Profile, CliError> {
        match &self.profile {
            Some(path) => Ok(parse_profile_named(&read(path)?, &path.display().to_string())?),
            None => Ok(content::load_profile()?),
        }
    }

    pub fn load_projects(&self) -> Result<Vec<Project>, CliError> {
        match &self.projects {
            Some(path) => Ok(parse_projects_named(&read(path)?, &path.display().to_string())?),
            None => Ok(content::load_projects()?),
        }
    }
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Execute a parsed command line against the given streams.
pub fn run(cli: Cli, input: impl BufRead, mut out: impl Write) -> Result<(), CliError> {
    match cli.command {
        Command::Repl {
            content,
            theme,
            no_color,
        } => {
            let profile = content.load_profile()?;
            let projects = content.load_projects()?;
            repl::run_repl(&profile, &projects, theme, Styler::new(!no_color), input, out)
        }
        Command::Run {
            content,
            theme,
            history,
            json,
            no_color,
            input: words,
        } => {
            let profile = content.load_profile()?;
            let projects = content.load_projects()?;
            let line = words.join(" ");

            // Blank input resolves to nothing
            let Some(result) = resolve(&line, &profile, &projects, theme, &history) else {
                return Ok(());
            };

            if json {
                serde_json::to_writer_pretty(&mut out, &result)?;
                writeln!(out)?;
            } else {
                let styler = Styler::new(!no_color);
                for line in &result.output {
                    writeln!(out, "{}", styler.paint(line))?;
                }
                render::write_intents(&mut out, &styler, &result)?;
            }
            Ok(())
        }
        Command::Validate {
            content,
            contributions,
        } => {
            let profile = content.load_profile()?;
            let projects = content.load_projects()?;
            writeln!(
                out,
                "ok: profile '{}' and {} project(s)",
                profile.name,
                projects.len()
            )?;

            if let Some(path) = contributions {
                let payload: serde_json::Value = serde_json::from_str(&read(&path)?)?;
                let total =
                    parse_contribution_total(&payload).ok_or(CliError::Contributions(path))?;
                writeln!(out, "ok: {} contributions", total)?;
            }
            Ok(())
        }
    }
}
