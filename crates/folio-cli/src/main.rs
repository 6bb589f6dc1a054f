use std::io;
use std::process::ExitCode;

use clap::Parser;

use folio_cli::{Cli, run};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdin = io::stdin();

    match run(cli, stdin.lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
