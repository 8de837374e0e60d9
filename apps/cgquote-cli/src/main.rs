//! # cgquote
//!
//! Entry point for the `cgquote` binary. See `cgquote_cli` for the
//! commands themselves.
//!
//! ```text
//! cgquote estimate project.json --quote
//! cgquote validate project.json
//! cgquote rates --rates studio.json
//! ```

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use cgquote_cli::error::ApiError;
use cgquote_cli::{run, Cli};
use clap::Parser;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match run(cli) {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", output).context("Failed to write report to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::error!("{}", err);
            eprintln!("{}", ApiError::from(err).to_json());
            Ok(ExitCode::FAILURE)
        }
    }
}
