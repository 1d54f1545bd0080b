//! addressbook - contacts managed through typed commands such as `remark 1 r/Likes baseball`

pub mod cli;
pub mod domain;
pub mod logic;
pub mod model;

#[cfg(test)]
pub(crate) mod testutil;

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io::{self, BufRead};

use cli::{Cli, config::Config, logging, session::handle_session};
use logic::LogicManager;
use model::{ModelManager, sample_address_book};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    logging::init(&config.log_directive(cli.verbose));
    let format = config.output_format(cli.format);

    let address_book = sample_address_book().context("failed to build sample address book")?;
    let mut logic = LogicManager::new(ModelManager::new(address_book));

    let stdout = io::stdout();
    let stderr = io::stderr();
    let summary = if cli.commands.is_empty() {
        let stdin = io::stdin();
        handle_session(
            &mut logic,
            stdin.lock().lines(),
            format,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?
    } else {
        handle_session(
            &mut logic,
            cli.commands.iter().map(|c| Ok::<_, io::Error>(c.clone())),
            format,
            &mut stdout.lock(),
            &mut stderr.lock(),
        )?
    };

    if summary.failed > 0 {
        bail!(
            "{} of {} commands failed",
            summary.failed,
            summary.executed
        );
    }
    Ok(())
}
