//! CLI definitions, configuration, logging setup and the command session

pub mod config;
pub mod logging;
pub mod output;
pub mod session;

use clap::{ArgAction, Parser};

use output::OutputFormat;

/// abook - address book driven by typed commands
#[derive(Parser, Debug)]
#[command(name = "abook", version, about, long_about = None)]
pub struct Cli {
    /// Command lines to run in order, e.g. "remark 1 r/Likes baseball"
    /// (reads one command per line from stdin when omitted)
    pub commands: Vec<String>,

    /// Output format (overrides config file)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
