//! Turns raw command text into `Command` values.

mod remark;
mod tokenizer;

pub use remark::parse_remark_command;
pub use tokenizer::{ArgumentMultimap, PREFIX_REMARK, Prefix, tokenize};

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::trace;

use crate::domain::Index;
use crate::logic::commands::{Command, ExitCommand, HelpCommand, RemarkCommand};
use crate::logic::messages;

static BASIC_COMMAND_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<word>\S+)(?P<arguments>.*)$").expect("command pattern is valid")
});

/// Errors raised while parsing user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Required tokens are missing or malformed; carries the command's usage.
    #[error("{}", messages::invalid_command_format(.usage))]
    InvalidCommandFormat { usage: &'static str },

    /// The command word is not recognized.
    #[error("{}", messages::UNKNOWN_COMMAND)]
    UnknownCommand,

    /// The index token is not a non-zero unsigned integer.
    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,
}

/// Parses a full line of user input into a command.
///
/// The first run of non-whitespace characters selects the command; the rest
/// of the line is handed to that command's parser.
///
/// # Errors
///
/// Returns `ParseError::InvalidCommandFormat` (with the help usage) for blank
/// input, `ParseError::UnknownCommand` for an unrecognized command word, or
/// whatever the selected command's parser reports.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let captures = BASIC_COMMAND_FORMAT
        .captures(input.trim())
        .ok_or(ParseError::InvalidCommandFormat {
            usage: HelpCommand::MESSAGE_USAGE,
        })?;
    let word = &captures["word"];
    let arguments = &captures["arguments"];
    trace!(word, arguments, "split command line");

    match word {
        RemarkCommand::COMMAND_WORD => parse_remark_command(arguments).map(Command::Remark),
        HelpCommand::COMMAND_WORD => Ok(Command::Help(HelpCommand)),
        ExitCommand::COMMAND_WORD => Ok(Command::Exit(ExitCommand)),
        _ => Err(ParseError::UnknownCommand),
    }
}

/// Parses a user-facing 1-based index.
///
/// Leading and trailing whitespace is ignored. Signs, inner whitespace and
/// zero are rejected.
pub fn parse_index(s: &str) -> Result<Index, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    let one_based: usize = trimmed.parse().map_err(|_| ParseError::InvalidIndex)?;
    Index::from_one_based(one_based).map_err(|_| ParseError::InvalidIndex)
}
