//! Argument parser for the `remark` command.

use super::{PREFIX_REMARK, ParseError, parse_index, tokenize};
use crate::domain::Remark;
use crate::logic::commands::RemarkCommand;

/// Parses the arguments of `remark INDEX r/REMARK`.
///
/// `r/` followed by nothing is accepted and yields the empty remark, which
/// clears any existing remark.
///
/// # Errors
///
/// Returns `ParseError::InvalidCommandFormat` carrying the remark usage if
/// `r/` is absent, the index is absent, or the index is not a positive integer.
pub fn parse_remark_command(args: &str) -> Result<RemarkCommand, ParseError> {
    let invalid_format = || ParseError::InvalidCommandFormat {
        usage: RemarkCommand::MESSAGE_USAGE,
    };

    let arguments = tokenize(args, &[PREFIX_REMARK]);
    let remark = arguments.value(&PREFIX_REMARK).ok_or_else(invalid_format)?;
    let index = parse_index(arguments.preamble()).map_err(|_| invalid_format())?;

    Ok(RemarkCommand::new(index, Remark::new(remark)))
}
