//! Adds or clears the remark of a displayed person.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::{CommandError, CommandResult};
use crate::domain::{Index, Remark};
use crate::logic::messages::format_person;
use crate::logic::parser::{ParseError, parse_remark_command};
use crate::model::{Model, show_all_persons};

/// Sets the remark of the person at `index` in the displayed list.
///
/// An empty remark removes whatever remark the person had.
#[derive(Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    pub const COMMAND_WORD: &'static str = "remark";

    pub const MESSAGE_USAGE: &'static str = "remark: Adds or removes a remark for the person \
         identified by the index number used in the displayed person list. Parameters: INDEX \
         (must be a positive integer) r/REMARK\nExample: remark 1 r/Likes baseball";

    pub const MESSAGE_ADD_REMARK_SUCCESS: &'static str = "Added remark to Person: ";
    pub const MESSAGE_DELETE_REMARK_SUCCESS: &'static str = "Removed remark from Person: ";

    pub fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Replaces the target's remark and resets the displayed list to show everyone.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidDisplayedIndex` if the index is past the
    /// end of the displayed list. The model is left untouched on any error.
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        let person_to_remark = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|p| (*p).clone())
            .ok_or(CommandError::InvalidDisplayedIndex)?;

        let remarked_person = person_to_remark.with_remark(self.remark.clone());
        model.set_person(&person_to_remark, remarked_person.clone())?;
        model.update_filtered_person_list(show_all_persons());
        debug!(
            index = self.index.one_based(),
            person = %remarked_person.name(),
            cleared = self.remark.is_empty(),
            "remark updated"
        );

        let template = if self.remark.is_empty() {
            Self::MESSAGE_DELETE_REMARK_SUCCESS
        } else {
            Self::MESSAGE_ADD_REMARK_SUCCESS
        };
        Ok(CommandResult::new(format!(
            "{template}{}",
            format_person(&remarked_person)
        )))
    }
}

impl FromStr for RemarkCommand {
    type Err = ParseError;

    /// Parses the arguments after the `remark` command word.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_remark_command(s)
    }
}

impl fmt::Debug for RemarkCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemarkCommand")
            .field("index", &self.index)
            .field("remark", &self.remark)
            .finish()
    }
}
