//! Command pipeline: raw text → parser → command → execute against the model.

pub mod commands;
pub mod messages;
pub mod parser;

pub use commands::{Command, CommandError, CommandResult};
pub use messages::format_person;
pub use parser::{ParseError, parse_command};

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::Person;
use crate::model::{Model, ModelManager};

/// Any failure surfaced to the user while handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Owns the model and runs one command line at a time against it.
///
/// Taking `&mut self` in [`LogicManager::execute`] means a command always
/// sees the model exactly as the previous command left it.
#[derive(Debug)]
pub struct LogicManager<M: Model = ModelManager> {
    model: M,
}

impl<M: Model> LogicManager<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    /// Parses and executes a single line of user input.
    ///
    /// # Errors
    ///
    /// Returns `LogicError::Parse` if the text is not a valid command and
    /// `LogicError::Command` if execution fails. The model is unchanged in
    /// both cases.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        info!(command_text, "user command");

        let command =
            parse_command(command_text).inspect_err(|e| debug!(error = %e, "parse failed"))?;
        let result = command
            .execute(&mut self.model)
            .inspect_err(|e| debug!(command = command.word(), error = %e, "execution failed"))?;

        debug!(command = command.word(), exit = result.is_exit(), "command succeeded");
        Ok(result)
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Returns the displayed list as the user currently sees it.
    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }
}
