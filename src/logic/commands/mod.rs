//! Executable commands and their results.

mod exit;
mod help;
mod remark;

pub use exit::ExitCommand;
pub use help::HelpCommand;
pub use remark::RemarkCommand;

use thiserror::Error;

use crate::logic::messages;
use crate::model::{Model, ModelError};

/// Errors raised while executing a parsed command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The index does not refer to a person in the displayed list.
    #[error("{}", messages::INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidDisplayedIndex,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    /// Creates a result carrying only feedback.
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            show_help: false,
            exit: false,
        }
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }

    pub fn is_show_help(&self) -> bool {
        self.show_help
    }

    /// Returns true if the session should end after this command.
    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// A parsed command, ready to run against a model.
///
/// Equality is structural, so commands of different kinds are never equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Remark(RemarkCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    /// Runs the command to completion against `model`.
    pub fn execute(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        match self {
            Command::Remark(command) => command.execute(model),
            Command::Help(command) => Ok(command.execute()),
            Command::Exit(command) => Ok(command.execute()),
        }
    }

    /// Returns the word that selects this command on the command line.
    pub fn word(&self) -> &'static str {
        match self {
            Command::Remark(_) => RemarkCommand::COMMAND_WORD,
            Command::Help(_) => HelpCommand::COMMAND_WORD,
            Command::Exit(_) => ExitCommand::COMMAND_WORD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Remark;
    use crate::testutil::{INDEX_FIRST, typical_model};
    use pretty_assertions::assert_eq;

    #[test]
    fn command_result_defaults() {
        let result = CommandResult::new("feedback");
        assert_eq!(result.feedback_to_user(), "feedback");
        assert!(!result.is_show_help());
        assert!(!result.is_exit());
    }

    #[test]
    fn command_result_equality() {
        let base = CommandResult::new("feedback");
        assert_eq!(base, CommandResult::new("feedback"));
        assert_ne!(base, CommandResult::new("different"));
        assert_ne!(base, base.clone().with_help());
        assert_ne!(base, base.clone().with_exit());
    }

    #[test]
    fn execute_dispatches_to_variant() {
        let mut model = typical_model();
        let command = Command::Remark(RemarkCommand::new(INDEX_FIRST, Remark::new("Hi")));
        let result = command.execute(&mut model).unwrap();
        assert!(result.feedback_to_user().starts_with("Added remark to Person: "));

        let result = Command::Exit(ExitCommand).execute(&mut model).unwrap();
        assert!(result.is_exit());
    }

    #[test]
    fn commands_of_different_kinds_are_not_equal() {
        assert_ne!(Command::Help(HelpCommand), Command::Exit(ExitCommand));
        assert_ne!(
            Command::Remark(RemarkCommand::new(INDEX_FIRST, Remark::empty())),
            Command::Help(HelpCommand)
        );
    }

    #[test]
    fn word_matches_command_word() {
        assert_eq!(Command::Help(HelpCommand).word(), "help");
        assert_eq!(Command::Exit(ExitCommand).word(), "exit");
        assert_eq!(
            Command::Remark(RemarkCommand::new(INDEX_FIRST, Remark::empty())).word(),
            "remark"
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CommandError::InvalidDisplayedIndex.to_string(),
            "The person index provided is invalid"
        );
        let err = CommandError::from(ModelError::PersonNotFound {
            name: "Bob".to_string(),
        });
        assert_eq!(err.to_string(), "person not found: Bob");
    }
}
