use super::{CommandResult, ExitCommand, RemarkCommand};

/// Shows usage for every supported command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";

    pub const MESSAGE_USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";

    pub const SHOWING_HELP_MESSAGE: &'static str = "Supported commands:";

    pub fn execute(&self) -> CommandResult {
        let usages = [
            RemarkCommand::MESSAGE_USAGE,
            Self::MESSAGE_USAGE,
            ExitCommand::MESSAGE_USAGE,
        ];
        CommandResult::new(format!(
            "{}\n\n{}",
            Self::SHOWING_HELP_MESSAGE,
            usages.join("\n\n")
        ))
        .with_help()
    }
}
