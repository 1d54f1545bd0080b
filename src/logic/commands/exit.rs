use super::CommandResult;

/// Ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";

    pub const MESSAGE_USAGE: &'static str = "exit: Exits the program.\nExample: exit";

    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Address Book as requested ...";

    pub fn execute(&self) -> CommandResult {
        CommandResult::new(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT).with_exit()
    }
}
