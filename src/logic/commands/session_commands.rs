use crate::logic::commands::{group_commands, list_commands, person_commands, CommandResult};
use crate::logic::history::CommandHistory;

pub const HISTORY_COMMAND_WORD: &str = "history";
pub const HISTORY_COMMAND_ALIAS: &str = "h";
pub const HISTORY_USAGE: &str = "history: Lists all the commands that you have entered \
in reverse chronological order.\nExample: history";
pub const HISTORY_SUCCESS: &str = "Entered commands (from most recent to earliest):\n";
pub const HISTORY_NO_HISTORY: &str = "You have not yet entered any commands.";

pub const UNDO_COMMAND_WORD: &str = "undo";
pub const UNDO_COMMAND_ALIAS: &str = "u";
pub const UNDO_USAGE: &str = "undo: Restores the address book to the state before the previous \
undoable command was executed.\nExample: undo";
pub const UNDO_SUCCESS: &str = "Undo success!";
pub const UNDO_FAILURE: &str = "No more commands to undo!";

pub const REDO_COMMAND_WORD: &str = "redo";
pub const REDO_COMMAND_ALIAS: &str = "r";
pub const REDO_USAGE: &str = "redo: Redoes the previously undone command.\nExample: redo";
pub const REDO_SUCCESS: &str = "Redo success!";
pub const REDO_FAILURE: &str = "No more commands to redo!";

pub const HELP_COMMAND_WORD: &str = "help";
pub const HELP_USAGE: &str = "help: Shows program usage instructions.\nExample: help";

pub const EXIT_COMMAND_WORD: &str = "exit";
pub const EXIT_COMMAND_ALIAS: &str = "q";
pub const EXIT_USAGE: &str = "exit: Exits the program.\nExample: exit";
pub const EXIT_ACKNOWLEDGEMENT: &str = "Exiting Address Book as requested ...";

pub fn history(history: &CommandHistory) -> CommandResult {
    let entries = history.entries();
    if entries.is_empty() {
        return CommandResult::new(HISTORY_NO_HISTORY);
    }
    let reversed: Vec<&str> = entries.iter().rev().map(String::as_str).collect();
    CommandResult::new(format!("{}{}", HISTORY_SUCCESS, reversed.join("\n")))
}

/// Every command's usage, in the order the help lists them.
pub fn all_usages() -> [&'static str; 17] {
    [
        person_commands::ADD_USAGE,
        person_commands::EDIT_USAGE,
        person_commands::DESCRIPTION_USAGE,
        person_commands::DELETE_USAGE,
        person_commands::SELECT_USAGE,
        person_commands::CLEAR_USAGE,
        list_commands::LIST_USAGE,
        list_commands::FIND_USAGE,
        list_commands::LIST_GROUP_MEMBERS_USAGE,
        group_commands::ADD_GROUP_USAGE,
        group_commands::DELETE_GROUP_USAGE,
        group_commands::GROUPS_USAGE,
        HISTORY_USAGE,
        UNDO_USAGE,
        REDO_USAGE,
        HELP_USAGE,
        EXIT_USAGE,
    ]
}

pub fn help() -> CommandResult {
    CommandResult::new(all_usages().join("\n\n"))
}

pub fn exit() -> CommandResult {
    CommandResult::exit(EXIT_ACKNOWLEDGEMENT)
}
