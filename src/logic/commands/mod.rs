pub mod person_commands;
pub mod list_commands;
pub mod group_commands;
pub mod session_commands;
pub mod mutation;

use crate::model::{Description, Group, Index, Person, PersonPredicate, Tag};
use person_commands::EditPersonDescriptor;

pub use mutation::Mutation;

/// What a command reports back to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    /// Set by `select`: the person the front end should show in full.
    pub selected: Option<Person>,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            selected: None,
            exit: false,
        }
    }

    pub fn with_selection(feedback: impl Into<String>, person: Person) -> Self {
        Self {
            selected: Some(person),
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }
}

/// A fully parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { person: Person },
    Edit { index: Index, descriptor: EditPersonDescriptor },
    Delete { index: Index },
    Description { index: Index, description: Description },
    Clear,
    AddGroup { group: Group },
    DeleteGroup { name: Tag },
    List,
    Find { predicate: PersonPredicate },
    ListGroupMembers { predicate: PersonPredicate },
    Groups,
    Select { index: Index },
    History,
    Undo,
    Redo,
    Help,
    Exit,
}

impl Command {
    /// Mutating commands: recorded for undo and redo.
    pub fn is_undoable(&self) -> bool {
        matches!(
            self,
            Command::Add { .. }
                | Command::Edit { .. }
                | Command::Delete { .. }
                | Command::Description { .. }
                | Command::Clear
                | Command::AddGroup { .. }
                | Command::DeleteGroup { .. }
        )
    }

    pub fn word(&self) -> &'static str {
        match self {
            Command::Add { .. } => person_commands::ADD_COMMAND_WORD,
            Command::Edit { .. } => person_commands::EDIT_COMMAND_WORD,
            Command::Delete { .. } => person_commands::DELETE_COMMAND_WORD,
            Command::Description { .. } => person_commands::DESCRIPTION_COMMAND_WORD,
            Command::Clear => person_commands::CLEAR_COMMAND_WORD,
            Command::AddGroup { .. } => group_commands::ADD_GROUP_COMMAND_WORD,
            Command::DeleteGroup { .. } => group_commands::DELETE_GROUP_COMMAND_WORD,
            Command::List => list_commands::LIST_COMMAND_WORD,
            Command::Find { .. } => list_commands::FIND_COMMAND_WORD,
            Command::ListGroupMembers { .. } => list_commands::LIST_GROUP_MEMBERS_COMMAND_WORD,
            Command::Groups => group_commands::GROUPS_COMMAND_WORD,
            Command::Select { .. } => person_commands::SELECT_COMMAND_WORD,
            Command::History => session_commands::HISTORY_COMMAND_WORD,
            Command::Undo => session_commands::UNDO_COMMAND_WORD,
            Command::Redo => session_commands::REDO_COMMAND_WORD,
            Command::Help => session_commands::HELP_COMMAND_WORD,
            Command::Exit => session_commands::EXIT_COMMAND_WORD,
        }
    }
}
