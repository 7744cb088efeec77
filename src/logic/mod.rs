pub mod commands;
pub mod history;
pub mod messages;
pub mod parser;
pub mod undo_redo;

use tracing::{info, warn};

use crate::error::AbResult;
use crate::model::{AddressBook, Model, Person};
use commands::{
    group_commands, list_commands, person_commands, session_commands, Command, CommandResult,
    Mutation,
};
use history::CommandHistory;
use undo_redo::UndoRedoStack;

/// Runs command lines against the model and keeps the session state that
/// belongs to no single command: the history and the undo/redo stacks.
#[derive(Debug, Default)]
pub struct Logic {
    model: Model,
    history: CommandHistory,
    undo_redo: UndoRedoStack,
}

impl Logic {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            model: Model::new(address_book),
            ..Self::default()
        }
    }

    /// Parses and executes one line. The line goes into the history whether
    /// or not it succeeds.
    pub fn execute(&mut self, line: &str) -> AbResult<CommandResult> {
        let result = parser::parse_command(line).and_then(|command| self.run(command));
        if let Err(e) = &result {
            warn!(line, error = %e, "command failed");
        }
        self.history.add(line);
        result
    }

    fn run(&mut self, command: Command) -> AbResult<CommandResult> {
        info!(command = command.word(), "executing command");

        if command.is_undoable() {
            let mutation = self.resolve(command)?;
            let snapshot = self.model.address_book().clone();
            let result = mutation.apply(&mut self.model)?;
            self.undo_redo.record(mutation, snapshot);
            return Ok(result);
        }

        let result = match command {
            Command::Undo => return self.undo_redo.undo(&mut self.model),
            Command::Redo => return self.undo_redo.redo(&mut self.model),
            Command::List => list_commands::list(&mut self.model),
            Command::Find { predicate } | Command::ListGroupMembers { predicate } => {
                list_commands::filter(&mut self.model, predicate)
            }
            Command::Groups => group_commands::groups(&self.model),
            Command::Select { index } => person_commands::select(&self.model, index)?,
            Command::History => session_commands::history(&self.history),
            Command::Help => session_commands::help(),
            Command::Exit => session_commands::exit(),
            other => unreachable!("{} is undoable", other.word()),
        };
        self.undo_redo.clear_redo();
        Ok(result)
    }

    /// Pins an undoable command to concrete persons and groups.
    fn resolve(&self, command: Command) -> AbResult<Mutation> {
        match command {
            Command::Add { person } => Ok(Mutation::AddPerson(person)),
            Command::Edit { index, descriptor } => {
                person_commands::prepare_edit(&self.model, index, &descriptor)
            }
            Command::Delete { index } => person_commands::prepare_delete(&self.model, index),
            Command::Description { index, description } => {
                person_commands::prepare_description(&self.model, index, &description)
            }
            Command::Clear => Ok(Mutation::Clear),
            Command::AddGroup { group } => Ok(Mutation::AddGroup(group)),
            Command::DeleteGroup { name } => Ok(Mutation::DeleteGroup(name)),
            other => unreachable!("{} is not undoable", other.word()),
        }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn address_book(&self) -> &AddressBook {
        self.model.address_book()
    }

    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.model.filtered_person_list()
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.undo_redo.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_redo.can_redo()
    }
}
