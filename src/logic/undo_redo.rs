use crate::error::{AbError, AbResult};
use crate::logic::commands::session_commands::{
    REDO_FAILURE, REDO_SUCCESS, UNDO_FAILURE, UNDO_SUCCESS,
};
use crate::logic::commands::{CommandResult, Mutation};
use crate::model::{AddressBook, Model, PersonPredicate};

/// An applied mutation and the address book as it was just before.
#[derive(Debug, Clone)]
struct UndoRecord {
    mutation: Mutation,
    snapshot: AddressBook,
}

/// Undo restores snapshots; redo re-applies the recorded mutation.
///
/// Both stacks live for the whole session and are not capped. Every undo
/// entry holds a full copy of the address book.
#[derive(Debug, Clone, Default)]
pub struct UndoRedoStack {
    undo: Vec<UndoRecord>,
    redo: Vec<Mutation>,
}

impl UndoRedoStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mutation that was just applied on top of `snapshot`.
    /// Anything left to redo is discarded.
    pub fn record(&mut self, mutation: Mutation, snapshot: AddressBook) {
        self.undo.push(UndoRecord { mutation, snapshot });
        self.redo.clear();
    }

    /// Called for every successful command that is not undoable.
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo(&mut self, model: &mut Model) -> AbResult<CommandResult> {
        let record = self
            .undo
            .pop()
            .ok_or_else(|| AbError::Command(UNDO_FAILURE.into()))?;
        model.reset_data(&record.snapshot);
        model.update_filtered_person_list(PersonPredicate::ShowAll);
        self.redo.push(record.mutation);
        Ok(CommandResult::new(UNDO_SUCCESS))
    }

    /// # Panics
    /// If the mutation fails on re-application. The model is back in the state
    /// it succeeded in before, so failing now is a bug.
    pub fn redo(&mut self, model: &mut Model) -> AbResult<CommandResult> {
        let mutation = self
            .redo
            .pop()
            .ok_or_else(|| AbError::Command(REDO_FAILURE.into()))?;
        let snapshot = model.address_book().clone();
        if let Err(e) = mutation.apply(model) {
            panic!(
                "The command has been successfully executed previously; it should not fail now: {}",
                e
            );
        }
        self.undo.push(UndoRecord { mutation, snapshot });
        Ok(CommandResult::new(REDO_SUCCESS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    fn apply_and_record(stack: &mut UndoRedoStack, model: &mut Model, mutation: Mutation) {
        let snapshot = model.address_book().clone();
        mutation.apply(model).unwrap();
        stack.record(mutation, snapshot);
    }

    #[test]
    fn undo_then_redo_round_trips_state() {
        let mut model = Model::new(sample_data::sample_address_book());
        let mut stack = UndoRedoStack::new();
        let original = model.address_book().clone();
        let target = original.persons()[0].clone();

        apply_and_record(&mut stack, &mut model, Mutation::DeletePerson(target));
        let after_delete = model.address_book().clone();

        assert_eq!(stack.undo(&mut model).unwrap().feedback, UNDO_SUCCESS);
        assert_eq!(model.address_book(), &original);

        assert_eq!(stack.redo(&mut model).unwrap().feedback, REDO_SUCCESS);
        assert_eq!(model.address_book(), &after_delete);
    }

    #[test]
    fn empty_stacks_fail() {
        let mut model = Model::new(AddressBook::new());
        let mut stack = UndoRedoStack::new();
        assert_eq!(stack.undo(&mut model).unwrap_err().to_string(), UNDO_FAILURE);
        assert_eq!(stack.redo(&mut model).unwrap_err().to_string(), REDO_FAILURE);
    }

    #[test]
    fn new_record_discards_redo() {
        let mut model = Model::new(sample_data::sample_address_book());
        let mut stack = UndoRedoStack::new();
        apply_and_record(&mut stack, &mut model, Mutation::Clear);
        stack.undo(&mut model).unwrap();
        assert!(stack.can_redo());

        let target = model.address_book().persons()[0].clone();
        apply_and_record(&mut stack, &mut model, Mutation::DeletePerson(target));
        assert!(!stack.can_redo());
    }

    #[test]
    fn whole_session_can_be_unwound() {
        use crate::model::{Group, Information, Tag};

        let mut model = Model::new(sample_data::sample_address_book());
        let mut stack = UndoRedoStack::new();
        let original = model.address_book().clone();

        for n in 0..200 {
            let tag = Tag::new(&format!("group{}", n)).unwrap();
            apply_and_record(
                &mut stack,
                &mut model,
                Mutation::AddGroup(Group::create(tag, Information::default())),
            );
        }

        let mut undone = 0;
        while stack.can_undo() {
            stack.undo(&mut model).unwrap();
            undone += 1;
        }
        assert_eq!(undone, 200);
        assert_eq!(model.address_book(), &original);
    }

    #[test]
    fn multiple_undos_unwind_in_order() {
        let mut model = Model::new(sample_data::sample_address_book());
        let mut stack = UndoRedoStack::new();
        let original = model.address_book().clone();

        let first = model.address_book().persons()[0].clone();
        apply_and_record(&mut stack, &mut model, Mutation::DeletePerson(first));
        apply_and_record(&mut stack, &mut model, Mutation::Clear);

        stack.undo(&mut model).unwrap();
        assert_eq!(model.address_book().persons().len(), original.persons().len() - 1);
        stack.undo(&mut model).unwrap();
        assert_eq!(model.address_book(), &original);
        assert!(!stack.can_undo());
    }
}
