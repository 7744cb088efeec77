use tracing::info;

use crate::error::{AbError, AbResult};
use crate::logic::commands::{group_commands, person_commands, CommandResult};
use crate::model::{AddressBook, Group, Model, Person, PersonPredicate, Tag};

/// An undoable command with its target already resolved, so it can be
/// applied again on redo without looking at the (possibly different)
/// filtered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    AddPerson(Person),
    EditPerson { target: Person, edited: Person },
    DeletePerson(Person),
    SetDescription { target: Person, edited: Person },
    Clear,
    AddGroup(Group),
    DeleteGroup(Tag),
}

impl Mutation {
    /// Applies the mutation. On error the model is left unchanged.
    ///
    /// # Panics
    /// If a resolved target has gone missing, or a description change turns
    /// into a duplicate. Both mean the model was changed behind our back.
    pub fn apply(&self, model: &mut Model) -> AbResult<CommandResult> {
        let feedback = match self {
            Mutation::AddPerson(person) => {
                model
                    .add_person(person.clone())
                    .map_err(|e| duplicate_as(e, person_commands::ADD_DUPLICATE_PERSON))?;
                format!("{}{}", person_commands::ADD_SUCCESS, person)
            }
            Mutation::EditPerson { target, edited } => {
                model
                    .update_person(target, edited.clone())
                    .map_err(|e| duplicate_as(e, person_commands::EDIT_DUPLICATE_PERSON))?;
                format!("{}{}", person_commands::EDIT_SUCCESS, edited)
            }
            Mutation::DeletePerson(target) => {
                model.delete_person(target).map_err(missing_target)?;
                format!("{}{}", person_commands::DELETE_SUCCESS, target)
            }
            Mutation::SetDescription { target, edited } => {
                match model.update_person(target, edited.clone()) {
                    Ok(()) => {}
                    Err(AbError::DuplicatePerson) => panic!(
                        "Changing target person's description should not result in a duplicate"
                    ),
                    Err(e) => return Err(missing_target(e)),
                }
                let prefix = if edited.description().is_empty() {
                    person_commands::DESCRIPTION_DELETE_SUCCESS
                } else {
                    person_commands::DESCRIPTION_ADD_SUCCESS
                };
                format!("{}{}", prefix, edited)
            }
            Mutation::Clear => {
                model.reset_data(&AddressBook::new());
                person_commands::CLEAR_SUCCESS.to_string()
            }
            Mutation::AddGroup(group) => {
                model.add_group(group.clone()).map_err(|e| match e {
                    AbError::DuplicateGroup => {
                        AbError::Command(group_commands::ADD_GROUP_DUPLICATE.into())
                    }
                    other => other,
                })?;
                format!("{}{}", group_commands::ADD_GROUP_SUCCESS, group)
            }
            Mutation::DeleteGroup(name) => {
                let removed = model.delete_group(name.as_str()).map_err(|e| match e {
                    e @ AbError::GroupNotFound(_) => AbError::Command(e.to_string()),
                    other => other,
                })?;
                format!("{}{}", group_commands::DELETE_GROUP_SUCCESS, removed)
            }
        };

        model.update_filtered_person_list(PersonPredicate::ShowAll);
        info!(%feedback, "address book changed");
        Ok(CommandResult::new(feedback))
    }
}

fn duplicate_as(error: AbError, message: &str) -> AbError {
    match error {
        AbError::DuplicatePerson => AbError::Command(message.into()),
        AbError::PersonNotFound => missing_target(error),
        other => other,
    }
}

fn missing_target(error: AbError) -> AbError {
    match error {
        AbError::PersonNotFound => panic!("The target person cannot be missing"),
        other => other,
    }
}
