use std::collections::BTreeSet;

use crate::error::{AbError, AbResult};
use crate::logic::commands::{CommandResult, Mutation};
use crate::logic::messages::MESSAGE_INVALID_PERSON_DISPLAYED_INDEX;
use crate::model::{Address, Description, Email, Index, Model, Name, Person, Phone, Tag};

pub const ADD_COMMAND_WORD: &str = "add";
pub const ADD_COMMAND_ALIAS: &str = "a";
pub const ADD_USAGE: &str = "add: Adds a person to the address book. \
Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS [d/DESCRIPTION] [t/TAG]...\n\
Example: add n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
t/friends t/owesMoney";
pub const ADD_SUCCESS: &str = "New person added: ";
pub const ADD_DUPLICATE_PERSON: &str = "This person already exists in the address book";

pub const EDIT_COMMAND_WORD: &str = "edit";
pub const EDIT_COMMAND_ALIAS: &str = "e";
pub const EDIT_USAGE: &str = "edit: Edits the details of the person identified \
by the index number used in the last person listing. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) \
[n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] [t/TAG]...\n\
Example: edit 1 p/91234567 e/johndoe@example.com";
pub const EDIT_SUCCESS: &str = "Edited Person: ";
pub const EDIT_NOT_EDITED: &str = "At least one field to edit must be provided.";
pub const EDIT_DUPLICATE_PERSON: &str = "This person already exists in the address book.";

pub const DELETE_COMMAND_WORD: &str = "delete";
pub const DELETE_COMMAND_ALIAS: &str = "d";
pub const DELETE_USAGE: &str = "delete: Deletes the person identified by the index number \
used in the last person listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete 1";
pub const DELETE_SUCCESS: &str = "Deleted Person: ";

pub const DESCRIPTION_COMMAND_WORD: &str = "description";
pub const DESCRIPTION_COMMAND_ALIAS: &str = "desc";
pub const DESCRIPTION_USAGE: &str = "description: Edits the description of the person identified \
by the index number used in the last person listing. \
Existing description will be overwritten by the input.\n\
Parameters: INDEX (must be a positive integer) d/[DESCRIPTION]\n\
Example: description 1 d/Likes to swim.";
pub const DESCRIPTION_ADD_SUCCESS: &str = "Added description to Person: ";
pub const DESCRIPTION_DELETE_SUCCESS: &str = "Removed description from Person: ";

pub const CLEAR_COMMAND_WORD: &str = "clear";
pub const CLEAR_COMMAND_ALIAS: &str = "c";
pub const CLEAR_USAGE: &str = "clear: Clears all persons and groups from the address book.\n\
Example: clear";
pub const CLEAR_SUCCESS: &str = "Address book has been cleared!";

pub const SELECT_COMMAND_WORD: &str = "select";
pub const SELECT_COMMAND_ALIAS: &str = "s";
pub const SELECT_USAGE: &str = "select: Selects the person identified by the index number \
used in the last person listing.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: select 1";
pub const SELECT_SUCCESS: &str = "Selected Person: ";

/// The fields an `edit` replaces. Unset fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    /// `Some(empty)` clears every tag.
    pub tags: Option<BTreeSet<Tag>>,
}

impl EditPersonDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.tags.is_some()
    }

    /// The person after the edit. The description is never touched here.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person::new(
            self.name.clone().unwrap_or_else(|| person.name().clone()),
            self.phone.clone().unwrap_or_else(|| person.phone().clone()),
            self.email.clone().unwrap_or_else(|| person.email().clone()),
            self.address.clone().unwrap_or_else(|| person.address().clone()),
            person.description().clone(),
            self.tags.clone().unwrap_or_else(|| person.tags().clone()),
        )
    }
}

/// The person shown at `index` in the current filtered list.
pub fn person_at(model: &Model, index: Index) -> AbResult<Person> {
    model
        .filtered_person_list()
        .get(index.zero_based())
        .map(|p| (*p).clone())
        .ok_or_else(|| AbError::Command(MESSAGE_INVALID_PERSON_DISPLAYED_INDEX.into()))
}

pub fn prepare_edit(
    model: &Model,
    index: Index,
    descriptor: &EditPersonDescriptor,
) -> AbResult<Mutation> {
    let target = person_at(model, index)?;
    let edited = descriptor.apply_to(&target);
    if !target.is_same_person(&edited) && model.has_person(&edited) {
        return Err(AbError::Command(EDIT_DUPLICATE_PERSON.into()));
    }
    Ok(Mutation::EditPerson { target, edited })
}

pub fn prepare_delete(model: &Model, index: Index) -> AbResult<Mutation> {
    person_at(model, index).map(Mutation::DeletePerson)
}

pub fn prepare_description(
    model: &Model,
    index: Index,
    description: &Description,
) -> AbResult<Mutation> {
    let target = person_at(model, index)?;
    let edited = target.with_description(description.clone());
    Ok(Mutation::SetDescription { target, edited })
}

pub fn select(model: &Model, index: Index) -> AbResult<CommandResult> {
    let person = person_at(model, index)?;
    Ok(CommandResult::with_selection(
        format!("{}{}", SELECT_SUCCESS, index),
        person,
    ))
}
