use crate::logic::commands::CommandResult;
use crate::model::Model;

pub const ADD_GROUP_COMMAND_WORD: &str = "addGroup";
pub const ADD_GROUP_COMMAND_ALIAS: &str = "ag";
pub const ADD_GROUP_USAGE: &str = "addGroup: Adds a group to the address book. \
Parameters: NAME [i/INFORMATION]\n\
Example: addGroup CS1010 i/Programming Methodology tutorial group";
pub const ADD_GROUP_SUCCESS: &str = "New group added: ";
pub const ADD_GROUP_DUPLICATE: &str = "This group already exists in the address book";

pub const DELETE_GROUP_COMMAND_WORD: &str = "deleteGroup";
pub const DELETE_GROUP_COMMAND_ALIAS: &str = "dg";
pub const DELETE_GROUP_USAGE: &str = "deleteGroup: Deletes the group with the given name \
and removes it from every person in it.\n\
Parameters: NAME\n\
Example: deleteGroup CS1010";
pub const DELETE_GROUP_SUCCESS: &str = "Deleted group: ";

pub const GROUPS_COMMAND_WORD: &str = "groups";
pub const GROUPS_COMMAND_ALIAS: &str = "lg";
pub const GROUPS_USAGE: &str = "groups: Lists every group with its information and member count.\n\
Example: groups";
pub const GROUPS_SUCCESS: &str = "Listed all groups";
pub const GROUPS_EMPTY: &str = "There are no groups yet.";

pub fn groups(model: &Model) -> CommandResult {
    let book = model.address_book();
    if book.groups().is_empty() {
        return CommandResult::new(GROUPS_EMPTY);
    }

    let mut feedback = String::from(GROUPS_SUCCESS);
    for group in book.groups() {
        let members = book
            .persons()
            .iter()
            .filter(|p| p.has_tag(group.name.as_str()))
            .count();
        feedback.push_str(&format!("\n  {} ({})", group, members));
    }
    CommandResult::new(feedback)
}
