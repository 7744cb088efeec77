use crate::logic::commands::CommandResult;
use crate::logic::messages::persons_listed_overview;
use crate::model::{Model, PersonPredicate};

pub const LIST_COMMAND_WORD: &str = "list";
pub const LIST_COMMAND_ALIAS: &str = "l";
pub const LIST_USAGE: &str = "list: Lists all persons in the address book.\nExample: list";
pub const LIST_SUCCESS: &str = "Listed all persons";

pub const FIND_COMMAND_WORD: &str = "find";
pub const FIND_COMMAND_ALIAS: &str = "f";
pub const FIND_USAGE: &str = "find: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find alice bob charlie";

pub const LIST_GROUP_MEMBERS_COMMAND_WORD: &str = "List Group Members";
pub const LIST_GROUP_MEMBERS_COMMAND_ALIAS: &str = "lgm";
pub const LIST_GROUP_MEMBERS_USAGE: &str = "List Group Members: Finds all persons whose groups \
contain any of the specified keywords (case-sensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: List Group Members CS1010";

pub fn list(model: &mut Model) -> CommandResult {
    model.update_filtered_person_list(PersonPredicate::ShowAll);
    CommandResult::new(LIST_SUCCESS)
}

/// Shows the persons matching `predicate` and reports how many there are.
/// Serves both `find` and `List Group Members`.
pub fn filter(model: &mut Model, predicate: PersonPredicate) -> CommandResult {
    model.update_filtered_person_list(predicate);
    CommandResult::new(persons_listed_overview(model.filtered_person_list().len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    #[test]
    fn filter_reports_count() {
        let mut model = Model::new(sample_data::sample_address_book());
        let result = filter(
            &mut model,
            PersonPredicate::NameContainsKeywords(vec!["alex".into(), "david".into()]),
        );
        assert_eq!(result.feedback, "2 persons listed!");
    }

    #[test]
    fn filter_with_no_match_lists_zero() {
        let mut model = Model::new(sample_data::sample_address_book());
        let result = filter(
            &mut model,
            PersonPredicate::TagContainsKeywords(vec!["CS1010".into()]),
        );
        assert_eq!(result.feedback, "0 persons listed!");
        assert!(model.filtered_person_list().is_empty());
    }

    #[test]
    fn list_restores_everyone() {
        let mut model = Model::new(sample_data::sample_address_book());
        filter(&mut model, PersonPredicate::TagContainsKeywords(vec!["family".into()]));
        let result = list(&mut model);
        assert_eq!(result.feedback, LIST_SUCCESS);
        assert_eq!(
            model.filtered_person_list().len(),
            model.address_book().persons().len()
        );
    }
}
