//! Turns a line of user input into a [`Command`].
//!
//! Parsing is pure: nothing here looks at the model, so an index that is
//! out of range for the current list still parses and is rejected later.

pub mod tokenizer;
pub mod util;
mod person_parsers;
mod group_parsers;

use tracing::debug;

use crate::error::{AbError, AbResult};
use crate::logic::commands::{
    group_commands as group, list_commands as list, person_commands as person,
    session_commands as session, Command,
};
use crate::logic::messages::{invalid_command_format, MESSAGE_UNKNOWN_COMMAND};
use crate::model::PersonPredicate;

/// Parses one line of input.
///
/// Fails with [`AbError::Parse`] carrying the message to show the user.
pub fn parse_command(input: &str) -> AbResult<Command> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(AbError::Parse(invalid_command_format(session::HELP_USAGE)));
    }

    let (word, args) = split_command(trimmed);
    debug!(word, args, "parsing command");

    match word {
        w if is(w, person::ADD_COMMAND_WORD, Some(person::ADD_COMMAND_ALIAS)) => {
            person_parsers::parse_add(args)
        }
        w if is(w, person::EDIT_COMMAND_WORD, Some(person::EDIT_COMMAND_ALIAS)) => {
            person_parsers::parse_edit(args)
        }
        w if is(w, person::DELETE_COMMAND_WORD, Some(person::DELETE_COMMAND_ALIAS)) => {
            person_parsers::parse_delete(args)
        }
        w if is(w, person::DESCRIPTION_COMMAND_WORD, Some(person::DESCRIPTION_COMMAND_ALIAS)) => {
            person_parsers::parse_description(args)
        }
        w if is(w, person::SELECT_COMMAND_WORD, Some(person::SELECT_COMMAND_ALIAS)) => {
            person_parsers::parse_select(args)
        }
        w if is(w, person::CLEAR_COMMAND_WORD, Some(person::CLEAR_COMMAND_ALIAS)) => {
            Ok(Command::Clear)
        }
        w if is(w, list::LIST_COMMAND_WORD, Some(list::LIST_COMMAND_ALIAS)) => Ok(Command::List),
        w if is(w, list::FIND_COMMAND_WORD, Some(list::FIND_COMMAND_ALIAS)) => {
            let keywords = parse_keywords(args, list::FIND_USAGE)?;
            Ok(Command::Find {
                predicate: PersonPredicate::NameContainsKeywords(keywords),
            })
        }
        w if is(w, list::LIST_GROUP_MEMBERS_COMMAND_WORD, Some(list::LIST_GROUP_MEMBERS_COMMAND_ALIAS)) => {
            let keywords = parse_keywords(args, list::LIST_GROUP_MEMBERS_USAGE)?;
            Ok(Command::ListGroupMembers {
                predicate: PersonPredicate::TagContainsKeywords(keywords),
            })
        }
        w if is(w, group::ADD_GROUP_COMMAND_WORD, Some(group::ADD_GROUP_COMMAND_ALIAS)) => {
            group_parsers::parse_add_group(args)
        }
        w if is(w, group::DELETE_GROUP_COMMAND_WORD, Some(group::DELETE_GROUP_COMMAND_ALIAS)) => {
            group_parsers::parse_delete_group(args)
        }
        w if is(w, group::GROUPS_COMMAND_WORD, Some(group::GROUPS_COMMAND_ALIAS)) => {
            Ok(Command::Groups)
        }
        w if is(w, session::HISTORY_COMMAND_WORD, Some(session::HISTORY_COMMAND_ALIAS)) => {
            Ok(Command::History)
        }
        w if is(w, session::UNDO_COMMAND_WORD, Some(session::UNDO_COMMAND_ALIAS)) => {
            Ok(Command::Undo)
        }
        w if is(w, session::REDO_COMMAND_WORD, Some(session::REDO_COMMAND_ALIAS)) => {
            Ok(Command::Redo)
        }
        w if is(w, session::HELP_COMMAND_WORD, None) => Ok(Command::Help),
        w if is(w, session::EXIT_COMMAND_WORD, Some(session::EXIT_COMMAND_ALIAS)) => {
            Ok(Command::Exit)
        }
        _ => Err(AbError::Parse(MESSAGE_UNKNOWN_COMMAND.into())),
    }
}

fn is(word: &str, command_word: &str, alias: Option<&str>) -> bool {
    word == command_word || alias == Some(word)
}

/// Splits trimmed input into the command word and the rest. The rest keeps
/// its leading whitespace so a prefix right after the word is still seen.
///
/// `List Group Members` is the one command word containing spaces.
fn split_command(input: &str) -> (&str, &str) {
    let multi_word = list::LIST_GROUP_MEMBERS_COMMAND_WORD;
    if let Some(rest) = input.strip_prefix(multi_word) {
        if rest.is_empty() || rest.starts_with(char::is_whitespace) {
            return (multi_word, rest);
        }
    }

    match input.find(char::is_whitespace) {
        Some(pos) => (&input[..pos], &input[pos..]),
        None => (input, ""),
    }
}

fn parse_keywords(args: &str, usage: &str) -> AbResult<Vec<String>> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(AbError::Parse(invalid_command_format(usage)));
    }
    Ok(keywords)
}
