use std::collections::BTreeSet;

use super::tokenizer::{
    tokenize, PREFIX_ADDRESS, PREFIX_DESCRIPTION, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_TAG,
};
use super::util::{self, to_parse_error};
use crate::error::{AbError, AbResult};
use crate::logic::commands::person_commands::{
    EditPersonDescriptor, ADD_USAGE, DELETE_USAGE, DESCRIPTION_USAGE, EDIT_NOT_EDITED,
    EDIT_USAGE, SELECT_USAGE,
};
use crate::logic::commands::Command;
use crate::logic::messages::invalid_command_format;
use crate::model::{Description, Index, Person, Tag};

pub(super) fn parse_add(args: &str) -> AbResult<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_DESCRIPTION,
            PREFIX_TAG,
        ],
    );

    let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
    if !map.are_present(&required) || !map.preamble().is_empty() {
        return Err(AbError::Parse(invalid_command_format(ADD_USAGE)));
    }

    let field = |prefix| map.value(prefix).unwrap_or_default();
    let person = (|| -> AbResult<Person> {
        Ok(Person::new(
            util::parse_name(field(PREFIX_NAME))?,
            util::parse_phone(field(PREFIX_PHONE))?,
            util::parse_email(field(PREFIX_EMAIL))?,
            util::parse_address(field(PREFIX_ADDRESS))?,
            Description::new(field(PREFIX_DESCRIPTION)),
            util::parse_tags(map.all_values(PREFIX_TAG))?,
        ))
    })()
    .map_err(to_parse_error)?;

    Ok(Command::Add { person })
}

pub(super) fn parse_edit(args: &str) -> AbResult<Command> {
    let map = tokenize(
        args,
        &[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS, PREFIX_TAG],
    );

    let index = index_or_usage(map.preamble(), EDIT_USAGE)?;

    let descriptor = (|| -> AbResult<EditPersonDescriptor> {
        Ok(EditPersonDescriptor {
            name: map.value(PREFIX_NAME).map(util::parse_name).transpose()?,
            phone: map.value(PREFIX_PHONE).map(util::parse_phone).transpose()?,
            email: map.value(PREFIX_EMAIL).map(util::parse_email).transpose()?,
            address: map.value(PREFIX_ADDRESS).map(util::parse_address).transpose()?,
            tags: parse_tags_for_edit(map.all_values(PREFIX_TAG))?,
        })
    })()
    .map_err(to_parse_error)?;

    if !descriptor.is_any_field_edited() {
        return Err(AbError::Parse(EDIT_NOT_EDITED.into()));
    }

    Ok(Command::Edit { index, descriptor })
}

/// `None` when no `t/` was given; a lone empty `t/` clears the tags.
fn parse_tags_for_edit(values: &[String]) -> AbResult<Option<BTreeSet<Tag>>> {
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(Default::default())),
        _ => util::parse_tags(values).map(Some),
    }
}

pub(super) fn parse_delete(args: &str) -> AbResult<Command> {
    let index = index_or_usage(args, DELETE_USAGE)?;
    Ok(Command::Delete { index })
}

pub(super) fn parse_select(args: &str) -> AbResult<Command> {
    let index = index_or_usage(args, SELECT_USAGE)?;
    Ok(Command::Select { index })
}

/// `description INDEX d/[DESCRIPTION]`. The `d/` marker is required; an empty
/// value after it removes the description.
pub(super) fn parse_description(args: &str) -> AbResult<Command> {
    let map = tokenize(args, &[PREFIX_DESCRIPTION]);
    let index = index_or_usage(map.preamble(), DESCRIPTION_USAGE)?;
    let description = map
        .value(PREFIX_DESCRIPTION)
        .ok_or_else(|| AbError::Parse(invalid_command_format(DESCRIPTION_USAGE)))?;

    Ok(Command::Description {
        index,
        description: Description::new(description),
    })
}

fn index_or_usage(text: &str, usage: &str) -> AbResult<Index> {
    util::parse_index(text).map_err(|_| AbError::Parse(invalid_command_format(usage)))
}
