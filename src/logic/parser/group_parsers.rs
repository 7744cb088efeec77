use super::tokenizer::{tokenize, PREFIX_INFORMATION};
use super::util::{parse_tag, to_parse_error};
use crate::error::{AbError, AbResult};
use crate::logic::commands::group_commands::{ADD_GROUP_USAGE, DELETE_GROUP_USAGE};
use crate::logic::commands::Command;
use crate::logic::messages::invalid_command_format;
use crate::model::{Group, Information};

/// `addGroup NAME [i/INFORMATION]`
pub(super) fn parse_add_group(args: &str) -> AbResult<Command> {
    let map = tokenize(args, &[PREFIX_INFORMATION]);
    if map.preamble().is_empty() {
        return Err(AbError::Parse(invalid_command_format(ADD_GROUP_USAGE)));
    }

    let name = parse_tag(map.preamble()).map_err(to_parse_error)?;
    let information = Information::new(map.value(PREFIX_INFORMATION).unwrap_or_default());

    Ok(Command::AddGroup {
        group: Group::create(name, information),
    })
}

pub(super) fn parse_delete_group(args: &str) -> AbResult<Command> {
    let name = args.trim();
    if name.is_empty() {
        return Err(AbError::Parse(invalid_command_format(DELETE_GROUP_USAGE)));
    }
    let name = parse_tag(name).map_err(to_parse_error)?;
    Ok(Command::DeleteGroup { name })
}
