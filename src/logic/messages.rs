//! Feedback strings shared by more than one command.

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// `Invalid command format! \n<usage>`
pub fn invalid_command_format(usage: &str) -> String {
    format!("Invalid command format! \n{}", usage)
}

pub fn persons_listed_overview(count: usize) -> String {
    format!("{} persons listed!", count)
}
