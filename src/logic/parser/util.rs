use std::collections::BTreeSet;

use crate::error::{AbError, AbResult};
use crate::logic::messages::MESSAGE_INVALID_INDEX;
use crate::model::{Address, Email, Index, Name, Phone, Tag};

/// Parses a one-based index typed by the user. Leading and trailing
/// whitespace is ignored; signs are not accepted.
pub fn parse_index(one_based: &str) -> AbResult<Index> {
    let trimmed = one_based.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Err(AbError::illegal_value(MESSAGE_INVALID_INDEX));
    }
    match trimmed.parse::<usize>() {
        Ok(n) if n > 0 => Ok(Index::from_one_based(n)),
        _ => Err(AbError::illegal_value(MESSAGE_INVALID_INDEX)),
    }
}

pub fn parse_name(value: &str) -> AbResult<Name> {
    Name::new(value.trim())
}

pub fn parse_phone(value: &str) -> AbResult<Phone> {
    Phone::new(value.trim())
}

pub fn parse_email(value: &str) -> AbResult<Email> {
    Email::new(value.trim())
}

pub fn parse_address(value: &str) -> AbResult<Address> {
    Address::new(value.trim())
}

pub fn parse_tag(value: &str) -> AbResult<Tag> {
    Tag::new(value.trim())
}

pub fn parse_tags(values: &[String]) -> AbResult<BTreeSet<Tag>> {
    values.iter().map(|v| parse_tag(v)).collect()
}

/// Turns a field validation failure into the parse error shown to the user.
pub fn to_parse_error(error: AbError) -> AbError {
    match error {
        AbError::IllegalValue { message } => AbError::Parse(message),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_accepts_padded_positive() {
        assert_eq!(parse_index("1").unwrap(), Index::from_one_based(1));
        assert_eq!(parse_index("  10  ").unwrap(), Index::from_one_based(10));
    }

    #[test]
    fn parse_index_rejects_zero_signs_and_words() {
        for input in ["0", "-1", "+1", "a", "1 a", "", "99999999999999999999999"] {
            let err = parse_index(input).unwrap_err();
            assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX, "input {:?}", input);
        }
    }

    #[test]
    fn parse_fields_trim_before_validating() {
        assert_eq!(parse_name("  Rachel Walker ").unwrap().as_str(), "Rachel Walker");
        assert_eq!(parse_phone(" 123456 ").unwrap().as_str(), "123456");
        assert!(parse_email(" rachel@example ").is_ok());
        assert!(parse_address("   ").is_err());
    }

    #[test]
    fn parse_tags_rejects_any_invalid() {
        let tags = vec!["friend".to_string(), "#friend".to_string()];
        assert!(parse_tags(&tags).is_err());
        let tags = vec!["friend".to_string(), "neighbour".to_string(), "friend".to_string()];
        assert_eq!(parse_tags(&tags).unwrap().len(), 2);
    }

    #[test]
    fn illegal_value_becomes_parse_error() {
        let err = to_parse_error(AbError::illegal_value("bad"));
        assert!(matches!(err, AbError::Parse(ref m) if m == "bad"));
    }
}
