use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{AbError, AbResult};

pub const NAME_CONSTRAINTS: &str =
    "Person names should only contain alphanumeric characters and spaces, and it should not be blank";
pub const PHONE_CONSTRAINTS: &str =
    "Phone numbers can only contain numbers, and should be at least 3 digits long";
pub const EMAIL_CONSTRAINTS: &str = "Person emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, excluding \
the parentheses, (!#$%&'*+/=?`{|}~^.-).\n\
2. This is followed by a '@' and then a domain name. The domain name must:\n\
    - be at least 2 characters long\n\
    - start and end with alphanumeric characters\n\
    - consist of alphanumeric characters, a period or a hyphen for the characters in between, if any.";
pub const ADDRESS_CONSTRAINTS: &str =
    "Person addresses can take any values, and it should not be blank";
pub const TAG_CONSTRAINTS: &str = "Tags names should be alphanumeric";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:alnum:]][[:alnum:] ]*$").expect("valid name regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("valid phone regex"));
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_!#$%&'*+/=?`{|}~^.\-]+@[[:alnum:]][[:alnum:].\-]*[[:alnum:]]$")
        .expect("valid email regex")
});
static ADDRESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\S").expect("valid address regex"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[[:alnum:]]+$").expect("valid tag regex"));

pub fn is_valid_name(value: &str) -> bool {
    NAME_RE.is_match(value)
}

pub fn is_valid_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_valid_address(value: &str) -> bool {
    ADDRESS_RE.is_match(value)
}

pub fn is_valid_tag_name(value: &str) -> bool {
    TAG_RE.is_match(value)
}

/// Checks `value` with `is_valid`, returning it owned on success and an
/// `IllegalValue` carrying `constraints` otherwise.
pub fn require(value: &str, is_valid: fn(&str) -> bool, constraints: &str) -> AbResult<String> {
    if is_valid(value) {
        Ok(value.to_string())
    } else {
        Err(AbError::illegal_value(constraints))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_digits_and_spaces() {
        assert!(is_valid_name("peter jack"));
        assert!(is_valid_name("12345"));
        assert!(is_valid_name("Capital Tan"));
        assert!(is_valid_name("David Roger Jackson Ray Jr 2nd"));
    }

    #[test]
    fn name_rejects_blank_and_symbols() {
        assert!(!is_valid_name(""));
        assert!(!is_valid_name(" "));
        assert!(!is_valid_name("^"));
        assert!(!is_valid_name("peter*"));
        assert!(!is_valid_name(" leading"));
    }

    #[test]
    fn phone_needs_three_digits() {
        assert!(is_valid_phone("911"));
        assert!(is_valid_phone("93121534"));
        assert!(!is_valid_phone("91"));
        assert!(!is_valid_phone("phone"));
        assert!(!is_valid_phone("9011p041"));
        assert!(!is_valid_phone("9312 1534"));
    }

    #[test]
    fn email_accepts_common_forms() {
        assert!(is_valid_email("PeterJack_1190@example.com"));
        assert!(is_valid_email("a@bc"));
        assert!(is_valid_email("test@localhost"));
        assert!(is_valid_email("!#$%&'*+/=?`{|}~^.-@example.org"));
        assert!(is_valid_email("peter_jack@very-very-very-long-example.com"));
    }

    #[test]
    fn email_rejects_malformed() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("peterjackexample.com"));
        assert!(!is_valid_email("peterjack@"));
        assert!(!is_valid_email("peterjack@a"));
        assert!(!is_valid_email("peterjack@-example.com"));
        assert!(!is_valid_email("peterjack@example.com-"));
        assert!(!is_valid_email("peter jack@example.com"));
    }

    #[test]
    fn non_ascii_letters_and_digits_are_rejected() {
        assert!(!is_valid_email("\u{fc}@example.com"));
        assert!(!is_valid_phone("\u{661}\u{662}\u{663}"));
        assert!(!is_valid_name("J\u{fc}rgen"));
        assert!(!is_valid_tag_name("caf\u{e9}"));
    }

    #[test]
    fn address_must_not_start_blank() {
        assert!(is_valid_address("Blk 456, Den Road, #01-355"));
        assert!(is_valid_address("-"));
        assert!(!is_valid_address(""));
        assert!(!is_valid_address(" "));
    }

    #[test]
    fn tag_is_alphanumeric() {
        assert!(is_valid_tag_name("friends"));
        assert!(is_valid_tag_name("CS1010"));
        assert!(!is_valid_tag_name("best friend"));
        assert!(!is_valid_tag_name("#friend"));
        assert!(!is_valid_tag_name(""));
    }

    #[test]
    fn require_reports_constraint_message() {
        let err = require("9", is_valid_phone, PHONE_CONSTRAINTS).unwrap_err();
        assert_eq!(err.to_string(), PHONE_CONSTRAINTS);
        assert_eq!(require("999", is_valid_phone, PHONE_CONSTRAINTS).unwrap(), "999");
    }
}
