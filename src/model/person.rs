use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::group::Tag;
use crate::error::AbResult;
use crate::validation::{self, require};

/// Declares a validated, immutable string field of a person.
macro_rules! person_field {
    ($(#[$meta:meta])* $name:ident, $check:path, $constraints:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $constraints;

            pub fn new(value: &str) -> AbResult<Self> {
                require(value, $check, $constraints).map(Self)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = crate::error::AbError;

            fn try_from(value: String) -> AbResult<Self> {
                Self::new(&value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

person_field!(
    /// A person's full name.
    Name,
    validation::is_valid_name,
    validation::NAME_CONSTRAINTS
);
person_field!(Phone, validation::is_valid_phone, validation::PHONE_CONSTRAINTS);
person_field!(Email, validation::is_valid_email, validation::EMAIL_CONSTRAINTS);
person_field!(Address, validation::is_valid_address, validation::ADDRESS_CONSTRAINTS);

/// Free-text notes about a person. Empty means "no description".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A contact in the address book.
///
/// Persons are immutable; edits build a replacement with [`Person::with_description`]
/// or a fresh [`Person::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    #[serde(default)]
    description: Description,
    #[serde(default)]
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        description: Description,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            description,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|t| t.as_str() == name)
    }

    /// Same identity fields. Description and tags are not part of identity.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
            && self.phone == other.phone
            && self.email == other.email
            && self.address == other.address
    }

    pub fn with_description(&self, description: Description) -> Person {
        Person {
            description,
            ..self.clone()
        }
    }

    pub fn with_tags(&self, tags: BTreeSet<Tag>) -> Person {
        Person {
            tags,
            ..self.clone()
        }
    }

    pub fn without_tag(&self, name: &str) -> Person {
        self.with_tags(self.tags.iter().filter(|t| t.as_str() != name).cloned().collect())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Phone: {} Email: {} Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if !self.description.is_empty() {
            write!(f, " Description: {}", self.description)?;
        }
        f.write_str(" Tags: ")?;
        for tag in &self.tags {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new(
            Name::new("Alice Pauline").unwrap(),
            Phone::new("85355255").unwrap(),
            Email::new("alice@example.com").unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            Description::default(),
            [Tag::new("friends").unwrap()].into_iter().collect(),
        )
    }

    #[test]
    fn invalid_field_reports_constraint() {
        let err = Phone::new("12").unwrap_err();
        assert_eq!(err.to_string(), Phone::CONSTRAINTS);
        assert!(Name::new("").is_err());
        assert!(Email::new("nope").is_err());
    }

    #[test]
    fn same_person_ignores_description_and_tags() {
        let a = alice();
        let b = a
            .with_description(Description::new("Likes to swim."))
            .with_tags(BTreeSet::new());
        assert!(a.is_same_person(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn different_phone_is_different_person() {
        let a = alice();
        let b = Person::new(
            a.name().clone(),
            Phone::new("99999999").unwrap(),
            a.email().clone(),
            a.address().clone(),
            Description::default(),
            BTreeSet::new(),
        );
        assert!(!a.is_same_person(&b));
    }

    #[test]
    fn display_lists_fields_and_tags() {
        assert_eq!(
            alice().to_string(),
            "Alice Pauline Phone: 85355255 Email: alice@example.com \
             Address: 123, Jurong West Ave 6, #08-111 Tags: [friends]"
        );
    }

    #[test]
    fn display_includes_description_when_present() {
        let p = alice().with_description(Description::new("Likes to swim."));
        assert!(p.to_string().contains(" Description: Likes to swim. Tags: "));
    }

    #[test]
    fn without_tag_drops_only_that_tag() {
        let p = alice().with_tags(
            [Tag::new("friends").unwrap(), Tag::new("CS1010").unwrap()]
                .into_iter()
                .collect(),
        );
        let stripped = p.without_tag("friends");
        assert!(!stripped.has_tag("friends"));
        assert!(stripped.has_tag("CS1010"));
    }

    #[test]
    fn deserializing_invalid_field_fails() {
        let json = r#"{"name":"Bob","phone":"1","email":"b@ex.com","address":"x"}"#;
        assert!(serde_json::from_str::<Person>(json).is_err());
    }
}
