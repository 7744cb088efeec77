use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::AbResult;
use crate::validation::{self, require};

/// A group name as attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub const CONSTRAINTS: &'static str = validation::TAG_CONSTRAINTS;

    pub fn new(name: &str) -> AbResult<Self> {
        require(name, validation::is_valid_tag_name, Self::CONSTRAINTS).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Tag {
    type Error = crate::error::AbError;

    fn try_from(value: String) -> AbResult<Self> {
        Self::new(&value)
    }
}

impl From<Tag> for String {
    fn from(value: Tag) -> String {
        value.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Free-text information attached to a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Information(String);

impl Information {
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

/// An entry of the address book's group registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: Tag,
    pub information: Information,
}

impl Group {
    pub fn create(name: Tag, information: Information) -> Self {
        Self { name, information }
    }

    /// The registry entry created implicitly when a person references an unknown tag.
    pub fn for_tag(name: Tag) -> Self {
        Self::create(name, Information::default())
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.information.is_empty() {
            write!(f, " {}", self.information.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_rejects_spaces() {
        assert!(Tag::new("best friend").is_err());
        assert_eq!(Tag::new("CS1010").unwrap().as_str(), "CS1010");
    }

    #[test]
    fn tag_displays_bracketed() {
        assert_eq!(Tag::new("friends").unwrap().to_string(), "[friends]");
    }

    #[test]
    fn group_display_omits_empty_information() {
        let tag = Tag::new("CS2103").unwrap();
        assert_eq!(Group::for_tag(tag.clone()).to_string(), "[CS2103]");
        let group = Group::create(tag, Information::new("Software Engineering"));
        assert_eq!(group.to_string(), "[CS2103] Software Engineering");
    }
}
