use crate::error::{AbError, AbResult};
use crate::model::{Group, Tag};

/// The group registry: at most one group per name, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueGroupList {
    groups: Vec<Group>,
}

impl UniqueGroupList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &Tag) -> bool {
        self.groups.iter().any(|g| &g.name == name)
    }

    pub fn find(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name.as_str() == name)
    }

    pub fn add(&mut self, group: Group) -> AbResult<()> {
        if self.contains(&group.name) {
            return Err(AbError::DuplicateGroup);
        }
        self.groups.push(group);
        Ok(())
    }

    /// Registers a bare group for `name` unless one exists already.
    pub fn ensure(&mut self, name: &Tag) {
        if !self.contains(name) {
            self.groups.push(Group::for_tag(name.clone()));
        }
    }

    pub fn remove(&mut self, name: &str) -> AbResult<Group> {
        let position = self
            .groups
            .iter()
            .position(|g| g.name.as_str() == name)
            .ok_or_else(|| AbError::GroupNotFound(name.to_string()))?;
        Ok(self.groups.remove(position))
    }

    pub fn set_groups(&mut self, groups: Vec<Group>) -> AbResult<()> {
        let mut replacement = UniqueGroupList::new();
        for group in groups {
            replacement.add(group)?;
        }
        *self = replacement;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Information;

    fn group(name: &str, info: &str) -> Group {
        Group::create(Tag::new(name).unwrap(), Information::new(info))
    }

    #[test]
    fn add_rejects_same_name() {
        let mut list = UniqueGroupList::new();
        list.add(group("CS1010", "Intro")).unwrap();
        assert!(matches!(
            list.add(group("CS1010", "Other")),
            Err(AbError::DuplicateGroup)
        ));
    }

    #[test]
    fn ensure_keeps_existing_information() {
        let mut list = UniqueGroupList::new();
        list.add(group("CS1010", "Intro")).unwrap();
        list.ensure(&Tag::new("CS1010").unwrap());
        list.ensure(&Tag::new("friends").unwrap());
        assert_eq!(list.len(), 2);
        assert_eq!(list.find("CS1010").unwrap().information.as_str(), "Intro");
        assert!(list.find("friends").unwrap().information.is_empty());
    }

    #[test]
    fn remove_unknown_group_fails() {
        let mut list = UniqueGroupList::new();
        let err = list.remove("ghost").unwrap_err();
        assert_eq!(err.to_string(), "Group not found: ghost");
    }
}
