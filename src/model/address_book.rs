use crate::error::AbResult;
use crate::model::{Group, Person, UniqueGroupList, UniquePersonList};

/// Persons plus the group registry they draw their tags from.
///
/// Every tag on every person has a matching group. Adding or replacing a
/// person registers the groups it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    persons: UniquePersonList,
    groups: UniqueGroupList,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a book from stored data, checking every invariant on the way.
    pub fn from_parts(persons: Vec<Person>, groups: Vec<Group>) -> AbResult<Self> {
        let mut book = AddressBook::new();
        book.groups.set_groups(groups)?;
        book.persons.set_persons(persons)?;
        for person in book.persons.iter() {
            for tag in person.tags() {
                book.groups.ensure(tag);
            }
        }
        Ok(book)
    }

    pub fn reset_data(&mut self, other: &AddressBook) {
        *self = other.clone();
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    pub fn add_person(&mut self, person: Person) -> AbResult<()> {
        self.persons.add(person.clone())?;
        self.sync_groups(&person);
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> AbResult<()> {
        self.persons.set_person(target, edited.clone())?;
        self.sync_groups(&edited);
        Ok(())
    }

    pub fn remove_person(&mut self, target: &Person) -> AbResult<Person> {
        self.persons.remove(target)
    }

    pub fn add_group(&mut self, group: Group) -> AbResult<()> {
        self.groups.add(group)
    }

    /// Removes the group and strips its tag from every person carrying it.
    pub fn remove_group(&mut self, name: &str) -> AbResult<Group> {
        let removed = self.groups.remove(name)?;
        let members: Vec<Person> = self
            .persons
            .iter()
            .filter(|p| p.has_tag(name))
            .cloned()
            .collect();
        for member in members {
            let stripped = member.without_tag(name);
            self.persons.set_person(&member, stripped)?;
        }
        Ok(removed)
    }

    pub fn persons(&self) -> &[Person] {
        self.persons.as_slice()
    }

    pub fn groups(&self) -> &[Group] {
        self.groups.as_slice()
    }

    pub fn find_group(&self, name: &str) -> Option<&Group> {
        self.groups.find(name)
    }

    fn sync_groups(&mut self, person: &Person) {
        for tag in person.tags() {
            self.groups.ensure(tag);
        }
    }
}
