use crate::error::{AbError, AbResult};
use crate::model::Person;

/// An ordered list of persons in which no two are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniquePersonList {
    persons: Vec<Person>,
}

impl UniquePersonList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    pub fn add(&mut self, person: Person) -> AbResult<()> {
        if self.contains(&person) {
            return Err(AbError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// Replaces `target` with `edited`, keeping its position.
    pub fn set_person(&mut self, target: &Person, edited: Person) -> AbResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(AbError::PersonNotFound)?;

        let collides = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != position && p.is_same_person(&edited));
        if collides {
            return Err(AbError::DuplicatePerson);
        }

        self.persons[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, target: &Person) -> AbResult<Person> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or(AbError::PersonNotFound)?;
        Ok(self.persons.remove(position))
    }

    pub fn set_persons(&mut self, persons: Vec<Person>) -> AbResult<()> {
        let mut replacement = UniquePersonList::new();
        for person in persons {
            replacement.add(person)?;
        }
        *self = replacement;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.persons
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.persons.iter()
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }
}
