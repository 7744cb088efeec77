use tracing::debug;

use crate::error::AbResult;
use crate::model::{AddressBook, Group, Person, PersonPredicate};

/// The in-memory state commands run against: the address book and the
/// filtered view of its persons.
///
/// Two revision counters let observers notice changes without callbacks:
/// `book_revision` moves on every address book mutation and `view_revision`
/// on every change to what the person list shows.
#[derive(Debug, Clone, Default)]
pub struct Model {
    address_book: AddressBook,
    predicate: PersonPredicate,
    book_revision: u64,
    view_revision: u64,
}

impl Model {
    pub fn new(address_book: AddressBook) -> Self {
        Self {
            address_book,
            ..Self::default()
        }
    }

    pub fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    pub fn reset_data(&mut self, address_book: &AddressBook) {
        self.address_book.reset_data(address_book);
        self.book_changed();
    }

    pub fn has_person(&self, person: &Person) -> bool {
        self.address_book.has_person(person)
    }

    pub fn add_person(&mut self, person: Person) -> AbResult<()> {
        self.address_book.add_person(person)?;
        self.update_filtered_person_list(PersonPredicate::ShowAll);
        self.book_changed();
        Ok(())
    }

    pub fn update_person(&mut self, target: &Person, edited: Person) -> AbResult<()> {
        self.address_book.update_person(target, edited)?;
        self.book_changed();
        Ok(())
    }

    pub fn delete_person(&mut self, target: &Person) -> AbResult<Person> {
        let removed = self.address_book.remove_person(target)?;
        self.book_changed();
        Ok(removed)
    }

    pub fn add_group(&mut self, group: Group) -> AbResult<()> {
        self.address_book.add_group(group)?;
        self.book_changed();
        Ok(())
    }

    pub fn delete_group(&mut self, name: &str) -> AbResult<Group> {
        let removed = self.address_book.remove_group(name)?;
        self.book_changed();
        Ok(removed)
    }

    /// Persons passing the current predicate, in address book order.
    pub fn filtered_person_list(&self) -> Vec<&Person> {
        self.address_book
            .persons()
            .iter()
            .filter(|p| self.predicate.test(p))
            .collect()
    }

    pub fn predicate(&self) -> &PersonPredicate {
        &self.predicate
    }

    pub fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        debug!(?predicate, "updating filtered person list");
        self.predicate = predicate;
        self.view_revision += 1;
    }

    pub fn book_revision(&self) -> u64 {
        self.book_revision
    }

    pub fn view_revision(&self) -> u64 {
        self.view_revision
    }

    fn book_changed(&mut self) {
        self.book_revision += 1;
        self.view_revision += 1;
    }
}
