pub mod index;
pub mod person;
pub mod group;
pub mod unique_person_list;
pub mod unique_group_list;
pub mod address_book;
pub mod predicate;
pub mod model_manager;
pub mod sample_data;

// Re-exports for convenience
pub use index::Index;
pub use person::{Address, Description, Email, Name, Person, Phone};
pub use group::{Group, Information, Tag};
pub use unique_person_list::UniquePersonList;
pub use unique_group_list::UniqueGroupList;
pub use address_book::AddressBook;
pub use predicate::PersonPredicate;
pub use model_manager::Model;
