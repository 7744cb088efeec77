use std::collections::BTreeSet;

use crate::model::{Address, AddressBook, Description, Email, Name, Person, Phone, Tag};

const SAMPLE_PERSONS: &[(&str, &str, &str, &str, &[&str])] = &[
    ("Alex Yeoh", "87438807", "alexyeoh@example.com", "Blk 30 Geylang Street 29, #06-40", &["friends"]),
    ("Bernice Yu", "99272758", "berniceyu@example.com", "Blk 30 Lorong 3 Serangoon Gardens, #07-18", &["colleagues", "friends"]),
    ("Charlotte Oliveiro", "93210283", "charlotte@example.com", "Blk 11 Ang Mo Kio Street 74, #11-04", &["neighbours"]),
    ("David Li", "91031282", "lidavid@example.com", "Blk 436 Serangoon Gardens Street 26, #16-43", &["family"]),
    ("Irfan Ibrahim", "92492021", "irfan@example.com", "Blk 47 Tampines Street 20, #17-35", &["classmates"]),
    ("Roy Balakrishnan", "92624417", "royb@example.com", "Blk 45 Aljunied Street 85, #11-31", &["colleagues"]),
];

/// The persons a fresh install starts with.
pub fn sample_persons() -> Vec<Person> {
    SAMPLE_PERSONS
        .iter()
        .map(|(name, phone, email, address, tags)| {
            let tags: BTreeSet<Tag> = tags
                .iter()
                .map(|t| Tag::new(t).expect("sample tag is valid"))
                .collect();
            Person::new(
                Name::new(name).expect("sample name is valid"),
                Phone::new(phone).expect("sample phone is valid"),
                Email::new(email).expect("sample email is valid"),
                Address::new(address).expect("sample address is valid"),
                Description::default(),
                tags,
            )
        })
        .collect()
}

pub fn sample_address_book() -> AddressBook {
    AddressBook::from_parts(sample_persons(), Vec::new()).expect("sample persons are distinct")
}
