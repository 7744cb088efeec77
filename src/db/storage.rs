use std::path::Path;

use chrono::{DateTime, Local};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use super::{group_repo, person_repo, schema};
use crate::error::{AbError, AbResult};
use crate::model::AddressBook;

const SAVED_AT_KEY: &str = "saved_at";

/// Opens (creating if needed) the address book file and its schema.
pub fn open(path: &Path) -> AbResult<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = Connection::open(path)?;
    schema::initialize(&conn)?;
    debug!(path = %path.display(), "opened address book storage");
    Ok(conn)
}

/// Replaces everything stored with `book` in a single transaction.
pub fn save_address_book(conn: &mut Connection, book: &AddressBook) -> AbResult<DateTime<Local>> {
    let saved_at = Local::now();
    let tx = conn.transaction()?;

    person_repo::delete_all(&tx)?;
    group_repo::delete_all(&tx)?;
    for (position, group) in book.groups().iter().enumerate() {
        group_repo::insert(&tx, position, group)?;
    }
    for (position, person) in book.persons().iter().enumerate() {
        person_repo::insert(&tx, position, person)?;
    }
    tx.execute(
        "INSERT INTO metadata (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![SAVED_AT_KEY, saved_at.to_rfc3339()],
    )?;

    tx.commit()?;
    info!(
        persons = book.persons().len(),
        groups = book.groups().len(),
        "saved address book"
    );
    Ok(saved_at)
}

/// Reads the stored book back, re-checking every model invariant.
pub fn load_address_book(conn: &Connection) -> AbResult<AddressBook> {
    let groups = group_repo::find_all(conn)?;
    let persons = person_repo::find_all(conn)?;
    let book = AddressBook::from_parts(persons, groups)
        .map_err(|e| AbError::DataConversion(e.to_string()))?;
    info!(
        persons = book.persons().len(),
        groups = book.groups().len(),
        "loaded address book"
    );
    Ok(book)
}

/// Whether a book has ever been saved to this file. A file that was only
/// opened holds the schema but no book.
pub fn has_saved_book(conn: &Connection) -> AbResult<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT 1 FROM metadata WHERE key = ?1",
            params![SAVED_AT_KEY],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// When the book was last saved, if ever.
pub fn last_saved_at(conn: &Connection) -> AbResult<Option<DateTime<Local>>> {
    let value: Option<String> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = ?1",
            params![SAVED_AT_KEY],
            |row| row.get(0),
        )
        .optional()?;

    value
        .map(|s| {
            DateTime::parse_from_rfc3339(&s)
                .map(|dt| dt.with_timezone(&Local))
                .map_err(|e| AbError::DataConversion(format!("invalid saved_at: {}", e)))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample_data;

    #[test]
    fn never_saved_has_no_timestamp() {
        let conn = schema::test_connection();
        assert!(last_saved_at(&conn).unwrap().is_none());
    }

    #[test]
    fn opened_file_has_no_saved_book_until_first_save() {
        let mut conn = schema::test_connection();
        assert!(!has_saved_book(&conn).unwrap());
        save_address_book(&mut conn, &AddressBook::new()).unwrap();
        assert!(has_saved_book(&conn).unwrap());
    }

    #[test]
    fn save_records_timestamp() {
        let mut conn = schema::test_connection();
        let saved_at = save_address_book(&mut conn, &sample_data::sample_address_book()).unwrap();
        let stored = last_saved_at(&conn).unwrap().unwrap();
        assert_eq!(stored.timestamp(), saved_at.timestamp());
    }
}
