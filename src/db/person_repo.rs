use std::collections::BTreeSet;

use rusqlite::{params, Connection};

use crate::error::{AbError, AbResult};
use crate::model::{Address, Description, Email, Name, Person, Phone, Tag};

pub fn insert(conn: &Connection, position: usize, person: &Person) -> AbResult<()> {
    conn.execute(
        "INSERT INTO persons (position, name, phone, email, address, description)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            position as i64,
            person.name().as_str(),
            person.phone().as_str(),
            person.email().as_str(),
            person.address().as_str(),
            person.description().as_str(),
        ],
    )?;

    for tag in person.tags() {
        conn.execute(
            "INSERT INTO person_tags (person_position, tag) VALUES (?1, ?2)",
            params![position as i64, tag.as_str()],
        )?;
    }

    Ok(())
}

pub fn delete_all(conn: &Connection) -> AbResult<()> {
    conn.execute("DELETE FROM person_tags", [])?;
    conn.execute("DELETE FROM persons", [])?;
    Ok(())
}

/// All stored persons in list order. Every field is re-validated.
pub fn find_all(conn: &Connection) -> AbResult<Vec<Person>> {
    let mut stmt = conn.prepare(
        "SELECT position, name, phone, email, address, description
         FROM persons ORDER BY position",
    )?;

    let rows: Vec<(i64, String, String, String, String, String)> = stmt
        .query_map([], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?
        .collect::<Result<Vec<_>, _>>()?;

    let mut persons = Vec::with_capacity(rows.len());
    for (position, name, phone, email, address, description) in rows {
        let tags = find_tags(conn, position)?;
        persons.push(Person::new(
            convert(Name::new(&name))?,
            convert(Phone::new(&phone))?,
            convert(Email::new(&email))?,
            convert(Address::new(&address))?,
            Description::new(&description),
            tags,
        ));
    }

    Ok(persons)
}

fn find_tags(conn: &Connection, position: i64) -> AbResult<BTreeSet<Tag>> {
    let mut stmt =
        conn.prepare("SELECT tag FROM person_tags WHERE person_position = ?1 ORDER BY tag")?;

    let names = stmt
        .query_map(params![position], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;

    names
        .iter()
        .map(|name| convert(Tag::new(name)))
        .collect()
}

/// Stored values failing validation mean the file is corrupt, not that the
/// user typed something wrong.
pub(crate) fn convert<T>(result: AbResult<T>) -> AbResult<T> {
    result.map_err(|e| AbError::DataConversion(e.to_string()))
}
