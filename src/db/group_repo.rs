use rusqlite::{params, Connection};

use super::person_repo::convert;
use crate::error::AbResult;
use crate::model::{Group, Information, Tag};

pub fn insert(conn: &Connection, position: usize, group: &Group) -> AbResult<()> {
    conn.execute(
        "INSERT INTO groups (position, name, information) VALUES (?1, ?2, ?3)",
        params![
            position as i64,
            group.name.as_str(),
            group.information.as_str(),
        ],
    )?;
    Ok(())
}

pub fn delete_all(conn: &Connection) -> AbResult<()> {
    conn.execute("DELETE FROM groups", [])?;
    Ok(())
}

pub fn find_all(conn: &Connection) -> AbResult<Vec<Group>> {
    let mut stmt = conn.prepare("SELECT name, information FROM groups ORDER BY position")?;

    let rows: Vec<(String, String)> = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    rows.into_iter()
        .map(|(name, information)| {
            Ok(Group::create(
                convert(Tag::new(&name))?,
                Information::new(&information),
            ))
        })
        .collect()
}
