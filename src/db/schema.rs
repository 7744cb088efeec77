use rusqlite::Connection;

use crate::error::AbResult;

/// Initialize the database schema. Creates all tables if they don't exist.
pub fn initialize(conn: &Connection) -> AbResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS persons (
            position INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            phone TEXT NOT NULL,
            email TEXT NOT NULL,
            address TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS person_tags (
            person_position INTEGER NOT NULL REFERENCES persons(position) ON DELETE CASCADE,
            tag TEXT NOT NULL,
            PRIMARY KEY (person_position, tag)
        );

        CREATE TABLE IF NOT EXISTS groups (
            position INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL UNIQUE,
            information TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS metadata (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Create an in-memory connection for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
