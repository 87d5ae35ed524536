use std::path::Path;
use std::time::Duration;

use log::{debug, warn};
use rusqlite::{Connection, OpenFlags};

use crate::error::ContactsResult;

/// Initialize the store schema. Creates the tables if they don't exist.
pub fn initialize(conn: &Connection) -> ContactsResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS contacts (
            _id INTEGER PRIMARY KEY,
            lookup_key TEXT NOT NULL UNIQUE,
            display_name TEXT
        );

        CREATE TABLE IF NOT EXISTS raw_contacts (
            _id INTEGER PRIMARY KEY,
            contact_id INTEGER NOT NULL REFERENCES contacts(_id) ON DELETE CASCADE,
            account_name TEXT NOT NULL,
            account_type TEXT NOT NULL
        );

        PRAGMA foreign_keys = ON;
        ",
    )?;
    Ok(())
}

/// Open the store read-only. The explorer never writes contacts, and the
/// connection flags make that structural rather than a convention.
pub fn open_read_only(path: impl AsRef<Path>) -> ContactsResult<Connection> {
    let path = path.as_ref();
    let conn = match Connection::open_with_flags(
        path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    ) {
        Ok(conn) => conn,
        Err(err) => {
            warn!("failed to open store {}: {}", path.display(), err);
            return Err(err.into());
        }
    };
    conn.busy_timeout(Duration::from_secs(5))?;
    debug!("opened store read-only at {}", path.display());
    Ok(conn)
}

/// Open (or create) a writable store with the schema applied. Used by the
/// seed import path only.
pub fn open_writable(path: impl AsRef<Path>) -> ContactsResult<Connection> {
    let conn = Connection::open(path)?;
    conn.busy_timeout(Duration::from_secs(5))?;
    initialize(&conn)?;
    Ok(conn)
}

/// Create an in-memory store for testing. Available in test builds.
pub fn test_connection() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    conn
}
