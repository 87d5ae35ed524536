//! Seed import: populates a brand-new store from a JSON contacts file so the
//! read-only explorer has something to read. This is tooling for the store,
//! not part of the explorer itself, which never writes.

use std::path::Path;

use log::info;
use rusqlite::{params, Connection};
use serde::Deserialize;
use uuid::Uuid;

use crate::db::schema;
use crate::error::ContactsResult;

#[derive(Debug, Deserialize)]
struct SeedFile {
    contacts: Vec<SeedContact>,
}

#[derive(Debug, Deserialize)]
struct SeedContact {
    /// Absent or null means the store holds no display name for the contact.
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    raw_contacts: Vec<SeedRawContact>,
}

#[derive(Debug, Deserialize)]
struct SeedRawContact {
    account_name: String,
    account_type: String,
}

#[derive(Debug)]
pub struct ImportStats {
    pub contacts: usize,
    pub raw_contacts: usize,
}

/// Imports a JSON contacts file into a SQLite store at `db_path`, creating
/// the schema and generating a fresh lookup key per contact.
pub fn import_json(json_path: &Path, db_path: &Path) -> ContactsResult<ImportStats> {
    let json_str = std::fs::read_to_string(json_path)?;
    let seed: SeedFile = serde_json::from_str(&json_str)?;

    let conn = schema::open_writable(db_path)?;
    import_contacts(&conn, &seed)
}

fn import_contacts(conn: &Connection, seed: &SeedFile) -> ContactsResult<ImportStats> {
    let mut contact_count = 0;
    let mut raw_count = 0;

    for contact in &seed.contacts {
        let lookup_key = Uuid::new_v4().simple().to_string();
        conn.execute(
            "INSERT INTO contacts (lookup_key, display_name) VALUES (?1, ?2)",
            params![lookup_key, contact.name],
        )?;
        let contact_id = conn.last_insert_rowid();
        contact_count += 1;

        for raw in &contact.raw_contacts {
            conn.execute(
                "INSERT INTO raw_contacts (contact_id, account_name, account_type)
                 VALUES (?1, ?2, ?3)",
                params![contact_id, raw.account_name, raw.account_type],
            )?;
            raw_count += 1;
        }
    }

    info!(
        "seeded store with {} contacts, {} raw contacts",
        contact_count, raw_count
    );
    Ok(ImportStats {
        contacts: contact_count,
        raw_contacts: raw_count,
    })
}
