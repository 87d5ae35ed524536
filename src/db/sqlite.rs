use std::path::Path;

use log::{debug, warn};
use rusqlite::{params_from_iter, Connection};

use crate::db::cursor::Cursor;
use crate::db::provider::{EntitySet, Provider, Scalar};
use crate::db::schema;
use crate::error::ContactsResult;

/// [`Provider`] backed by a SQLite database standing in for the system
/// contacts store. Refused queries (missing table, malformed selection,
/// unreachable file) become the absence signal, never a panic.
pub struct SqliteProvider {
    conn: Connection,
}

impl SqliteProvider {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Open the store at `path` read-only.
    pub fn open(path: impl AsRef<Path>) -> ContactsResult<Self> {
        Ok(Self::new(schema::open_read_only(path)?))
    }

    fn run_query(
        &self,
        entity_set: &EntitySet,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        args: &[Scalar],
        sort_order: Option<&str>,
    ) -> ContactsResult<Cursor> {
        let columns = match projection {
            Some(cols) => cols.join(", "),
            None => "*".to_string(),
        };

        // The lookup-key sub-resource carries its filter in the entity set
        // itself; its key binds before any caller-supplied args.
        let (table, mut clauses, mut values) = match entity_set {
            EntitySet::Contacts => ("contacts", Vec::new(), Vec::new()),
            EntitySet::ContactByLookupKey(key) => (
                "contacts",
                vec!["lookup_key = ?".to_string()],
                vec![rusqlite::types::Value::Text(key.clone())],
            ),
            EntitySet::RawContacts => ("raw_contacts", Vec::new(), Vec::new()),
        };

        if let Some(sel) = selection {
            clauses.push(sel.to_string());
        }
        values.extend(args.iter().cloned().map(rusqlite::types::Value::from));

        let mut sql = format!("SELECT {} FROM {}", columns, table);
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        if let Some(sort) = sort_order {
            sql.push_str(" ORDER BY ");
            sql.push_str(sort);
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let column_names: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect();
        let column_count = column_names.len();

        let mut rows = stmt.query(params_from_iter(values))?;
        let mut data = Vec::new();
        while let Some(row) = rows.next()? {
            let mut cells = Vec::with_capacity(column_count);
            for index in 0..column_count {
                cells.push(Scalar::from(row.get_ref(index)?));
            }
            data.push(cells);
        }

        debug!("query {} returned {} rows", entity_set, data.len());
        Ok(Cursor::new(column_names, data))
    }
}

impl Provider for SqliteProvider {
    fn query(
        &self,
        entity_set: &EntitySet,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        args: &[Scalar],
        sort_order: Option<&str>,
    ) -> Option<Cursor> {
        match self.run_query(entity_set, projection, selection, args, sort_order) {
            Ok(cursor) => Some(cursor),
            Err(err) => {
                warn!("query refused for {}: {}", entity_set, err);
                None
            }
        }
    }
}
