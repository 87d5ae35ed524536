use log::trace;

use crate::db::provider::Scalar;
use crate::error::{ContactsError, ContactsResult};

/// An owned tabular result: named columns, ordered rows, and one mutable
/// position shared by everything that reads from the cursor.
///
/// The position starts before the first row. Reads are only valid while the
/// position is on a row; a requested column that does not exist is a fatal
/// lookup error because it means the query itself was malformed.
///
/// The cursor must be released exactly once. `Drop` guarantees release on
/// every exit path, and calling [`Cursor::close`] explicitly is idempotent.
#[derive(Debug)]
pub struct Cursor {
    columns: Vec<String>,
    rows: Vec<Vec<Scalar>>,
    // -1 is before-first, `rows.len()` is after-last.
    position: isize,
    closed: bool,
}

impl Cursor {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Scalar>>) -> Self {
        Self {
            columns,
            rows,
            position: -1,
            closed: false,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// True while the position is still before the first row.
    pub fn is_before_first(&self) -> bool {
        !self.closed && self.position < 0
    }

    /// Position at the first row. Only valid before the first access: once
    /// the cursor has moved it never rewinds, so this returns `false` both
    /// for an empty result (the defined "no rows" condition, not an error)
    /// and for a cursor that already advanced.
    pub fn move_to_first(&mut self) -> bool {
        if self.closed || self.rows.is_empty() || self.position >= 0 {
            return false;
        }
        self.position = 0;
        true
    }

    /// Advance by exactly one row. Returns `false` once the rows are
    /// exhausted; the position then stays after the last row.
    pub fn move_to_next(&mut self) -> bool {
        if self.closed || self.position >= self.rows.len() as isize {
            return false;
        }
        self.position += 1;
        self.position < self.rows.len() as isize
    }

    pub fn is_last(&self) -> bool {
        !self.closed && !self.rows.is_empty() && self.position == self.rows.len() as isize - 1
    }

    fn column_index(&self, name: &str) -> ContactsResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ContactsError::ColumnNotFound { name: name.into() })
    }

    fn current_row(&self) -> ContactsResult<&[Scalar]> {
        if self.closed {
            return Err(ContactsError::CursorClosed);
        }
        if self.position < 0 || self.position >= self.rows.len() as isize {
            return Err(ContactsError::NoCurrentRow);
        }
        Ok(&self.rows[self.position as usize])
    }

    /// The named cell of the current row.
    pub fn get(&self, column: &str) -> ContactsResult<&Scalar> {
        let index = self.column_index(column)?;
        Ok(&self.current_row()?[index])
    }

    pub fn get_string(&self, column: &str) -> ContactsResult<String> {
        match self.get(column)? {
            Scalar::Text(s) => Ok(s.clone()),
            _ => Err(ContactsError::ColumnType {
                name: column.into(),
                expected: "text",
            }),
        }
    }

    pub fn get_string_or_null(&self, column: &str) -> ContactsResult<Option<String>> {
        match self.get(column)? {
            Scalar::Text(s) => Ok(Some(s.clone())),
            Scalar::Null => Ok(None),
            Scalar::Integer(_) => Err(ContactsError::ColumnType {
                name: column.into(),
                expected: "text",
            }),
        }
    }

    pub fn get_i64(&self, column: &str) -> ContactsResult<i64> {
        match self.get(column)? {
            Scalar::Integer(i) => Ok(*i),
            _ => Err(ContactsError::ColumnType {
                name: column.into(),
                expected: "integer",
            }),
        }
    }

    pub fn get_i64_or_null(&self, column: &str) -> ContactsResult<Option<i64>> {
        match self.get(column)? {
            Scalar::Integer(i) => Ok(Some(*i)),
            Scalar::Null => Ok(None),
            Scalar::Text(_) => Err(ContactsError::ColumnType {
                name: column.into(),
                expected: "integer",
            }),
        }
    }

    /// Lazily map the remaining rows through `map`. Single-pass: the
    /// iterator shares the cursor's position, so a second call after
    /// exhaustion yields nothing without a fresh query.
    pub fn map_rows<T, F>(&mut self, map: F) -> CursorIter<'_, T, F>
    where
        F: FnMut(&Cursor) -> ContactsResult<T>,
    {
        CursorIter { cursor: self, map }
    }

    /// Release the result. Safe to call more than once, and safe to call on
    /// a cursor that was never iterated.
    pub fn close(&mut self) {
        if !self.closed {
            trace!("cursor closed ({} rows buffered)", self.rows.len());
            self.rows.clear();
            self.closed = true;
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        self.close();
    }
}

/// Lazy, forward-only row adapter: yields one mapped record per row.
///
/// Positioning convention: the first pull moves to the first row, every later
/// pull advances exactly one row, and a failed move ends the sequence. The
/// adapter never re-positions to the first row.
pub struct CursorIter<'c, T, F>
where
    F: FnMut(&Cursor) -> ContactsResult<T>,
{
    cursor: &'c mut Cursor,
    map: F,
}

impl<T, F> Iterator for CursorIter<'_, T, F>
where
    F: FnMut(&Cursor) -> ContactsResult<T>,
{
    type Item = ContactsResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let moved = if self.cursor.is_before_first() {
            self.cursor.move_to_first()
        } else {
            self.cursor.move_to_next()
        };
        if !moved {
            return None;
        }
        Some((self.map)(&*self.cursor))
    }
}
