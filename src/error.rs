use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error("column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("column {name} is not of type {expected}")]
    ColumnType {
        name: String,
        expected: &'static str,
    },

    #[error("cursor is closed")]
    CursorClosed,

    #[error("cursor is not positioned on a row")]
    NoCurrentRow,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type ContactsResult<T> = Result<T, ContactsError>;
