pub mod cursor;
pub mod provider;
pub mod schema;
pub mod sqlite;

pub use cursor::{Cursor, CursorIter};
pub use provider::{EntitySet, Provider, Scalar};
pub use sqlite::SqliteProvider;
