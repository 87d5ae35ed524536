use std::fmt;

use crate::db::cursor::Cursor;

/// One cell of a tabular result, and the type of positional filter arguments.
/// The store only holds text and integers; anything else reads as null.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Integer(i64),
    Text(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

impl From<Scalar> for rusqlite::types::Value {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Null => rusqlite::types::Value::Null,
            Scalar::Integer(i) => rusqlite::types::Value::Integer(i),
            Scalar::Text(s) => rusqlite::types::Value::Text(s),
        }
    }
}

impl From<rusqlite::types::ValueRef<'_>> for Scalar {
    fn from(value: rusqlite::types::ValueRef<'_>) -> Self {
        use rusqlite::types::ValueRef;
        match value {
            ValueRef::Null => Scalar::Null,
            ValueRef::Integer(i) => Scalar::Integer(i),
            ValueRef::Text(t) => Scalar::Text(String::from_utf8_lossy(t).into_owned()),
            // Reals and blobs never occur in the store schema.
            ValueRef::Real(_) | ValueRef::Blob(_) => Scalar::Null,
        }
    }
}

/// The entity sets the read interface exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntitySet {
    /// The contacts collection.
    Contacts,
    /// The contacts-by-lookup-key sub-resource (lookup key as a path segment).
    ContactByLookupKey(String),
    /// The raw-contacts collection.
    RawContacts,
}

impl fmt::Display for EntitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntitySet::Contacts => write!(f, "contacts"),
            EntitySet::ContactByLookupKey(key) => write!(f, "contacts/lookup/{}", key),
            EntitySet::RawContacts => write!(f, "raw_contacts"),
        }
    }
}

/// Read-query interface onto the external contacts store.
///
/// `selection` uses `"column = ?"` placeholders bound positionally to `args`.
/// `None` projection requests all columns. A return of `None` is the absence
/// signal: the store is unreachable or refused the query. It is never a panic.
pub trait Provider {
    fn query(
        &self,
        entity_set: &EntitySet,
        projection: Option<&[&str]>,
        selection: Option<&str>,
        args: &[Scalar],
        sort_order: Option<&str>,
    ) -> Option<Cursor>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_set_display() {
        assert_eq!(EntitySet::Contacts.to_string(), "contacts");
        assert_eq!(
            EntitySet::ContactByLookupKey("k7".into()).to_string(),
            "contacts/lookup/k7"
        );
        assert_eq!(EntitySet::RawContacts.to_string(), "raw_contacts");
    }

    #[test]
    fn scalar_from_value_ref_coerces_unsupported_types_to_null() {
        use rusqlite::types::ValueRef;
        assert_eq!(Scalar::from(ValueRef::Real(1.5)), Scalar::Null);
        assert_eq!(Scalar::from(ValueRef::Integer(3)), Scalar::Integer(3));
        assert_eq!(
            Scalar::from(ValueRef::Text(b"hi")),
            Scalar::Text("hi".into())
        );
    }
}
