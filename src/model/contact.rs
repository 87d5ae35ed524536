use serde::{Deserialize, Serialize};

/// Shown in place of a display name the store holds as NULL.
pub const UNNAMED_PLACEHOLDER: &str = "(unnamed)";

/// An aggregated contact as listed by the store.
///
/// `lookup_key` is the stable identity: it survives changes to the store's
/// internal numeric row id, so it is what screens navigate and re-query by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub lookup_key: String,
    pub name: String,
}

impl Contact {
    pub fn new(lookup_key: String, name: Option<String>) -> Self {
        Self {
            lookup_key,
            name: name.unwrap_or_else(|| UNNAMED_PLACEHOLDER.to_string()),
        }
    }
}

/// One per-account record contributing to an aggregated contact.
///
/// `id` is the store's numeric row id; it is only meaningful within the
/// provider session that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawContact {
    pub id: i64,
    pub account_name: String,
    pub account_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_new_uses_name_when_present() {
        let c = Contact::new("k1".into(), Some("Alice".into()));
        assert_eq!(c.name, "Alice");
    }

    #[test]
    fn contact_new_falls_back_to_placeholder() {
        let c = Contact::new("k1".into(), None);
        assert_eq!(c.name, UNNAMED_PLACEHOLDER);
    }
}
