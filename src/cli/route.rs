use std::fmt;

/// The two-route navigation surface: the default contacts list and the
/// parameterized raw-contacts view for one stable lookup key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Contacts,
    RawContacts { lookup_key: String },
}

impl Route {
    /// Parse a route string: `contacts` or `{lookup_key}/raw_contacts`.
    pub fn parse(input: &str) -> Option<Route> {
        let input = input.trim();
        if input == "contacts" {
            return Some(Route::Contacts);
        }
        let key = input.strip_suffix("/raw_contacts")?;
        if key.is_empty() || key.contains('/') {
            return None;
        }
        Some(Route::RawContacts {
            lookup_key: key.to_string(),
        })
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Contacts => write!(f, "contacts"),
            Route::RawContacts { lookup_key } => write!(f, "{}/raw_contacts", lookup_key),
        }
    }
}
