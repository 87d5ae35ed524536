use log::debug;

use crate::db::{EntitySet, Provider, Scalar};
use crate::error::ContactsResult;
use crate::model::{Contact, RawContact};

/// Column names exposed by the contacts store.
pub const COL_ID: &str = "_id";
pub const COL_LOOKUP_KEY: &str = "lookup_key";
pub const COL_DISPLAY_NAME: &str = "display_name";
pub const COL_CONTACT_ID: &str = "contact_id";
pub const COL_ACCOUNT_NAME: &str = "account_name";
pub const COL_ACCOUNT_TYPE: &str = "account_type";

/// List every contact in the store.
///
/// Returns `Ok(None)` when the store refused the query (the absence signal);
/// a missing column is a programming error and propagates as `Err`.
pub fn retrieve_contacts(provider: &dyn Provider) -> ContactsResult<Option<Vec<Contact>>> {
    let Some(mut cursor) = provider.query(&EntitySet::Contacts, None, None, &[], None) else {
        return Ok(None);
    };

    let contacts = cursor
        .map_rows(|row| {
            Ok(Contact::new(
                row.get_string(COL_LOOKUP_KEY)?,
                row.get_string_or_null(COL_DISPLAY_NAME)?,
            ))
        })
        .collect::<ContactsResult<Vec<_>>>()?;

    debug!("retrieved {} contacts", contacts.len());
    Ok(Some(contacts))
}

/// List the raw-contact records behind one contact, addressed by its stable
/// lookup key.
///
/// Two sequential queries: the lookup key resolves to the store's numeric id
/// via the by-lookup-key sub-resource (first row only), then the raw-contacts
/// collection is filtered by that id. A key that resolves to zero rows means
/// "no raw contacts", not an error; a refused query at either step is the
/// absence signal.
pub fn retrieve_raw_contacts(
    provider: &dyn Provider,
    lookup_key: &str,
) -> ContactsResult<Option<Vec<RawContact>>> {
    let Some(mut lookup_cursor) = provider.query(
        &EntitySet::ContactByLookupKey(lookup_key.to_string()),
        Some(&[COL_ID]),
        None,
        &[],
        None,
    ) else {
        return Ok(None);
    };

    let contact_id = lookup_cursor
        .map_rows(|row| row.get_i64(COL_ID))
        .next()
        .transpose()?;
    lookup_cursor.close();

    let Some(contact_id) = contact_id else {
        debug!("lookup key {} resolved to no contact", lookup_key);
        return Ok(Some(Vec::new()));
    };

    let Some(mut cursor) = provider.query(
        &EntitySet::RawContacts,
        None,
        Some("contact_id = ?"),
        &[Scalar::Integer(contact_id)],
        None,
    ) else {
        return Ok(None);
    };

    let raw_contacts = cursor
        .map_rows(|row| {
            Ok(RawContact {
                id: row.get_i64(COL_ID)?,
                account_name: row.get_string(COL_ACCOUNT_NAME)?,
                account_type: row.get_string(COL_ACCOUNT_TYPE)?,
            })
        })
        .collect::<ContactsResult<Vec<_>>>()?;

    debug!(
        "retrieved {} raw contacts for contact {}",
        raw_contacts.len(),
        contact_id
    );
    Ok(Some(raw_contacts))
}
