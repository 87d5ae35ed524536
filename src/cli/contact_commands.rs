use crate::cli::context::{self, CliContext};
use crate::model::{Contact, RawContact};
use crate::queries::contact_queries;

/// The contacts screen: one fetch per appearance, records replaced wholesale.
/// Returns the freshly fetched list so the caller can resolve `open <n>`.
pub fn show_contacts(ctx: &CliContext) -> Vec<Contact> {
    let contacts = fetch_contacts(ctx).unwrap_or_default();

    if contacts.is_empty() {
        println!("No contacts available.");
        return contacts;
    }

    println!("Contacts ({}):", contacts.len());
    for (index, contact) in contacts.iter().enumerate() {
        println!("  {}. {}", index + 1, contact.name);
    }
    println!();
    println!("Use 'open <number>' to view a contact's raw contacts.");
    contacts
}

/// The raw-contacts screen for one lookup key.
pub fn show_raw_contacts(ctx: &CliContext, lookup_key: &str) {
    let raw_contacts = fetch_raw_contacts(ctx, lookup_key).unwrap_or_default();

    if raw_contacts.is_empty() {
        println!("No raw contacts for {}.", lookup_key);
        return;
    }

    println!("Raw contacts ({}):", raw_contacts.len());
    for raw in &raw_contacts {
        println!("  #{} {} / {}", raw.id, raw.account_type, raw.account_name);
    }
}

fn fetch_contacts(ctx: &CliContext) -> Option<Vec<Contact>> {
    match context::run_fetch(|| contact_queries::retrieve_contacts(ctx.provider()))? {
        Ok(result) => result,
        // A missing column is a programming error; crash by design.
        Err(err) => {
            ctx.print_error(&err);
            std::process::exit(1);
        }
    }
}

fn fetch_raw_contacts(ctx: &CliContext, lookup_key: &str) -> Option<Vec<RawContact>> {
    match context::run_fetch(|| contact_queries::retrieve_raw_contacts(ctx.provider(), lookup_key))?
    {
        Ok(result) => result,
        Err(err) => {
            ctx.print_error(&err);
            std::process::exit(1);
        }
    }
}
