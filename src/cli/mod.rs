pub mod contact_commands;
pub mod context;
pub mod route;

use std::path::Path;

use crate::db::SqliteProvider;
use crate::model::Contact;
use context::CliContext;
use route::Route;

/// Run the interactive explorer.
pub fn run(db_path: &Path) {
    println!("Contacts Explorer");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    let provider = match SqliteProvider::open(db_path) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error opening contacts store: {}", e);
            eprintln!("Use --import to seed a store first, or --file to point at one.");
            return;
        }
    };

    let ctx = CliContext::new(provider);
    repl_loop(&ctx);
}

fn repl_loop(ctx: &CliContext) {
    // The contacts list currently on screen; replaced wholesale on each
    // appearance of the contacts screen, and what `open <n>` indexes into.
    let mut contacts: Vec<Contact> = contact_commands::show_contacts(ctx);

    loop {
        let input = match ctx.read_line("> ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command {
            "help" | "?" => print_help(),
            "quit" | "exit" | "q" => break,

            "contacts" | "list" | "ls" | "back" => {
                contacts = contact_commands::show_contacts(ctx);
            }
            "open" | "show" | "view" => match resolve_target(&contacts, args) {
                Some(route) => navigate(ctx, &mut contacts, &route),
                None => println!("No contact matching '{}'. Try 'contacts' first.", args),
            },
            "goto" => match Route::parse(args) {
                Some(route) => navigate(ctx, &mut contacts, &route),
                None => println!("Unknown route '{}'.", args),
            },

            other => {
                println!("Unknown command: {}. Type 'help' for commands.", other);
            }
        }
    }
}

fn navigate(ctx: &CliContext, contacts: &mut Vec<Contact>, route: &Route) {
    match route {
        Route::Contacts => *contacts = contact_commands::show_contacts(ctx),
        Route::RawContacts { lookup_key } => contact_commands::show_raw_contacts(ctx, lookup_key),
    }
}

/// Turn `open` arguments into a route: a number indexes the displayed list,
/// anything else is taken as a lookup key.
fn resolve_target(contacts: &[Contact], args: &str) -> Option<Route> {
    let args = args.trim();
    if args.is_empty() {
        return None;
    }

    let lookup_key = match args.parse::<usize>() {
        Ok(n) if n >= 1 && n <= contacts.len() => contacts[n - 1].lookup_key.clone(),
        Ok(_) => return None,
        Err(_) => args.to_string(),
    };

    Some(Route::RawContacts { lookup_key })
}

fn parse_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (input, ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  contacts | ls       List contacts (re-fetches)");
    println!("  open <n|key>        Show raw contacts for a listed contact");
    println!("  goto <route>        Navigate by route, e.g. <key>/raw_contacts");
    println!("  back                Return to the contacts list");
    println!("  help | ?            Show this help");
    println!("  quit | exit         Leave");
}

#[cfg(test)]
mod tests {
    use super::{parse_command, resolve_target};
    use crate::cli::route::Route;
    use crate::model::Contact;

    fn sample_contacts() -> Vec<Contact> {
        vec![
            Contact::new("key-a".into(), Some("Alice".into())),
            Contact::new("key-b".into(), Some("Bob".into())),
        ]
    }

    #[test]
    fn parse_command_splits_on_first_space() {
        assert_eq!(parse_command("open 2"), ("open", "2"));
        assert_eq!(parse_command("help"), ("help", ""));
    }

    #[test]
    fn resolve_target_by_index() {
        let route = resolve_target(&sample_contacts(), "2").unwrap();
        assert_eq!(
            route,
            Route::RawContacts {
                lookup_key: "key-b".into()
            }
        );
    }

    #[test]
    fn resolve_target_by_lookup_key() {
        let route = resolve_target(&sample_contacts(), "key-a").unwrap();
        assert_eq!(
            route,
            Route::RawContacts {
                lookup_key: "key-a".into()
            }
        );
    }

    #[test]
    fn resolve_target_rejects_out_of_range_index() {
        assert_eq!(resolve_target(&sample_contacts(), "3"), None);
        assert_eq!(resolve_target(&sample_contacts(), ""), None);
    }
}
