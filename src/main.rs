use std::path::PathBuf;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut db_path: Option<PathBuf> = None;
    let mut import_path: Option<PathBuf> = None;
    let mut log_level: Option<String> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" | "-f" => {
                db_path = args.next().map(PathBuf::from);
                if db_path.is_none() {
                    eprintln!("Error: --file requires a path argument");
                    std::process::exit(1);
                }
            }
            "--import" => {
                import_path = args.next().map(PathBuf::from);
                if import_path.is_none() {
                    eprintln!("Error: --import requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--log-level" => {
                log_level = args.next();
                if log_level.is_none() {
                    eprintln!("Error: --log-level requires a level argument");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Contacts Explorer");
                println!();
                println!("Usage: contacts-explorer [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -f, --file <PATH>       Contacts store path (default: .data/contacts.db)");
                println!("  --import <JSON_PATH>    Seed a new store from a JSON contacts file");
                println!("  --log-level <LEVEL>     trace|debug|info|warn|error");
                println!("  -h, --help              Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let level = log_level.unwrap_or_else(|| contacts_explorer::logging::default_level().to_string());
    if let Err(e) = contacts_explorer::logging::init(&level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let db_path = db_path.unwrap_or_else(|| {
        let dir = PathBuf::from(".data");
        if !dir.exists() {
            std::fs::create_dir_all(&dir).expect("Failed to create .data directory");
        }
        dir.join("contacts.db")
    });

    if let Some(json_path) = import_path {
        println!("Importing from {}...", json_path.display());
        if db_path.exists() {
            eprintln!("Error: Store file {} already exists.", db_path.display());
            eprintln!("Remove it first or use --file to specify a different path.");
            std::process::exit(1);
        }
        match contacts_explorer::seed::import_json(&json_path, &db_path) {
            Ok(stats) => {
                println!("Import complete!");
                println!("  Contacts: {}", stats.contacts);
                println!("  Raw contacts: {}", stats.raw_contacts);
            }
            Err(e) => {
                eprintln!("Import failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    contacts_explorer::cli::run(&db_path);
}
