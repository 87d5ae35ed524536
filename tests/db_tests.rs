use contacts_explorer::db::schema;
use contacts_explorer::queries::contact_queries;
use contacts_explorer::seed;

#[test]
fn initialize_is_idempotent() {
    let conn = schema::test_connection();
    schema::initialize(&conn).unwrap();
    conn.execute(
        "INSERT INTO contacts (lookup_key, display_name) VALUES ('k1', 'Alice')",
        [],
    )
    .unwrap();
}

#[test]
fn open_read_only_rejects_writes() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("contacts.db");

    let writable = schema::open_writable(&db_path).unwrap();
    writable
        .execute(
            "INSERT INTO contacts (lookup_key, display_name) VALUES ('k1', 'Alice')",
            [],
        )
        .unwrap();
    drop(writable);

    let read_only = schema::open_read_only(&db_path).unwrap();
    let err = read_only.execute(
        "INSERT INTO contacts (lookup_key, display_name) VALUES ('k2', 'Bob')",
        [],
    );
    assert!(err.is_err());
}

#[test]
fn open_read_only_does_not_create_a_missing_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("missing.db");
    assert!(schema::open_read_only(&db_path).is_err());
    assert!(!db_path.exists());
}

#[test]
fn import_json_seeds_a_store() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("seed.json");
    let db_path = dir.path().join("contacts.db");

    std::fs::write(
        &json_path,
        r#"{
            "contacts": [
                {
                    "name": "Alice",
                    "raw_contacts": [
                        { "account_name": "alice@example.com", "account_type": "com.example" },
                        { "account_name": "alice", "account_type": "org.chat" }
                    ]
                },
                { "raw_contacts": [] }
            ]
        }"#,
    )
    .unwrap();

    let stats = seed::import_json(&json_path, &db_path).unwrap();
    assert_eq!(stats.contacts, 2);
    assert_eq!(stats.raw_contacts, 2);

    // The seeded store reads back through the explorer's own query path.
    let provider = contacts_explorer::db::SqliteProvider::open(&db_path).unwrap();
    let contacts = contact_queries::retrieve_contacts(&provider)
        .unwrap()
        .unwrap();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Alice");
    assert_eq!(
        contacts[1].name,
        contacts_explorer::model::UNNAMED_PLACEHOLDER
    );

    let raw_contacts =
        contact_queries::retrieve_raw_contacts(&provider, &contacts[0].lookup_key)
            .unwrap()
            .unwrap();
    assert_eq!(raw_contacts.len(), 2);
    assert_eq!(raw_contacts[0].account_name, "alice@example.com");
}

#[test]
fn import_json_rejects_malformed_input() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("seed.json");
    let db_path = dir.path().join("contacts.db");

    std::fs::write(&json_path, "{ not json").unwrap();
    assert!(seed::import_json(&json_path, &db_path).is_err());
}
