use contacts_explorer::db::{Cursor, Scalar};
use contacts_explorer::error::{ContactsError, ContactsResult};

fn columns() -> Vec<String> {
    vec!["_id".into(), "name".into()]
}

fn row(id: i64, name: Option<&str>) -> Vec<Scalar> {
    vec![
        Scalar::Integer(id),
        name.map(|n| Scalar::Text(n.into())).unwrap_or(Scalar::Null),
    ]
}

fn sample_cursor() -> Cursor {
    Cursor::new(
        columns(),
        vec![row(1, Some("Alice")), row(2, Some("Bob")), row(3, None)],
    )
}

#[test]
fn yields_every_row_in_order() {
    let mut cursor = sample_cursor();
    let ids: Vec<i64> = cursor
        .map_rows(|c| c.get_i64("_id"))
        .collect::<ContactsResult<_>>()
        .unwrap();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn exhausts_once_and_is_not_restartable() {
    let mut cursor = sample_cursor();
    let first_pass: Vec<_> = cursor.map_rows(|c| c.get_i64("_id")).collect();
    assert_eq!(first_pass.len(), 3);

    let second_pass: Vec<_> = cursor.map_rows(|c| c.get_i64("_id")).collect();
    assert!(second_pass.is_empty());
}

#[test]
fn empty_result_yields_nothing() {
    let mut cursor = Cursor::new(columns(), Vec::new());
    assert_eq!(cursor.row_count(), 0);
    let records: Vec<_> = cursor.map_rows(|c| c.get_i64("_id")).collect();
    assert!(records.is_empty());
}

#[test]
fn partial_consumption_resumes_from_current_position() {
    let mut cursor = sample_cursor();
    let first = cursor.map_rows(|c| c.get_i64("_id")).next().unwrap().unwrap();
    assert_eq!(first, 1);

    // A new adapter over the same cursor continues, it does not rewind.
    let rest: Vec<i64> = cursor
        .map_rows(|c| c.get_i64("_id"))
        .collect::<ContactsResult<_>>()
        .unwrap();
    assert_eq!(rest, vec![2, 3]);
}

#[test]
fn move_to_first_never_repositions() {
    let mut cursor = sample_cursor();
    assert!(cursor.move_to_first());
    assert!(!cursor.move_to_first());
    assert!(cursor.move_to_next());
    assert_eq!(cursor.get_i64("_id").unwrap(), 2);
}

#[test]
fn nullable_getter_distinguishes_null_from_text() {
    let mut cursor = sample_cursor();
    let names: Vec<Option<String>> = cursor
        .map_rows(|c| c.get_string_or_null("name"))
        .collect::<ContactsResult<_>>()
        .unwrap();
    assert_eq!(names[0], Some("Alice".to_string()));
    assert_eq!(names[2], None);
}

#[test]
fn missing_column_is_a_fatal_lookup_error() {
    let mut cursor = sample_cursor();
    let result = cursor.map_rows(|c| c.get_string("no_such_column")).next();
    assert!(matches!(
        result,
        Some(Err(ContactsError::ColumnNotFound { .. }))
    ));
}

#[test]
fn typed_getter_rejects_wrong_type() {
    let mut cursor = sample_cursor();
    assert!(cursor.move_to_first());
    assert!(matches!(
        cursor.get_string("_id"),
        Err(ContactsError::ColumnType { .. })
    ));
}

#[test]
fn read_before_positioning_is_an_error() {
    let cursor = sample_cursor();
    assert!(matches!(
        cursor.get_i64("_id"),
        Err(ContactsError::NoCurrentRow)
    ));
}

#[test]
fn close_is_idempotent_and_blocks_reads() {
    let mut cursor = sample_cursor();
    assert!(cursor.move_to_first());
    cursor.close();
    cursor.close();
    assert!(cursor.is_closed());
    assert!(!cursor.move_to_next());
    assert!(matches!(
        cursor.get_i64("_id"),
        Err(ContactsError::CursorClosed)
    ));
}

#[test]
fn closing_a_never_iterated_cursor_is_safe() {
    let mut cursor = Cursor::new(columns(), Vec::new());
    cursor.close();
    assert!(cursor.is_closed());
}
