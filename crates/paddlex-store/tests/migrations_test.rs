#![allow(clippy::unwrap_used, clippy::expect_used)]

use paddlex_core::errors::ExErrorKind;
use paddlex_store::migrations::{applied_migrations, apply_migrations};
use rusqlite::Connection;

fn setup_test_db() -> Connection {
    paddlex_store::db::open_in_memory().expect("Failed to create in-memory database")
}

fn get_table_names(conn: &Connection) -> Vec<String> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<Vec<String>, _>>()
        .unwrap()
}

#[test]
fn test_apply_migrations_on_empty_db() {
    let mut conn = setup_test_db();

    let result = apply_migrations(&mut conn);
    assert!(result.is_ok(), "Migrations should succeed: {:?}", result.err());

    let tables = get_table_names(&conn);
    for expected in [
        "schema_version",
        "paddles",
        "paddle_specs",
        "paddle_performance",
        "sqlite_sequence",
    ] {
        assert!(tables.contains(&expected.to_string()), "Missing table: {}", expected);
    }
}

#[test]
fn test_migrations_are_idempotent() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    assert_eq!(applied_migrations(&conn).unwrap(), vec!["001_initial_schema"]);
}

#[test]
fn test_checksum_recorded() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let checksum: String = conn
        .query_row(
            "SELECT checksum FROM schema_version WHERE migration_id = '001_initial_schema'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(checksum.len(), 64);
}

#[test]
fn test_tampered_checksum_fails() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute("UPDATE schema_version SET checksum = 'deadbeef'", [])
        .unwrap();

    let err = apply_migrations(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::Persistence);
    assert!(err.message().contains("Checksum mismatch"), "{}", err);
}

#[test]
fn test_specs_require_existing_paddle() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();

    let result = conn.execute(
        "INSERT INTO paddle_specs (paddle_id, shape, surface, average_weight, core,
            paddle_length, paddle_width, grip_length, grip_type, grip_circumference, created_at)
         VALUES (999, 'Hybrid', 'Carbon', 220, 16, 16.5, 7.5, 5, 'Cushion', 4.25, 0)",
        [],
    );
    assert!(result.is_err(), "foreign key should reject orphan specs");
}

#[test]
fn test_shape_check_constraint() {
    let mut conn = setup_test_db();
    apply_migrations(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO paddles (paddle_id, brand, model, created_at) VALUES ('A-B', 'A', 'B', 0)",
        [],
    )
    .unwrap();

    let result = conn.execute(
        "INSERT INTO paddle_specs (paddle_id, shape, surface, average_weight, core,
            paddle_length, paddle_width, grip_length, grip_type, grip_circumference, created_at)
         VALUES (1, 'Round', 'Carbon', 220, 16, 16.5, 7.5, 5, 'Cushion', 4.25, 0)",
        [],
    );
    assert!(result.is_err(), "CHECK should reject unknown shape");
}
