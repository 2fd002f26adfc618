//! End-to-end tests for the information_schema virtual tables.
//!
//! Every test registers the extension on a fresh in-memory (or temporary file)
//! SQLite database and queries the views through plain SQL.

use mysqlite_core::InformationSchemaConfig;
use mysqlite_schema::register;
use pretty_assertions::assert_eq;
use rusqlite::Connection;
use rusqlite::types::Value;

const TABLES: &str = "\"information_schema.tables\"";
const COLUMNS: &str = "\"information_schema.columns\"";

fn open(config: &InformationSchemaConfig) -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    register(&conn, config).unwrap();
    conn
}

fn fixture() -> Connection {
    let conn = open(&InformationSchemaConfig::default());
    conn.execute_batch(
        "CREATE TABLE t1 (id INTEGER PRIMARY KEY, name TEXT);
         CREATE VIEW v1 AS SELECT id, name FROM t1;",
    )
    .unwrap();
    conn
}

fn query(conn: &Connection, sql: &str) -> Vec<Vec<Value>> {
    let mut stmt = conn.prepare(sql).unwrap();
    let width = stmt.column_count();
    stmt.query_map([], |row| {
        (0..width)
            .map(|i| row.get::<_, Value>(i))
            .collect::<rusqlite::Result<Vec<Value>>>()
    })
    .unwrap()
    .collect::<Result<Vec<_>, _>>()
    .unwrap()
}

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

#[test]
fn test_empty_database_has_no_rows() {
    let conn = open(&InformationSchemaConfig::default());
    assert!(query(&conn, &format!("SELECT * FROM {TABLES}")).is_empty());
    assert!(query(&conn, &format!("SELECT * FROM {COLUMNS}")).is_empty());
}

#[test]
fn test_internal_objects_are_hidden() {
    let conn = open(&InformationSchemaConfig::default());
    // Leaves sqlite_sequence behind as the only catalog object.
    conn.execute_batch(
        "CREATE TABLE counters (id INTEGER PRIMARY KEY AUTOINCREMENT);
         INSERT INTO counters DEFAULT VALUES;
         DROP TABLE counters;",
    )
    .unwrap();

    let objects: i64 = conn
        .query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get(0))
        .unwrap();
    assert_eq!(objects, 1);

    assert!(query(&conn, &format!("SELECT * FROM {TABLES}")).is_empty());
    assert!(query(&conn, &format!("SELECT * FROM {COLUMNS}")).is_empty());
}

#[test]
fn test_tables_and_views() {
    let conn = fixture();
    let rows = query(&conn, &format!("SELECT table_name, table_type FROM {TABLES}"));
    assert_eq!(
        rows,
        vec![
            vec![text("t1"), text("BASE TABLE")],
            vec![text("v1"), text("VIEW")],
        ]
    );
}

#[test]
fn test_tables_full_row() {
    let conn = fixture();
    let rows = query(&conn, &format!("SELECT * FROM {TABLES} WHERE table_name = 't1'"));
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0],
        vec![
            text("def"),
            text("main"),
            text("t1"),
            text("BASE TABLE"),
            text("SQLite"),
            Value::Integer(10),
            text("Dynamic"),
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            Value::Null,
            text("utf8mb4_general_ci"),
            Value::Null,
            text(""),
            text(""),
        ]
    );
}

#[test]
fn test_columns_for_table() {
    let conn = fixture();
    let rows = query(
        &conn,
        &format!(
            "SELECT column_name, ordinal_position, is_nullable, column_key, data_type, column_type \
             FROM {COLUMNS} WHERE table_name = 't1'"
        ),
    );
    assert_eq!(
        rows,
        vec![
            vec![
                text("id"),
                Value::Integer(1),
                text("NO"),
                text("PRI"),
                text("INTEGER"),
                text("INTEGER"),
            ],
            vec![
                text("name"),
                Value::Integer(2),
                text("YES"),
                text(""),
                text("TEXT"),
                text("TEXT"),
            ],
        ]
    );
}

#[test]
fn test_columns_include_views_in_catalog_order() {
    let conn = fixture();
    let rows = query(&conn, &format!("SELECT table_name, column_name FROM {COLUMNS}"));
    assert_eq!(
        rows,
        vec![
            vec![text("t1"), text("id")],
            vec![text("t1"), text("name")],
            vec![text("v1"), text("id")],
            vec![text("v1"), text("name")],
        ]
    );
}

#[test]
fn test_declared_layouts() {
    let conn = fixture();

    let stmt = conn.prepare(&format!("SELECT * FROM {TABLES}")).unwrap();
    assert_eq!(stmt.column_count(), 21);
    assert_eq!(stmt.column_names()[3], "table_type");
    assert_eq!(stmt.column_names()[20], "table_comment");

    let stmt = conn.prepare(&format!("SELECT * FROM {COLUMNS}")).unwrap();
    assert_eq!(stmt.column_count(), 22);
    assert_eq!(stmt.column_names()[16], "column_key");
    assert_eq!(stmt.column_names()[21], "srs_id");
}

#[test]
fn test_synthetic_fields_are_constant() {
    let conn = fixture();
    conn.execute_batch("CREATE TABLE other (a BLOB, b REAL NOT NULL DEFAULT 1.5);")
        .unwrap();

    let rows = query(
        &conn,
        &format!(
            "SELECT DISTINCT table_catalog, character_set_name, collation_name, privileges \
             FROM {COLUMNS}"
        ),
    );
    assert_eq!(
        rows,
        vec![vec![
            text("def"),
            text("utf8mb4"),
            text("utf8mb4_general_ci"),
            text("select,insert,update,references"),
        ]]
    );

    let rows = query(
        &conn,
        &format!("SELECT DISTINCT table_catalog, engine, version, table_collation FROM {TABLES}"),
    );
    assert_eq!(
        rows,
        vec![vec![
            text("def"),
            text("SQLite"),
            Value::Integer(10),
            text("utf8mb4_general_ci"),
        ]]
    );
}

#[test]
fn test_column_defaults() {
    let conn = open(&InformationSchemaConfig::default());
    conn.execute_batch("CREATE TABLE s (a TEXT, b TEXT DEFAULT 'x', c REAL NOT NULL DEFAULT 1.5);")
        .unwrap();

    let rows = query(
        &conn,
        &format!("SELECT column_name, column_default, is_nullable FROM {COLUMNS}"),
    );
    assert_eq!(
        rows,
        vec![
            vec![text("a"), Value::Null, text("YES")],
            vec![text("b"), text("'x'"), text("YES")],
            vec![text("c"), text("1.5"), text("NO")],
        ]
    );
}

#[test]
fn test_rowid_counts_rows() {
    let conn = fixture();
    let rows = query(&conn, &format!("SELECT rowid FROM {TABLES}"));
    assert_eq!(rows, vec![vec![Value::Integer(1)], vec![Value::Integer(2)]]);
}

#[test]
fn test_refilter_is_idempotent() {
    let conn = fixture();
    // The inner virtual table cursor is re-filtered once per outer row.
    let rows = query(
        &conn,
        &format!(
            "SELECT o.n, t.table_name, t.table_type, t.rowid \
             FROM (SELECT 1 AS n UNION ALL SELECT 2) o CROSS JOIN {TABLES} t"
        ),
    );
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0][1..].to_vec(), rows[2][1..].to_vec());
    assert_eq!(rows[1][1..].to_vec(), rows[3][1..].to_vec());
}

#[test]
fn test_self_join_uses_independent_cursors() {
    let conn = fixture();
    let count: i64 = conn
        .query_row(
            &format!("SELECT count(*) FROM {TABLES} a, {TABLES} b"),
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 4);
}

#[test]
fn test_special_characters_in_names() {
    let conn = open(&InformationSchemaConfig::default());
    conn.execute_batch("CREATE TABLE \"o'brien \"\"x\"\"\" (\"we'ird\" TEXT);")
        .unwrap();

    let rows = query(&conn, &format!("SELECT table_name, column_name FROM {COLUMNS}"));
    assert_eq!(rows, vec![vec![text("o'brien \"x\""), text("we'ird")]]);
}

#[test]
fn test_configured_schema_label() {
    let config = InformationSchemaConfig::new().with_default_schema("analytics");
    let conn = open(&config);
    conn.execute_batch(
        "CREATE TABLE main_only (x INTEGER);
         ATTACH DATABASE ':memory:' AS analytics;
         CREATE TABLE analytics.events (id INTEGER PRIMARY KEY, kind TEXT);",
    )
    .unwrap();

    let rows = query(&conn, &format!("SELECT table_schema, table_name FROM {TABLES}"));
    assert_eq!(rows, vec![vec![text("analytics"), text("events")]]);

    let rows = query(
        &conn,
        &format!("SELECT table_schema, table_name, column_name FROM {COLUMNS}"),
    );
    assert_eq!(
        rows,
        vec![
            vec![text("analytics"), text("events"), text("id")],
            vec![text("analytics"), text("events"), text("kind")],
        ]
    );
}

#[test]
fn test_unknown_schema_label_is_empty() {
    let config = InformationSchemaConfig::new().with_default_schema("nowhere");
    let conn = open(&config);
    conn.execute_batch("CREATE TABLE t1 (id INTEGER);").unwrap();

    assert!(query(&conn, &format!("SELECT * FROM {TABLES}")).is_empty());
    assert!(query(&conn, &format!("SELECT * FROM {COLUMNS}")).is_empty());
}

#[test]
fn test_later_cursor_sees_schema_change() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.db");

    let reader = Connection::open(&path).unwrap();
    register(&reader, &InformationSchemaConfig::default()).unwrap();
    reader
        .query_row("PRAGMA journal_mode = WAL", [], |_| Ok(()))
        .unwrap();
    reader
        .execute_batch("CREATE TABLE t1 (id INTEGER PRIMARY KEY, name TEXT);")
        .unwrap();

    let sql = format!("SELECT column_name FROM {COLUMNS} WHERE table_name = 't1'");

    let mut earlier = reader.prepare(&sql).unwrap();
    let mut rows = earlier.query([]).unwrap();
    let first: String = rows.next().unwrap().unwrap().get(0).unwrap();
    assert_eq!(first, "id");

    let writer = Connection::open(&path).unwrap();
    writer
        .execute_batch("ALTER TABLE t1 ADD COLUMN note TEXT;")
        .unwrap();

    let mut remaining = Vec::new();
    while let Some(row) = rows.next().unwrap() {
        remaining.push(row.get::<_, String>(0).unwrap());
    }
    assert_eq!(remaining, vec!["name".to_string()]);
    drop(rows);
    drop(earlier);

    let later = query(&reader, &sql);
    assert_eq!(
        later,
        vec![vec![text("id")], vec![text("name")], vec![text("note")]]
    );
}

#[test]
fn test_broken_view_fails_columns_scan() {
    let conn = open(&InformationSchemaConfig::default());
    conn.execute_batch(
        "CREATE TABLE a (x INTEGER);
         CREATE TABLE good (y INTEGER);
         CREATE VIEW v AS SELECT x FROM a;
         DROP TABLE a;",
    )
    .unwrap();

    let count = |view: &str| -> rusqlite::Result<i64> {
        conn.query_row(&format!("SELECT count(*) FROM {view}"), [], |row| row.get(0))
    };

    // The relation list never opens the view, so it still reports both objects.
    assert_eq!(count(TABLES).unwrap(), 2);

    let err = count(COLUMNS).unwrap_err();
    assert!(
        err.to_string().contains("failed to introspect schema main"),
        "unexpected error: {err}"
    );

    // The failure is per scan; the connection and later scans stay usable.
    conn.execute_batch("DROP VIEW v;").unwrap();
    assert_eq!(count(COLUMNS).unwrap(), 1);
}
