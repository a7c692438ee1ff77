// ==========================================
// Pensum Planner - SQLite Connection Setup
// ==========================================
// Single place for Connection::open so every module sees
// the same PRAGMA behavior (foreign keys, busy timeout)
// and the same schema.
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout in milliseconds.
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply the unified PRAGMA set.
///
/// foreign_keys and busy_timeout are per-connection settings and
/// must be applied to every connection, not once per database.
pub fn configure_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a connection with the unified configuration applied.
pub fn open_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_connection(&conn)?;
    Ok(conn)
}

/// Create the schema if it does not exist and seed the global
/// config scope plus the default folders. Idempotent.
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS config_scope (
            scope_id   TEXT PRIMARY KEY,
            scope_type TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        INSERT OR IGNORE INTO config_scope (scope_id, scope_type)
        VALUES ('global', 'GLOBAL');

        CREATE TABLE IF NOT EXISTS config_kv (
            scope_id   TEXT NOT NULL REFERENCES config_scope(scope_id) ON DELETE CASCADE,
            key        TEXT NOT NULL,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT (datetime('now')),
            PRIMARY KEY (scope_id, key)
        );

        CREATE TABLE IF NOT EXISTS folders (
            folder_id  TEXT PRIMARY KEY,
            name       TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE TABLE IF NOT EXISTS agreements (
            agreement_id             TEXT PRIMARY KEY,
            folder_id                TEXT NOT NULL REFERENCES folders(folder_id) ON DELETE CASCADE,
            last_modified            TEXT NOT NULL,
            profile_json             TEXT NOT NULL,
            cached_pensum_percentage REAL NOT NULL,
            cached_total_hours       REAL NOT NULL,
            cached_total_lessons     REAL NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_agreements_folder
            ON agreements(folder_id);
        "#,
    )?;

    // Seed the default folders once.
    for folder in crate::config::defaults::folders() {
        conn.execute(
            "INSERT OR IGNORE INTO folders (folder_id, name) VALUES (?1, ?2)",
            rusqlite::params![folder.id, folder.name],
        )?;
    }

    Ok(())
}
