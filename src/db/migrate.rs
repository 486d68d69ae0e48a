use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ordered schema migrations: (version, description, sql).
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_kv_store",
        "Created per-user kv_store table",
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            user_id     TEXT NOT NULL,
            key         TEXT NOT NULL,
            value       TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            PRIMARY KEY (user_id, key)
        );
        "#,
    ),
    (
        "20250312_0002_index_kv_user",
        "Indexed kv_store by user",
        "CREATE INDEX IF NOT EXISTS idx_kv_store_user ON kv_store(user_id);",
    ),
];

/// Ensure that the `log` table exists; it also records applied migrations.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions already applied to this database, oldest first.
pub fn applied_versions(conn: &Connection) -> AppResult<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Each migration runs in its own transaction together with its log row.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for (version, description, sql) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        let batch = format!(
            "BEGIN;
             {sql}
             INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', '{version}', '{description}');
             COMMIT;"
        );

        if let Err(e) = conn.execute_batch(&batch) {
            let _ = conn.execute_batch("ROLLBACK;");
            return Err(AppError::Migration(format!("{version}: {e}")));
        }

        tracing::info!(version, "migration applied");
    }

    Ok(())
}
