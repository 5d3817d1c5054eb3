use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

/// Ensure that the `log` table exists with the modern schema.
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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `hour_entries` table. The UNIQUE index on `verification_code`
/// is what guarantees code uniqueness across concurrent writers.
fn create_hour_entries_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS hour_entries (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            owner_id          TEXT NOT NULL,
            organization      TEXT NOT NULL,
            description       TEXT NOT NULL,
            location          TEXT,
            supervisor_name   TEXT,
            supervisor_email  TEXT,
            hours             REAL NOT NULL CHECK(hours > 0),
            date              TEXT NOT NULL,
            verified          INTEGER NOT NULL DEFAULT 0 CHECK(verified IN (0, 1)),
            verification_code TEXT NOT NULL,
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_hour_entries_code ON hour_entries(verification_code);
        CREATE INDEX IF NOT EXISTS idx_hour_entries_owner ON hour_entries(owner_id, verified);
        CREATE INDEX IF NOT EXISTS idx_hour_entries_owner_date ON hour_entries(owner_id, date);
        "#,
    )?;
    Ok(())
}

/// Create the `notifications` table. No foreign key to `hour_entries`:
/// a notification outlives the entry that triggered it.
fn create_notifications_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            title       TEXT NOT NULL,
            message     TEXT NOT NULL,
            category    TEXT NOT NULL CHECK(category IN ('volunteer','achievement','system')),
            action_url  TEXT,
            metadata    TEXT NOT NULL DEFAULT '{}',
            is_read     INTEGER NOT NULL DEFAULT 0,
            read_at     TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_notifications_user_read ON notifications(user_id, is_read);
        "#,
    )?;
    Ok(())
}

/// Versioned migrations applied on top of the base schema, in order.
/// Each one is recorded in `log` as `migration_applied` and runs once.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20260301_0001_add_users_table",
        "Added users table (profile + age band)",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id      TEXT PRIMARY KEY,
            display_name TEXT,
            age          INTEGER CHECK(age IS NULL OR age >= 0),
            updated_at   TEXT NOT NULL
        );
        "#,
    ),
    (
        "20260412_0002_index_notifications_created",
        "Indexed notifications by creation time",
        r#"
        CREATE INDEX IF NOT EXISTS idx_notifications_user_created
            ON notifications(user_id, created_at);
        "#,
    ),
];

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply_migration(conn: &Connection, version: &str, message: &str, sql: &str) -> AppResult<()> {
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(sql)
        .map_err(|e| AppError::Migration(format!("{version}: {e}")))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;

    tracing::info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Base schema
    if !table_exists(conn, "hour_entries")? {
        create_hour_entries_table(conn)?;
        tracing::info!("created hour_entries table");
    }
    if !table_exists(conn, "notifications")? {
        create_notifications_table(conn)?;
        tracing::info!("created notifications table");
    }

    // 3) Versioned migrations
    for (version, message, sql) in MIGRATIONS {
        apply_migration(conn, version, message, sql)?;
    }

    Ok(())
}

/// Names of the applied versioned migrations, oldest first.
pub fn applied_migrations(conn: &Connection) -> AppResult<Vec<String>> {
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
