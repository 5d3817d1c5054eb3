//! Repository for the `notifications` table.

use crate::errors::{AppError, AppResult};
use crate::models::notification::{NewNotification, NotificationCategory, NotificationRecord};
use chrono::{Local, SecondsFormat};
use rusqlite::{Connection, OptionalExtension, Row, params};

/// Column list for `notifications` queries.
const COLUMNS: &str =
    "id, user_id, title, message, category, action_url, metadata, is_read, read_at, created_at";

fn map_row(row: &Row) -> rusqlite::Result<NotificationRecord> {
    let category_str: String = row.get("category")?;
    let category = NotificationCategory::from_db_str(&category_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::Other(format!(
                "Invalid notification category: {}",
                category_str
            ))),
        )
    })?;

    let raw_meta: String = row.get("metadata")?;
    let metadata = serde_json::from_str(&raw_meta).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(NotificationRecord {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        message: row.get("message")?,
        category,
        action_url: row.get("action_url")?,
        metadata,
        is_read: row.get::<_, i32>("is_read")? == 1,
        read_at: row.get("read_at")?,
        created_at: row.get("created_at")?,
    })
}

/// Create a notification for a user, returning the stored record.
pub fn insert(conn: &Connection, n: &NewNotification) -> AppResult<NotificationRecord> {
    // fixed width keeps `ORDER BY created_at` chronological
    let now = Local::now().to_rfc3339_opts(SecondsFormat::Micros, false);
    let metadata = serde_json::to_string(&n.metadata)?;

    conn.execute(
        "INSERT INTO notifications (user_id, title, message, category, action_url, metadata, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            n.user_id,
            n.title,
            n.message,
            n.category.to_db_str(),
            n.action_url,
            metadata,
            now,
        ],
    )?;

    let id = conn.last_insert_rowid();
    find(conn, id, &n.user_id)?
        .ok_or_else(|| AppError::Other(format!("notification {id} vanished after insert")))
}

/// Fetch one notification, scoped to its owner.
pub fn find(conn: &Connection, id: i64, user_id: &str) -> AppResult<Option<NotificationRecord>> {
    let sql = format!("SELECT {COLUMNS} FROM notifications WHERE id = ?1 AND user_id = ?2");
    Ok(conn.query_row(&sql, params![id, user_id], map_row).optional()?)
}

/// List notifications for a user, newest first.
///
/// When `unread_only` is `true`, only notifications with `is_read = 0`
/// are returned.
pub fn list_for_user(
    conn: &Connection,
    user_id: &str,
    unread_only: bool,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<NotificationRecord>> {
    let filter = if unread_only { "AND is_read = 0" } else { "" };
    let sql = format!(
        "SELECT {COLUMNS} FROM notifications
         WHERE user_id = ?1 {filter}
         ORDER BY created_at DESC, id DESC
         LIMIT ?2 OFFSET ?3"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![user_id, limit, offset], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Get the number of unread notifications for a user.
pub fn unread_count(conn: &Connection, user_id: &str) -> AppResult<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM notifications WHERE user_id = ?1 AND is_read = 0",
        [user_id],
        |row| row.get(0),
    )?;
    Ok(count)
}

/// Mark a single notification as read.
///
/// Returns `true` if the notification exists for the given user. An already
/// read notification keeps its original `read_at`.
pub fn mark_read(conn: &Connection, id: i64, user_id: &str) -> AppResult<bool> {
    if find(conn, id, user_id)?.is_none() {
        return Ok(false);
    }
    conn.execute(
        "UPDATE notifications SET is_read = 1, read_at = ?1
         WHERE id = ?2 AND user_id = ?3 AND is_read = 0",
        params![Local::now().to_rfc3339(), id, user_id],
    )?;
    Ok(true)
}

/// Mark all unread notifications as read for a user.
///
/// Returns the number of notifications that were marked read.
pub fn mark_all_read(conn: &Connection, user_id: &str) -> AppResult<u64> {
    let changed = conn.execute(
        "UPDATE notifications SET is_read = 1, read_at = ?1
         WHERE user_id = ?2 AND is_read = 0",
        params![Local::now().to_rfc3339(), user_id],
    )?;
    Ok(changed as u64)
}

/// Delete a notification owned by `user_id`. Returns `false` if nothing matched.
pub fn delete(conn: &Connection, id: i64, user_id: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "DELETE FROM notifications WHERE id = ?1 AND user_id = ?2",
        params![id, user_id],
    )?;
    Ok(changed > 0)
}
