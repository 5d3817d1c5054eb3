//! Queries over the `hour_entries` table.

use crate::errors::{AppError, AppResult};
use crate::models::hour_entry::{EntryFilter, HourEntry};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, ToSql, params};

const COLUMNS: &str = "id, owner_id, organization, description, location, supervisor_name, \
     supervisor_email, hours, date, verified, verification_code, created_at, updated_at";

pub fn map_row(row: &Row) -> rusqlite::Result<HourEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    Ok(HourEntry {
        id: row.get("id")?,
        owner_id: row.get("owner_id")?,
        organization: row.get("organization")?,
        description: row.get("description")?,
        location: row.get("location")?,
        supervisor_name: row.get("supervisor_name")?,
        supervisor_email: row.get("supervisor_email")?,
        hours: row.get("hours")?,
        date,
        verified: row.get::<_, i32>("verified")? == 1,
        verification_code: row.get("verification_code")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

/// Insert a fully built entry and return its new id.
///
/// Returns the raw `rusqlite` error so the caller can tell a code collision
/// (constraint violation) apart from other failures.
pub fn insert_entry(conn: &Connection, e: &HourEntry) -> rusqlite::Result<i64> {
    conn.execute(
        "INSERT INTO hour_entries (owner_id, organization, description, location, supervisor_name,
                                   supervisor_email, hours, date, verified, verification_code,
                                   created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            e.owner_id,
            e.organization,
            e.description,
            e.location,
            e.supervisor_name,
            e.supervisor_email,
            e.hours,
            e.date_str(),
            if e.verified { 1 } else { 0 },
            e.verification_code,
            e.created_at,
            e.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// True when `err` is the UNIQUE violation on `verification_code`.
pub fn is_code_collision(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, msg) => {
            e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
                && msg
                    .as_deref()
                    .is_none_or(|m| m.contains("verification_code"))
        }
        _ => false,
    }
}

pub fn find_by_id(conn: &Connection, id: i64) -> AppResult<Option<HourEntry>> {
    let sql = format!("SELECT {COLUMNS} FROM hour_entries WHERE id = ?1");
    let entry = conn.query_row(&sql, [id], map_row).optional()?;
    Ok(entry)
}

pub fn find_by_code(conn: &Connection, code: &str) -> AppResult<Option<HourEntry>> {
    let sql = format!("SELECT {COLUMNS} FROM hour_entries WHERE verification_code = ?1");
    let entry = conn.query_row(&sql, [code], map_row).optional()?;
    Ok(entry)
}

/// List an owner's entries, newest service date first.
pub fn list_for_owner(
    conn: &Connection,
    owner_id: &str,
    filter: &EntryFilter,
) -> AppResult<Vec<HourEntry>> {
    let mut sql = format!("SELECT {COLUMNS} FROM hour_entries WHERE owner_id = ?");
    let mut args: Vec<Box<dyn ToSql>> = vec![Box::new(owner_id.to_string())];

    if let Some(v) = filter.verified {
        sql.push_str(" AND verified = ?");
        args.push(Box::new(if v { 1 } else { 0 }));
    }
    if let Some(from) = filter.from {
        sql.push_str(" AND date >= ?");
        args.push(Box::new(from.format("%Y-%m-%d").to_string()));
    }
    if let Some(to) = filter.to {
        sql.push_str(" AND date <= ?");
        args.push(Box::new(to.format("%Y-%m-%d").to_string()));
    }
    sql.push_str(" ORDER BY date DESC, id DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        rusqlite::params_from_iter(args.iter().map(|a| a.as_ref())),
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Persist every mutable column of `e`. `owner_id` and `verification_code`
/// are never written after insert.
pub fn update_entry(conn: &Connection, e: &HourEntry) -> AppResult<()> {
    conn.execute(
        "UPDATE hour_entries
         SET organization = ?1, description = ?2, location = ?3, supervisor_name = ?4,
             supervisor_email = ?5, hours = ?6, date = ?7, verified = ?8, updated_at = ?9
         WHERE id = ?10",
        params![
            e.organization,
            e.description,
            e.location,
            e.supervisor_name,
            e.supervisor_email,
            e.hours,
            e.date_str(),
            if e.verified { 1 } else { 0 },
            e.updated_at,
            e.id,
        ],
    )?;
    Ok(())
}

/// Flip `verified` to 1 only if it is still 0.
///
/// Returns `true` when this call performed the transition.
pub fn mark_verified_if_pending(conn: &Connection, id: i64, now: &str) -> AppResult<bool> {
    let changed = conn.execute(
        "UPDATE hour_entries SET verified = 1, updated_at = ?1 WHERE id = ?2 AND verified = 0",
        params![now, id],
    )?;
    Ok(changed > 0)
}

pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<bool> {
    let changed = conn.execute("DELETE FROM hour_entries WHERE id = ?1", [id])?;
    Ok(changed > 0)
}

/// Sum of `hours` over the owner's verified entries, read fresh.
pub fn approved_total(conn: &Connection, owner_id: &str) -> AppResult<f64> {
    let total: f64 = conn.query_row(
        "SELECT COALESCE(SUM(hours), 0.0) FROM hour_entries WHERE owner_id = ?1 AND verified = 1",
        [owner_id],
        |row| row.get(0),
    )?;
    Ok(total)
}

/// Number of entries owned by `owner_id`, split as (verified, pending).
pub fn count_for_owner(conn: &Connection, owner_id: &str) -> AppResult<(i64, i64)> {
    let counts = conn.query_row(
        "SELECT COALESCE(SUM(verified), 0), COALESCE(SUM(1 - verified), 0)
         FROM hour_entries WHERE owner_id = ?1",
        [owner_id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;
    Ok(counts)
}
