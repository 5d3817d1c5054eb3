//! User profile rows (`users` table). Only the fields recognition needs.

use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: Option<String>,
    pub age: Option<u32>,
    pub updated_at: String,
}

pub fn find(conn: &Connection, user_id: &str) -> AppResult<Option<UserProfile>> {
    let profile = conn
        .query_row(
            "SELECT user_id, display_name, age, updated_at FROM users WHERE user_id = ?1",
            [user_id],
            |row| {
                Ok(UserProfile {
                    user_id: row.get(0)?,
                    display_name: row.get(1)?,
                    age: row.get(2)?,
                    updated_at: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(profile)
}

/// Age of the user, `None` when unknown or no profile exists.
pub fn age_of(conn: &Connection, user_id: &str) -> AppResult<Option<u32>> {
    Ok(find(conn, user_id)?.and_then(|p| p.age))
}

/// Insert or replace the profile for `user_id`.
pub fn upsert(
    conn: &Connection,
    user_id: &str,
    display_name: Option<&str>,
    age: Option<u32>,
) -> AppResult<UserProfile> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO users (user_id, display_name, age, updated_at)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(user_id) DO UPDATE SET
             display_name = excluded.display_name,
             age = excluded.age,
             updated_at = excluded.updated_at",
        params![user_id, display_name, age, now],
    )?;

    Ok(UserProfile {
        user_id: user_id.to_string(),
        display_name: display_name.map(str::to_string),
        age,
        updated_at: now,
    })
}
