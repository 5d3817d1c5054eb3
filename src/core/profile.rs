use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::users::{self, UserProfile};
use crate::errors::{AppError, AppResult};

const MAX_AGE: u32 = 120;

/// Requested profile changes. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub age: Option<u32>,
    pub clear_age: bool,
}

pub struct ProfileLogic;

impl ProfileLogic {
    pub fn show(pool: &DbPool, user_id: &str) -> AppResult<Option<UserProfile>> {
        users::find(&pool.conn, user_id)
    }

    pub fn update(pool: &mut DbPool, user_id: &str, upd: ProfileUpdate) -> AppResult<UserProfile> {
        if let Some(age) = upd.age {
            if age > MAX_AGE {
                return Err(AppError::Validation(format!(
                    "age must be between 0 and {MAX_AGE}"
                )));
            }
        }

        let existing = users::find(&pool.conn, user_id)?;

        let display_name = match upd.display_name {
            Some(n) if n.trim().is_empty() => None,
            Some(n) => Some(n.trim().to_string()),
            None => existing.as_ref().and_then(|p| p.display_name.clone()),
        };
        let age = if upd.clear_age {
            None
        } else {
            upd.age.or(existing.as_ref().and_then(|p| p.age))
        };

        let profile = users::upsert(&pool.conn, user_id, display_name.as_deref(), age)?;

        ttlog_quiet(
            &pool.conn,
            "profile",
            user_id,
            &format!(
                "age={}",
                age.map(|a| a.to_string()).unwrap_or_else(|| "unknown".into())
            ),
        );
        Ok(profile)
    }
}
