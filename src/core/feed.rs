use crate::db::notifications;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::notification::NotificationRecord;

/// Maximum page size for notification listing.
pub const MAX_LIMIT: i64 = 100;

/// Default page size for notification listing.
pub const DEFAULT_LIMIT: i64 = 50;

/// Read side of the notification feed, always scoped to one user.
pub struct FeedLogic;

impl FeedLogic {
    pub fn list(
        pool: &DbPool,
        user_id: &str,
        unread_only: bool,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AppResult<Vec<NotificationRecord>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let offset = offset.unwrap_or(0);
        if limit <= 0 {
            return Err(AppError::Validation("limit must be greater than 0".into()));
        }
        if offset < 0 {
            return Err(AppError::Validation("offset cannot be negative".into()));
        }

        notifications::list_for_user(
            &pool.conn,
            user_id,
            unread_only,
            limit.min(MAX_LIMIT),
            offset,
        )
    }

    pub fn unread_count(pool: &DbPool, user_id: &str) -> AppResult<i64> {
        notifications::unread_count(&pool.conn, user_id)
    }

    pub fn mark_read(pool: &DbPool, id: i64, user_id: &str) -> AppResult<()> {
        if !notifications::mark_read(&pool.conn, id, user_id)? {
            return Err(AppError::NotFound(format!("Notification {id}")));
        }
        Ok(())
    }

    pub fn mark_all_read(pool: &DbPool, user_id: &str) -> AppResult<u64> {
        notifications::mark_all_read(&pool.conn, user_id)
    }

    pub fn delete(pool: &DbPool, id: i64, user_id: &str) -> AppResult<()> {
        if !notifications::delete(&pool.conn, id, user_id)? {
            return Err(AppError::NotFound(format!("Notification {id}")));
        }
        Ok(())
    }
}
