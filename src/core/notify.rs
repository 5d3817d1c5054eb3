//! Notification emitter for the hour-entry lifecycle.
//!
//! Emission is best-effort: the workflow calls [`emit_best_effort`], which
//! logs and swallows any failure so the triggering write still succeeds.

use crate::db::notifications;
use crate::errors::AppResult;
use crate::models::hour_entry::HourEntry;
use crate::models::notification::{NewNotification, NotificationCategory, NotificationRecord};
use crate::models::recognition::RecognitionState;
use crate::utils::formatting::fmt_hours;
use rusqlite::Connection;
use serde_json::json;

pub const TITLE_LOGGED: &str = "Hours Logged";
pub const TITLE_APPROVED: &str = "Hours Approved";
pub const TITLE_REJECTED: &str = "Hours Rejected";

/// Insert a notification record.
pub fn emit(conn: &Connection, n: &NewNotification) -> AppResult<NotificationRecord> {
    notifications::insert(conn, n)
}

/// Insert a notification, logging instead of failing.
pub fn emit_best_effort(conn: &Connection, n: &NewNotification) -> Option<NotificationRecord> {
    match emit(conn, n) {
        Ok(rec) => Some(rec),
        Err(e) => {
            tracing::warn!(
                user_id = %n.user_id,
                title = %n.title,
                error = %e,
                "notification delivery failed"
            );
            None
        }
    }
}

fn entry_url(entry: &HourEntry) -> Option<String> {
    Some(format!("/volunteer/{}", entry.id))
}

fn entry_metadata(entry: &HourEntry) -> serde_json::Value {
    json!({
        "entry_id": entry.id,
        "hours": entry.hours,
        "organization": entry.organization,
        "date": entry.date_str(),
    })
}

pub fn hours_logged(entry: &HourEntry) -> NewNotification {
    NewNotification {
        user_id: entry.owner_id.clone(),
        title: TITLE_LOGGED.to_string(),
        message: format!(
            "You logged {} hours with {}. Share code {} with your supervisor to get them verified.",
            fmt_hours(entry.hours),
            entry.organization,
            entry.verification_code
        ),
        category: NotificationCategory::Volunteer,
        action_url: entry_url(entry),
        metadata: entry_metadata(entry),
    }
}

pub fn hours_approved(entry: &HourEntry) -> NewNotification {
    NewNotification {
        user_id: entry.owner_id.clone(),
        title: TITLE_APPROVED.to_string(),
        message: format!(
            "Your {} hours with {} on {} have been verified.",
            fmt_hours(entry.hours),
            entry.organization,
            entry.date_str()
        ),
        category: NotificationCategory::Volunteer,
        action_url: entry_url(entry),
        metadata: entry_metadata(entry),
    }
}

pub fn hours_rejected(entry: &HourEntry) -> NewNotification {
    NewNotification {
        user_id: entry.owner_id.clone(),
        title: TITLE_REJECTED.to_string(),
        message: format!(
            "Your {} hours with {} on {} are no longer verified.",
            fmt_hours(entry.hours),
            entry.organization,
            entry.date_str()
        ),
        category: NotificationCategory::Volunteer,
        action_url: entry_url(entry),
        metadata: entry_metadata(entry),
    }
}

pub fn milestone_reached(
    user_id: &str,
    milestone: f64,
    state: &RecognitionState,
) -> NewNotification {
    NewNotification {
        user_id: user_id.to_string(),
        title: format!("Milestone Reached: {} Hours", fmt_hours(milestone)),
        message: format!(
            "You now have {} approved volunteer hours. Current PVSA tier: {}.",
            fmt_hours(state.approved_hours_total),
            state.tier
        ),
        category: NotificationCategory::Achievement,
        action_url: Some("/volunteer/recognition".to_string()),
        metadata: json!({
            "milestone": milestone,
            "total_hours": state.approved_hours_total,
            "tier": state.tier.as_str(),
        }),
    }
}
