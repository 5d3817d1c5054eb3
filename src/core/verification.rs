use crate::core::code::{MAX_CODE_ATTEMPTS, generate_code, normalize_code};
use crate::core::notify;
use crate::core::recognition::{check_milestone, compute_tier};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::{entries, users};
use crate::errors::{AppError, AppResult};
use crate::models::hour_entry::{EntryFilter, HourEntry, HourEntryPatch, NewHourEntry};
use crate::models::recognition::RecognitionConfig;
use crate::utils::formatting::fmt_hours;
use chrono::Local;
use regex::Regex;
use rusqlite::{Connection, TransactionBehavior};
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is a valid regex")
});

/// Change of the `verified` flag caused by one write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Approved,
    Rejected,
    Unchanged,
}

impl Transition {
    fn between(before: bool, after: bool) -> Self {
        match (before, after) {
            (false, true) => Transition::Approved,
            (true, false) => Transition::Rejected,
            _ => Transition::Unchanged,
        }
    }
}

fn required_text(field: &str, value: &str) -> AppResult<String> {
    let v = value.trim();
    if v.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(v.to_string())
}

fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn check_hours(hours: f64) -> AppResult<f64> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(AppError::Validation(
            "hours must be greater than 0".to_string(),
        ));
    }
    Ok(hours)
}

fn check_email(email: Option<String>) -> AppResult<Option<String>> {
    match email {
        Some(e) if !EMAIL_RE.is_match(&e) => Err(AppError::Validation(format!(
            "supervisor email '{e}' is not a valid address"
        ))),
        other => Ok(other),
    }
}

fn require_caller(caller_id: &str) -> AppResult<&str> {
    let c = caller_id.trim();
    if c.is_empty() {
        return Err(AppError::MissingUser);
    }
    Ok(c)
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Hour entry {id}"))
}

/// Owner-scoped access check. Code-based verification never goes through here.
fn ensure_owner(entry: &HourEntry, caller_id: &str) -> AppResult<()> {
    if entry.owner_id != caller_id {
        return Err(AppError::Forbidden(format!(
            "Hour entry {} belongs to another user",
            entry.id
        )));
    }
    Ok(())
}

fn apply_patch(entry: &mut HourEntry, patch: HourEntryPatch) -> AppResult<()> {
    if let Some(org) = patch.organization {
        entry.organization = required_text("organization", &org)?;
    }
    if let Some(desc) = patch.description {
        entry.description = required_text("description", &desc)?;
    }
    if let Some(h) = patch.hours {
        entry.hours = check_hours(h)?;
    }
    if let Some(d) = patch.date {
        entry.date = d;
    }
    if let Some(loc) = patch.location {
        entry.location = optional_text(Some(&loc));
    }
    if let Some(name) = patch.supervisor_name {
        entry.supervisor_name = optional_text(Some(&name));
    }
    if let Some(email) = patch.supervisor_email {
        entry.supervisor_email = check_email(optional_text(Some(&email)))?;
    }
    if let Some(v) = patch.verified {
        entry.verified = v;
    }
    Ok(())
}

/// Side effects of an unverified → verified transition, run after commit.
fn after_approval(
    conn: &Connection,
    entry: &HourEntry,
    total_before: f64,
    total_after: f64,
    cfg: &RecognitionConfig,
) {
    notify::emit_best_effort(conn, &notify::hours_approved(entry));

    if let Some(milestone) = check_milestone(total_before, total_after, cfg) {
        let age = users::age_of(conn, &entry.owner_id).unwrap_or_else(|e| {
            tracing::warn!(owner = %entry.owner_id, error = %e, "could not read profile age");
            None
        });
        let state = compute_tier(total_after, age, cfg);
        tracing::info!(
            owner = %entry.owner_id,
            milestone,
            total = total_after,
            "milestone crossed"
        );
        notify::emit_best_effort(
            conn,
            &notify::milestone_reached(&entry.owner_id, milestone, &state),
        );
    }
}

/// Volunteer-hour lifecycle: create, update, verify, delete.
pub struct VerificationLogic;

impl VerificationLogic {
    /// Log new hours for `owner_id` with a freshly generated verification code.
    pub fn create_entry(
        pool: &mut DbPool,
        owner_id: &str,
        new: NewHourEntry,
    ) -> AppResult<HourEntry> {
        Self::create_entry_with(pool, owner_id, new, generate_code)
    }

    /// Same as [`create_entry`](Self::create_entry) with a caller-supplied
    /// code generator. A generated code that collides with an existing one is
    /// replaced and the insert retried, up to [`MAX_CODE_ATTEMPTS`] times.
    pub fn create_entry_with<F>(
        pool: &mut DbPool,
        owner_id: &str,
        new: NewHourEntry,
        mut next_code: F,
    ) -> AppResult<HourEntry>
    where
        F: FnMut() -> String,
    {
        let owner = require_caller(owner_id)?;
        let organization = required_text("organization", &new.organization)?;
        let description = required_text("description", &new.description)?;
        let hours = check_hours(new.hours)?;
        let date = new
            .date
            .ok_or_else(|| AppError::Validation("date is required".to_string()))?;
        let supervisor_email = check_email(optional_text(new.supervisor_email.as_deref()))?;

        let now = Local::now().to_rfc3339();
        let mut entry = HourEntry {
            id: 0,
            owner_id: owner.to_string(),
            organization,
            description,
            location: optional_text(new.location.as_deref()),
            supervisor_name: optional_text(new.supervisor_name.as_deref()),
            supervisor_email,
            hours,
            date,
            verified: false,
            verification_code: String::new(),
            created_at: now.clone(),
            updated_at: now,
        };

        let mut attempt = 0;
        loop {
            attempt += 1;
            entry.verification_code = next_code();

            match entries::insert_entry(&pool.conn, &entry) {
                Ok(id) => {
                    entry.id = id;
                    break;
                }
                Err(e) if entries::is_code_collision(&e) => {
                    tracing::debug!(attempt, "verification code collision, regenerating");
                    if attempt >= MAX_CODE_ATTEMPTS {
                        return Err(AppError::CodeExhausted(MAX_CODE_ATTEMPTS));
                    }
                }
                Err(e) => return Err(e.into()),
            }
        }

        notify::emit_best_effort(&pool.conn, &notify::hours_logged(&entry));
        ttlog_quiet(
            &pool.conn,
            "add",
            &format!("entry {}", entry.id),
            &format!(
                "{} logged {}h with {} on {}",
                entry.owner_id,
                fmt_hours(entry.hours),
                entry.organization,
                entry.date_str()
            ),
        );

        Ok(entry)
    }

    /// Owner-scoped partial update. A change of `verified` triggers the
    /// approval or rejection side effects.
    pub fn update_entry(
        pool: &mut DbPool,
        entry_id: i64,
        caller_id: &str,
        patch: HourEntryPatch,
        cfg: &RecognitionConfig,
    ) -> AppResult<HourEntry> {
        let caller = require_caller(caller_id)?;

        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let current = entries::find_by_id(&tx, entry_id)?.ok_or_else(|| not_found(entry_id))?;
        ensure_owner(&current, caller)?;

        if patch.is_empty() {
            return Err(AppError::Validation("nothing to update".to_string()));
        }

        let mut updated = current.clone();
        apply_patch(&mut updated, patch)?;
        updated.updated_at = Local::now().to_rfc3339();

        let total_before = entries::approved_total(&tx, &current.owner_id)?;
        entries::update_entry(&tx, &updated)?;
        let total_after = entries::approved_total(&tx, &current.owner_id)?;
        tx.commit()?;

        let conn = &pool.conn;
        let transition = Transition::between(current.verified, updated.verified);
        match transition {
            Transition::Approved => {
                after_approval(conn, &updated, total_before, total_after, cfg);
            }
            Transition::Rejected => {
                notify::emit_best_effort(conn, &notify::hours_rejected(&updated));
            }
            Transition::Unchanged => {}
        }

        ttlog_quiet(
            conn,
            "edit",
            &format!("entry {}", updated.id),
            &format!("{} updated entry ({:?})", caller, transition),
        );

        Ok(updated)
    }

    /// Ownerless verification: anyone holding the code may confirm the entry.
    ///
    /// Verifying an already verified entry succeeds with no side effects.
    pub fn verify_by_code(
        pool: &mut DbPool,
        code: &str,
        cfg: &RecognitionConfig,
    ) -> AppResult<HourEntry> {
        let code = normalize_code(code);
        if code.is_empty() {
            return Err(AppError::Validation(
                "verification code is required".to_string(),
            ));
        }

        let now = Local::now().to_rfc3339();
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let entry = entries::find_by_code(&tx, &code)?
            .ok_or_else(|| AppError::NotFound("Verification code".to_string()))?;

        let total_before = entries::approved_total(&tx, &entry.owner_id)?;
        let transitioned = entries::mark_verified_if_pending(&tx, entry.id, &now)?;
        let total_after = entries::approved_total(&tx, &entry.owner_id)?;
        tx.commit()?;

        if !transitioned {
            tracing::debug!(entry_id = entry.id, "entry already verified");
            return Ok(entry);
        }

        let verified = HourEntry {
            verified: true,
            updated_at: now,
            ..entry
        };

        after_approval(&pool.conn, &verified, total_before, total_after, cfg);
        ttlog_quiet(
            &pool.conn,
            "verify",
            &format!("entry {}", verified.id),
            &format!(
                "{}h for {} verified by code",
                fmt_hours(verified.hours),
                verified.owner_id
            ),
        );

        Ok(verified)
    }

    pub fn get_entry(pool: &DbPool, entry_id: i64, caller_id: &str) -> AppResult<HourEntry> {
        let caller = require_caller(caller_id)?;
        let entry = entries::find_by_id(&pool.conn, entry_id)?.ok_or_else(|| not_found(entry_id))?;
        ensure_owner(&entry, caller)?;
        Ok(entry)
    }

    pub fn list_entries(
        pool: &DbPool,
        caller_id: &str,
        filter: &EntryFilter,
    ) -> AppResult<Vec<HourEntry>> {
        let caller = require_caller(caller_id)?;
        if let (Some(from), Some(to)) = (filter.from, filter.to) {
            if from > to {
                return Err(AppError::Validation(format!(
                    "invalid range: {from} is after {to}"
                )));
            }
        }
        entries::list_for_owner(&pool.conn, caller, filter)
    }

    /// Delete an entry. Notifications it triggered are kept.
    pub fn delete_entry(pool: &mut DbPool, entry_id: i64, caller_id: &str) -> AppResult<()> {
        let caller = require_caller(caller_id)?;
        let entry = entries::find_by_id(&pool.conn, entry_id)?.ok_or_else(|| not_found(entry_id))?;
        ensure_owner(&entry, caller)?;

        if !entries::delete_entry(&pool.conn, entry_id)? {
            return Err(not_found(entry_id));
        }

        ttlog_quiet(
            &pool.conn,
            "del",
            &format!("entry {}", entry_id),
            &format!(
                "{} deleted {}h with {} on {}",
                caller,
                fmt_hours(entry.hours),
                entry.organization,
                entry.date_str()
            ),
        );
        Ok(())
    }
}
