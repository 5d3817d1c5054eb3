//! PVSA tier and milestone computation.
//!
//! All thresholds come from a [`RecognitionConfig`]; nothing here hard-codes
//! an hour value.

use crate::db::{entries, users};
use crate::errors::AppResult;
use crate::models::recognition::{RecognitionConfig, RecognitionState, Tier, TierThresholds};
use rusqlite::Connection;

/// Sum of the owner's approved (verified) hours, read fresh from the store.
pub fn compute_total(conn: &Connection, owner_id: &str) -> AppResult<f64> {
    entries::approved_total(conn, owner_id)
}

/// Youth band when the age is known and inside it, default band otherwise.
pub fn thresholds_for_age(age: Option<u32>, cfg: &RecognitionConfig) -> TierThresholds {
    match age {
        Some(a) if cfg.youth_band.contains(a) => cfg.youth_band.thresholds,
        _ => cfg.default_thresholds,
    }
}

fn tier_for(total: f64, th: &TierThresholds) -> Tier {
    if total >= th.gold {
        Tier::Gold
    } else if total >= th.silver {
        Tier::Silver
    } else if total >= th.bronze {
        Tier::Bronze
    } else {
        Tier::None
    }
}

pub fn compute_tier(total: f64, age: Option<u32>, cfg: &RecognitionConfig) -> RecognitionState {
    let thresholds = thresholds_for_age(age, cfg);
    let tier = tier_for(total, &thresholds);
    let next_tier = tier.next();

    let (progress_percent, hours_to_next_tier) = match next_tier {
        None => (100.0, 0.0),
        Some(next) => {
            let floor = thresholds.floor(tier);
            let ceil = thresholds.floor(next);
            let span = ceil - floor;
            let progress = if span > 0.0 {
                ((total - floor) / span * 100.0).clamp(0.0, 100.0)
            } else {
                100.0
            };
            (progress, (ceil - total).max(0.0))
        }
    };

    RecognitionState {
        approved_hours_total: total,
        tier,
        next_tier,
        thresholds,
        progress_percent,
        hours_to_next_tier,
    }
}

/// Highest milestone `m` with `old < m <= new`, if any.
pub fn check_milestone(old_total: f64, new_total: f64, cfg: &RecognitionConfig) -> Option<f64> {
    cfg.milestones
        .iter()
        .copied()
        .filter(|m| new_total >= *m && old_total < *m)
        .max_by(f64::total_cmp)
}

/// Recognition snapshot for `user_id`: profile age + fresh approved total.
pub fn recognition_for_user(
    conn: &Connection,
    user_id: &str,
    cfg: &RecognitionConfig,
) -> AppResult<RecognitionState> {
    let total = compute_total(conn, user_id)?;
    let age = users::age_of(conn, user_id)?;
    Ok(compute_tier(total, age, cfg))
}
