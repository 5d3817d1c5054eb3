use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::recognition::recognition_for_user;
use crate::db::entries::count_for_owner;
use crate::db::users;
use crate::errors::AppResult;
use crate::ui::messages::{field, header, info};
use crate::utils::colors::{color_for_tier, paint};
use crate::utils::formatting::{fmt_hours, progress_bar};

const BAR_WIDTH: usize = 30;

/// Print the PVSA recognition snapshot of the acting user.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let owner = cfg.acting_user()?;
    let pool = open_pool(cfg)?;

    let state = recognition_for_user(&pool.conn, owner, &cfg.recognition)?;
    let (verified, pending) = count_for_owner(&pool.conn, owner)?;
    let age = users::age_of(&pool.conn, owner)?;

    header(format!("Recognition for {}", owner));
    field("Approved hours", fmt_hours(state.approved_hours_total));
    field("Entries", format!("{} verified, {} pending", verified, pending));
    field(
        "Age band",
        match age {
            Some(a) if cfg.recognition.youth_band.contains(a) => format!("youth (age {})", a),
            Some(a) => format!("adult (age {})", a),
            None => "default (age unknown)".to_string(),
        },
    );
    field(
        "Thresholds",
        format!(
            "bronze {} / silver {} / gold {}",
            fmt_hours(state.thresholds.bronze),
            fmt_hours(state.thresholds.silver),
            fmt_hours(state.thresholds.gold)
        ),
    );
    field(
        "Tier",
        paint(color_for_tier(state.tier), state.tier.as_str()),
    );

    match state.next_tier {
        Some(next) => {
            field(
                "Progress",
                format!(
                    "{} {:.0}% to {}",
                    progress_bar(state.progress_percent, BAR_WIDTH),
                    state.progress_percent,
                    next
                ),
            );
            field("Hours to next", fmt_hours(state.hours_to_next_tier));
        }
        None => {
            field("Progress", progress_bar(100.0, BAR_WIDTH));
            info("Top tier reached.");
        }
    }

    Ok(())
}
