use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::fmt_hours;

/// Code-based verification. No acting user is required.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Verify { code } = cmd {
        let mut pool = open_pool(cfg)?;
        let entry = VerificationLogic::verify_by_code(&mut pool, code, &cfg.recognition)?;

        success(format!(
            "Verified {}h with {} on {} for {}",
            fmt_hours(entry.hours),
            entry.organization,
            entry.date_str(),
            entry.owner_id
        ));
    }
    Ok(())
}
