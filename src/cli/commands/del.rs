use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::formatting::fmt_hours;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let caller = cfg.acting_user()?;
        let mut pool = open_pool(cfg)?;

        // Ownership is checked before prompting
        let entry = VerificationLogic::get_entry(&pool, *id, caller)?;

        if !*yes {
            let prompt = format!(
                "Delete entry #{} ({}h with {} on {})? This action is irreversible.",
                entry.id,
                fmt_hours(entry.hours),
                entry.organization,
                entry.date_str()
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        VerificationLogic::delete_entry(&mut pool, *id, caller)?;
        success(format!("Entry #{} has been deleted.", id));
    }
    Ok(())
}
