use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::models::hour_entry::HourEntryPatch;
use crate::ui::messages::success;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        organization,
        description,
        hours,
        date,
        location,
        supervisor_name,
        supervisor_email,
        verified,
    } = cmd
    {
        let caller = cfg.acting_user()?;
        let patch = HourEntryPatch {
            organization: organization.clone(),
            description: description.clone(),
            hours: *hours,
            date: parse_optional_date(date.as_ref())?,
            location: location.clone(),
            supervisor_name: supervisor_name.clone(),
            supervisor_email: supervisor_email.clone(),
            verified: *verified,
        };

        let mut pool = open_pool(cfg)?;
        let entry =
            VerificationLogic::update_entry(&mut pool, *id, caller, patch, &cfg.recognition)?;

        success(format!(
            "Entry #{} updated ({})",
            entry.id,
            entry.status_label()
        ));
    }
    Ok(())
}
