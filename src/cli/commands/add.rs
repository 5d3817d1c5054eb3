use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::models::hour_entry::NewHourEntry;
use crate::ui::messages::{field, info, success};
use crate::utils::date::parse_date_arg;
use crate::utils::formatting::fmt_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        organization,
        description,
        hours,
        location,
        supervisor_name,
        supervisor_email,
    } = cmd
    {
        let owner = cfg.acting_user()?;
        let new = NewHourEntry {
            organization: organization.clone(),
            description: description.clone(),
            hours: *hours,
            date: Some(parse_date_arg(date)?),
            location: location.clone(),
            supervisor_name: supervisor_name.clone(),
            supervisor_email: supervisor_email.clone(),
        };

        let mut pool = open_pool(cfg)?;
        let entry = VerificationLogic::create_entry(&mut pool, owner, new)?;

        success(format!(
            "Logged {}h with {} on {} (entry #{})",
            fmt_hours(entry.hours),
            entry.organization,
            entry.date_str(),
            entry.id
        ));
        field("Verification code", &entry.verification_code);
        info("Share the code with your supervisor: `rvolunteer verify <CODE>`");
    }
    Ok(())
}
