use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::ui::messages::{field, header};
use crate::utils::colors::{color_for_status, paint};
use crate::utils::formatting::fmt_hours;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let owner = cfg.acting_user()?;
        let pool = open_pool(cfg)?;
        let e = VerificationLogic::get_entry(&pool, *id, owner)?;

        header(format!("Hour entry #{}", e.id));
        field("Date", e.date_str());
        field("Hours", fmt_hours(e.hours));
        field("Organization", &e.organization);
        field("Description", &e.description);
        field("Location", e.location.as_deref().unwrap_or("-"));
        field("Supervisor", e.supervisor_name.as_deref().unwrap_or("-"));
        field(
            "Supervisor email",
            e.supervisor_email.as_deref().unwrap_or("-"),
        );
        field(
            "Status",
            paint(color_for_status(e.verified), e.status_label()),
        );
        field("Verification code", &e.verification_code);
        field("Created", &e.created_at);
        field("Updated", &e.updated_at);
    }
    Ok(())
}
