use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::verification::VerificationLogic;
use crate::errors::AppResult;
use crate::models::hour_entry::{EntryFilter, HourEntry};
use crate::ui::messages::info;
use crate::utils::date::parse_optional_date;
use crate::utils::formatting::fmt_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        verified,
        pending,
        from,
        to,
    } = cmd
    {
        let owner = cfg.acting_user()?;
        let filter = EntryFilter {
            verified: match (*verified, *pending) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            from: parse_optional_date(from.as_ref())?,
            to: parse_optional_date(to.as_ref())?,
        };

        let pool = open_pool(cfg)?;
        let entries = VerificationLogic::list_entries(&pool, owner, &filter)?;

        if entries.is_empty() {
            info("No hour entries found.");
            return Ok(());
        }

        print!("{}", render(&entries));
        let total: f64 = entries.iter().map(|e| e.hours).sum();
        println!(
            "\n{} entries, {}h listed",
            entries.len(),
            fmt_hours(total)
        );
    }
    Ok(())
}

fn render(entries: &[HourEntry]) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("DATE", 10),
        Column::new("HOURS", 7),
        Column::new("ORGANIZATION", 24),
        Column::new("DESCRIPTION", 32),
        Column::new("STATUS", 8),
    ]);

    for e in entries {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            fmt_hours(e.hours),
            e.organization.clone(),
            e.description.clone(),
            e.status_label().to_string(),
        ]);
    }

    table.render()
}
