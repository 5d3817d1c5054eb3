use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::hour_entry::EntryFilter;
use crate::utils::date::parse_optional_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        verified,
        from,
        to,
        force,
    } = cmd
    {
        let owner = cfg.acting_user()?;
        let filter = EntryFilter {
            verified: (*verified).then_some(true),
            from: parse_optional_date(from.as_ref())?,
            to: parse_optional_date(to.as_ref())?,
        };

        let pool = open_pool(cfg)?;
        let n = ExportLogic::export(&pool, owner, &filter, *format, file, *force)?;
        tracing::debug!(rows = n, format = format.as_str(), "export finished");
    }
    Ok(())
}
