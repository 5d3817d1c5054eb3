use crate::cli::commands::open_pool;
use crate::config::Config;
use crate::core::recognition::compute_total;
use crate::errors::AppResult;
use crate::utils::formatting::fmt_hours;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let owner = cfg.acting_user()?;
    let pool = open_pool(cfg)?;
    let total = compute_total(&pool.conn, owner)?;
    println!("{}", fmt_hours(total));
    Ok(())
}
