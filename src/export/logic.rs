use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::core::verification::VerificationLogic;
use crate::models::hour_entry::EntryFilter;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of a user's hour entries.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the caller's entries matching `filter` to `file`.
    ///
    /// Returns the number of exported rows; nothing is written when no
    /// entry matches.
    pub fn export(
        pool: &DbPool,
        owner_id: &str,
        filter: &EntryFilter,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let rows: Vec<EntryExport> = VerificationLogic::list_entries(pool, owner_id, filter)?
            .iter()
            .map(EntryExport::from)
            .collect();

        if rows.is_empty() {
            warning("No hour entries found for the selected filters.");
            return Ok(0);
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        ttlog_quiet(
            &pool.conn,
            "export",
            format.as_str(),
            &format!("{} rows for {} → {}", rows.len(), owner_id, path.display()),
        );

        Ok(rows.len())
    }
}
