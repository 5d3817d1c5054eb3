use crate::errors::{AppError, AppResult};
use std::path::Path;

/// Check that the output file can be written.
///
/// - file does NOT exist → Ok
/// - file exists and `force` → Ok (overwritten)
/// - file exists without `force` → Validation error
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "the file '{}' already exists (use --force to overwrite)",
        path.display()
    )))
}
