//! Backup export and import

use std::path::{Path, PathBuf};

use chrono::Local;
use colored::Colorize;

use cnc_fs::NormalizedPath;

use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::render;

/// Default backup file name for today, `cnc-tools-YYYY-MM-DD.json`
pub fn default_export_name() -> String {
    format!("cnc-tools-{}.json", Local::now().format("%Y-%m-%d"))
}

/// Run the export command
///
/// Writes the backup to `output`, to stdout for `-`, or to
/// [`default_export_name`] in the current directory.
pub fn run_export(ctx: &AppContext, output: Option<&Path>) -> Result<()> {
    let store = ctx.open_store();
    let payload = store.export_all()?;

    if output == Some(Path::new("-")) {
        println!("{}", String::from_utf8_lossy(&payload));
        return Ok(());
    }

    let target = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default_export_name()));
    cnc_fs::io::write_atomic(&NormalizedPath::new(&target), &payload)?;

    println!(
        "{} Exported {} tools to {}",
        "OK".green().bold(),
        store.len(),
        target.display().to_string().cyan()
    );
    Ok(())
}

/// Run the import command
///
/// Replaces the whole collection. A backup that cannot be decoded leaves
/// the current tools untouched.
pub fn run_import(ctx: &AppContext, file: &Path) -> Result<()> {
    let source = NormalizedPath::new(file);
    let bytes = cnc_fs::io::read_optional(&source)?
        .ok_or_else(|| CliError::user(format!("Backup file not found: {}", file.display())))?;

    let mut store = ctx.open_store();
    let previous = store.len();
    let saved = store.import_all(&bytes)?;

    render::report_saved(
        &format!(
            "Imported {} tools from {} (replaced {})",
            saved.value,
            file.display(),
            previous
        ),
        &saved.durability,
    );
    Ok(())
}
