//! Single-tool commands: add, edit, show and remove

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::Confirm;

use crate::cli::{EditArgs, ToolArgs};
use crate::context::AppContext;
use crate::error::{CliError, Result};
use crate::render;

/// Run the add command
pub fn run_add(ctx: &AppContext, tool: ToolArgs) -> Result<()> {
    let mut store = ctx.open_store();
    let saved = store.create(tool.into())?;

    let record = &saved.value;
    render::report_saved(
        &format!("Added {} ({})", record.name().cyan(), record.id()),
        &saved.durability,
    );
    Ok(())
}

/// Run the edit command
///
/// Only the given fields change; everything else keeps its current value.
pub fn run_edit(ctx: &AppContext, id: &str, changes: EditArgs) -> Result<()> {
    if changes.is_empty() {
        return Err(CliError::user(
            "Nothing to change. Pass at least one field option, see `cnc edit --help`.",
        ));
    }

    let mut store = ctx.open_store();
    let current = store
        .find_by_id(id)
        .ok_or_else(|| cnc_core::Error::NotFound { id: id.to_string() })?
        .to_fields();

    let saved = store.update(id, changes.apply_to(current))?;
    render::report_saved(
        &format!("Updated {} ({})", saved.value.name().cyan(), id),
        &saved.durability,
    );
    Ok(())
}

/// Run the show command
pub fn run_show(ctx: &AppContext, id: &str, json: bool) -> Result<()> {
    let store = ctx.open_store();
    let record = store
        .find_by_id(id)
        .ok_or_else(|| cnc_core::Error::NotFound { id: id.to_string() })?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        println!("{}", render::card(record));
    }
    Ok(())
}

/// Run the remove command
///
/// Asks for confirmation on a terminal unless `yes` is set. Without a
/// terminal, `yes` is required.
pub fn run_remove(ctx: &AppContext, id: &str, yes: bool) -> Result<()> {
    let mut store = ctx.open_store();
    let name = store
        .find_by_id(id)
        .ok_or_else(|| cnc_core::Error::NotFound { id: id.to_string() })?
        .name()
        .to_string();

    if !yes {
        if !std::io::stdin().is_terminal() {
            return Err(CliError::user(format!(
                "Refusing to remove '{name}' without confirmation. Pass --yes to skip the prompt."
            )));
        }
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete tool \"{name}\"?"))
            .default(false)
            .interact()?;
        if !confirmed {
            println!("{} Nothing removed.", "=>".blue().bold());
            return Ok(());
        }
    }

    let saved = store.delete(id)?;
    render::report_saved(
        &format!("Removed {} ({})", saved.value.name().cyan(), id),
        &saved.durability,
    );
    Ok(())
}
