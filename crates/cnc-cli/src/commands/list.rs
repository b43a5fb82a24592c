//! Listing and type overview commands

use colored::Colorize;

use cnc_core::{ToolQuery, ToolType, TypeFilter};

use crate::context::AppContext;
use crate::error::Result;
use crate::render;

/// Run the list command
///
/// Prints matching tools in presentation order, either as cards or as a
/// JSON array.
pub fn run_list(ctx: &AppContext, search: &str, type_filter: TypeFilter, json: bool) -> Result<()> {
    let store = ctx.open_store();
    let query = ToolQuery::new(search, type_filter);
    let matches = store.run_query(&query);

    if json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    if matches.is_empty() {
        if store.is_empty() {
            println!("No tools yet. Add one with {}.", "cnc add".cyan());
        } else {
            println!("No tools found.");
        }
        return Ok(());
    }

    for record in &matches {
        println!("{}", render::card(record));
        println!();
    }

    if query.is_unrestricted() {
        println!("{} tools", store.len());
    } else {
        println!("{} of {} tools", matches.len(), store.len());
    }
    Ok(())
}

/// Run the types command
pub fn run_types() -> Result<()> {
    println!("{} (no filter)", TypeFilter::All.to_string().cyan());
    for tool_type in ToolType::ALL {
        println!(
            "{} {:<12} {}",
            tool_type.icon(),
            tool_type.label(),
            tool_type.slug().dimmed()
        );
    }
    Ok(())
}
