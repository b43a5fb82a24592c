//! Terminal rendering of tools and mutation outcomes

use chrono::Local;
use cnc_core::{Durability, ToolRecord};
use colored::Colorize;

/// Multi-line card for one tool.
pub fn card(record: &ToolRecord) -> String {
    let tool_type = record.tool_type();
    let mut lines = vec![format!(
        "{} {}  {}  {}",
        tool_type.icon(),
        record.name().bold(),
        format!("[{}]", tool_type.label()).cyan(),
        format!("id: {}", record.id()).dimmed()
    )];

    lines.push(detail("Machine", &record.machine().green().to_string()));
    if let Some(position) = record.position() {
        lines.push(detail("Position", position));
    }
    if let Some(diameter) = record.diameter() {
        lines.push(detail("Diameter", &format!("{diameter} mm")));
    }
    if let Some(length) = record.length() {
        lines.push(detail("Length", &format!("{length} mm")));
    }
    if let Some(notes) = record.notes() {
        lines.push(detail("Notes", notes));
    }
    lines.push(detail("Added", &added_date(record)));

    lines.join("\n")
}

fn detail(label: &str, value: &str) -> String {
    format!("   {:<10}{}", format!("{label}:").dimmed(), value)
}

/// Creation time in local time, `dd.mm.yyyy HH:MM`.
pub fn added_date(record: &ToolRecord) -> String {
    record
        .date_added()
        .with_timezone(&Local)
        .format("%d.%m.%Y %H:%M")
        .to_string()
}

/// Print the success line for a mutation, plus a warning if it was not saved.
pub fn report_saved(message: &str, durability: &Durability) {
    println!("{} {}", "OK".green().bold(), message);
    if let Some(error) = durability.error() {
        eprintln!(
            "{} {}. The change is kept for this session only.",
            "WARN".yellow().bold(),
            error
        );
    }
}
