//! Field builders for common tools.

use cnc_core::{ToolFields, ToolType};

/// A mill on `machine` in slot `position`.
pub fn mill(name: &str, machine: &str, position: &str) -> ToolFields {
    ToolFields::new(name, ToolType::Mill, machine).with_position(position)
}

/// A drill on `machine` in slot `position`.
pub fn drill(name: &str, machine: &str, position: &str) -> ToolFields {
    ToolFields::new(name, ToolType::Drill, machine).with_position(position)
}

/// A fully populated thread mill.
pub fn thread_mill() -> ToolFields {
    ToolFields::new("Резьбофреза M6", ToolType::ThreadMill, "DMG Mori NTX")
        .with_diameter("4.8")
        .with_length("60")
        .with_position("T21")
        .with_notes("M6x1 internal threads")
}

/// A JSON backup holding two tools, in the shape older exports used.
pub fn legacy_backup() -> &'static str {
    r#"[
  {
    "id": "1700000000000",
    "name": "Торцевая фреза Ø50",
    "type": "фреза",
    "machine": "Haas VF-2",
    "diameter": "50",
    "length": "",
    "position": "T03",
    "notes": "",
    "dateAdded": "2023-11-14T22:13:20.000Z"
  },
  {
    "id": "1700000000001",
    "name": "Центровка Ø6",
    "type": "сверло",
    "machine": "Okuma LB3000",
    "diameter": "6",
    "length": "50",
    "position": "T07",
    "notes": "90°",
    "dateAdded": "2023-11-14T22:13:21.000Z"
  }
]"#
}
