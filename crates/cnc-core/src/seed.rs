//! Demo records for a first launch

use chrono::{SubsecRound, Utc};

use crate::record::{ToolFields, ToolId, ToolRecord, ToolType};

/// Three example tools across two machines.
pub fn demo_records() -> Vec<ToolRecord> {
    let now = Utc::now().trunc_subsecs(3);
    vec![
        ToolRecord::from_parts(
            ToolId::new("1"),
            now,
            ToolFields::new("Концевая фреза Ø10", ToolType::Mill, "Haas VF-2")
                .with_diameter("10")
                .with_length("75")
                .with_position("T01")
                .with_notes("Для обработки алюминия"),
        ),
        ToolRecord::from_parts(
            ToolId::new("2"),
            now,
            ToolFields::new("Спиральное сверло Ø8", ToolType::Drill, "Haas VF-2")
                .with_diameter("8")
                .with_length("120")
                .with_position("T02")
                .with_notes("HSS-E сверло"),
        ),
        ToolRecord::from_parts(
            ToolId::new("3"),
            now,
            ToolFields::new("Резьбофреза M8", ToolType::ThreadMill, "DMG Mori NTX")
                .with_diameter("8")
                .with_length("80")
                .with_position("T15")
                .with_notes("Для нарезки резьбы M8x1.25"),
        ),
    ]
}
