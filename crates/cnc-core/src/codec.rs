//! JSON encoding of the tool collection
//!
//! The persisted form is a single JSON array of record objects. Decoding is
//! deliberately tolerant of data written by older versions of the
//! application: only the array shape and a non-empty `id` per record are
//! mandatory.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::record::{ToolFields, ToolId, ToolRecord, ToolType};

/// Encode the collection as a pretty-printed JSON array.
pub fn encode(records: &[ToolRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Decode a JSON array of records.
///
/// When two entries share an id the later one wins and takes the slot of
/// the earlier one.
pub fn decode(bytes: &[u8]) -> Result<Vec<ToolRecord>> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::malformed(format!("invalid JSON: {e}")))?;

    let entries = match value {
        Value::Array(entries) => entries,
        other => {
            return Err(Error::malformed(format!(
                "expected an array of tool records, found {}",
                json_kind(&other)
            )));
        }
    };

    let mut records: Vec<ToolRecord> = Vec::with_capacity(entries.len());
    let mut slots: HashMap<ToolId, usize> = HashMap::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let record = decode_entry(index, entry)?;
        match slots.get(record.id()) {
            Some(&slot) => {
                tracing::warn!(id = %record.id(), index, "duplicate tool id, keeping the later entry");
                records[slot] = record;
            }
            None => {
                slots.insert(record.id().clone(), records.len());
                records.push(record);
            }
        }
    }

    Ok(records)
}

fn decode_entry(index: usize, entry: Value) -> Result<ToolRecord> {
    if !entry.is_object() {
        return Err(Error::malformed(format!(
            "record {index}: expected an object, found {}",
            json_kind(&entry)
        )));
    }

    let wire: WireRecord = serde_json::from_value(entry)
        .map_err(|e| Error::malformed(format!("record {index}: {e}")))?;

    let id = wire
        .id
        .map(WireText::into_string)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| Error::malformed(format!("record {index}: missing id")))?;

    let tool_type = match wire.tool_type.map(WireText::into_string) {
        Some(label) => label.parse().unwrap_or_else(|_| {
            tracing::warn!(%id, %label, "unknown tool type, treating as other");
            ToolType::Other
        }),
        None => ToolType::Other,
    };

    let date_added = match wire.date_added.as_deref() {
        Some(raw) => match DateTime::parse_from_rfc3339(raw) {
            Ok(date) => date.with_timezone(&Utc),
            Err(e) => {
                tracing::warn!(%id, raw, error = %e, "unparsable dateAdded, using epoch");
                DateTime::<Utc>::default()
            }
        },
        None => DateTime::<Utc>::default(),
    };

    let fields = ToolFields {
        name: wire.name.map(WireText::into_string).unwrap_or_default(),
        tool_type,
        machine: wire.machine.map(WireText::into_string).unwrap_or_default(),
        diameter: wire.diameter.map(WireText::into_string),
        length: wire.length.map(WireText::into_string),
        position: wire.position.map(WireText::into_string),
        notes: wire.notes.map(WireText::into_string),
    }
    .normalized();

    Ok(ToolRecord::from_parts(ToolId::new(id), date_added, fields))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Record shape as found on disk; every field is optional here and checked
/// during conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(default)]
    id: Option<WireText>,
    #[serde(default)]
    name: Option<WireText>,
    #[serde(default, rename = "type")]
    tool_type: Option<WireText>,
    #[serde(default)]
    machine: Option<WireText>,
    #[serde(default)]
    diameter: Option<WireText>,
    #[serde(default)]
    length: Option<WireText>,
    #[serde(default)]
    position: Option<WireText>,
    #[serde(default)]
    notes: Option<WireText>,
    #[serde(default)]
    date_added: Option<String>,
}

/// Older exports sometimes carry numbers where text is expected
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireText {
    Text(String),
    Number(serde_json::Number),
}

impl WireText {
    fn into_string(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}
