//! Tool record types
//!
//! A [`ToolRecord`] describes one physical cutting tool mounted on one
//! machine. Records are only created and replaced through the store, which
//! owns id assignment and the creation timestamp; callers describe the
//! editable part of a record with [`ToolFields`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{Error, Result};

/// Opaque, unique identifier of a tool record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolId(String);

impl ToolId {
    /// Wrap an existing identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ToolId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ToolId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ToolId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Category of a cutting tool.
///
/// Persisted under the workshop's own labels so that existing exports keep
/// loading; the English slugs are accepted wherever a type is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolType {
    /// End mills, face mills and other milling cutters
    Mill,
    /// Twist drills and spot drills
    Drill,
    /// Thread milling cutters
    ThreadMill,
    /// Anything that does not fit the categories above
    Other,
}

impl ToolType {
    /// Every category, in display order.
    pub const ALL: [ToolType; 4] = [
        ToolType::Mill,
        ToolType::Drill,
        ToolType::ThreadMill,
        ToolType::Other,
    ];

    /// Label used on the wire and in listings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mill => "фреза",
            Self::Drill => "сверло",
            Self::ThreadMill => "резьбофреза",
            Self::Other => "другое",
        }
    }

    /// ASCII alias accepted by the parser.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Mill => "mill",
            Self::Drill => "drill",
            Self::ThreadMill => "thread-mill",
            Self::Other => "other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Mill => "🔧",
            Self::Drill => "🗲",
            Self::ThreadMill => "⚙️",
            Self::Other => "🔨",
        }
    }
}

impl FromStr for ToolType {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(Error::required("type"));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.label() == normalized || t.slug() == normalized)
            .ok_or_else(|| Error::ValidationFailed {
                field: "type".to_string(),
                reason: format!(
                    "unknown tool type '{}' (expected one of: mill, drill, thread-mill, other)",
                    s.trim()
                ),
            })
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ToolType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ToolType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        label.parse().map_err(serde::de::Error::custom)
    }
}

/// The editable part of a tool record.
///
/// Create and update both take the complete field set; there is no
/// field-by-field patching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolFields {
    pub name: String,
    pub tool_type: ToolType,
    pub machine: String,
    /// Diameter in millimeters, kept as entered
    pub diameter: Option<String>,
    /// Overall length in millimeters, kept as entered
    pub length: Option<String>,
    /// Magazine slot or tool number, e.g. `T01`
    pub position: Option<String>,
    pub notes: Option<String>,
}

impl ToolFields {
    /// Create a field set with the required fields and no optional ones.
    pub fn new(name: impl Into<String>, tool_type: ToolType, machine: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tool_type,
            machine: machine.into(),
            diameter: None,
            length: None,
            position: None,
            notes: None,
        }
    }

    pub fn with_diameter(mut self, diameter: impl Into<String>) -> Self {
        self.diameter = Some(diameter.into());
        self
    }

    pub fn with_length(mut self, length: impl Into<String>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = Some(position.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Trim every field and check that the required ones are present.
    pub(crate) fn validate(self) -> Result<Self> {
        let fields = self.normalized();
        if fields.name.is_empty() {
            return Err(Error::required("name"));
        }
        if fields.machine.is_empty() {
            return Err(Error::required("machine"));
        }
        Ok(fields)
    }

    /// Trim every field; blank optional fields become absent.
    pub(crate) fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            tool_type: self.tool_type,
            machine: self.machine.trim().to_string(),
            diameter: normalize_optional(self.diameter),
            length: normalize_optional(self.length),
            position: normalize_optional(self.position),
            notes: normalize_optional(self.notes),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// One cutting tool assigned to one machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolRecord {
    id: ToolId,
    name: String,
    #[serde(rename = "type")]
    tool_type: ToolType,
    machine: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    diameter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    length: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    date_added: DateTime<Utc>,
}

impl ToolRecord {
    /// Build a brand new record with a generated id and the current time.
    pub(crate) fn create(fields: ToolFields) -> Self {
        // Millisecond precision keeps timestamps in the same shape as older exports
        Self::from_parts(ToolId::generate(), Utc::now().trunc_subsecs(3), fields)
    }

    pub(crate) fn from_parts(id: ToolId, date_added: DateTime<Utc>, fields: ToolFields) -> Self {
        Self {
            id,
            name: fields.name,
            tool_type: fields.tool_type,
            machine: fields.machine,
            diameter: fields.diameter,
            length: fields.length,
            position: fields.position,
            notes: fields.notes,
            date_added,
        }
    }

    /// Replace every editable field, keeping id and creation time.
    pub(crate) fn replace_fields(&mut self, fields: ToolFields) {
        let ToolFields {
            name,
            tool_type,
            machine,
            diameter,
            length,
            position,
            notes,
        } = fields;
        self.name = name;
        self.tool_type = tool_type;
        self.machine = machine;
        self.diameter = diameter;
        self.length = length;
        self.position = position;
        self.notes = notes;
    }

    pub fn id(&self) -> &ToolId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tool_type(&self) -> ToolType {
        self.tool_type
    }

    pub fn machine(&self) -> &str {
        &self.machine
    }

    pub fn diameter(&self) -> Option<&str> {
        self.diameter.as_deref()
    }

    pub fn length(&self) -> Option<&str> {
        self.length.as_deref()
    }

    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Copy of the editable fields, e.g. to prefill an edit form.
    pub fn to_fields(&self) -> ToolFields {
        ToolFields {
            name: self.name.clone(),
            tool_type: self.tool_type,
            machine: self.machine.clone(),
            diameter: self.diameter.clone(),
            length: self.length.clone(),
            position: self.position.clone(),
            notes: self.notes.clone(),
        }
    }
}
