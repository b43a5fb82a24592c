//! Search, filter and ordering of tool records
//!
//! A query never mutates anything: it borrows the current collection and
//! produces a fresh, sorted view on every call.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

use crate::error::Error;
use crate::record::{ToolRecord, ToolType};

/// Restricts a query to one tool category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ToolType),
}

impl TypeFilter {
    pub fn matches(&self, tool_type: ToolType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == tool_type,
        }
    }
}

impl From<ToolType> for TypeFilter {
    fn from(tool_type: ToolType) -> Self {
        Self::Only(tool_type)
    }
}

impl FromStr for TypeFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(tool_type) => write!(f, "{tool_type}"),
        }
    }
}

/// Search text plus type filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolQuery {
    needle: String,
    filter: TypeFilter,
}

impl ToolQuery {
    pub fn new(search_text: &str, filter: TypeFilter) -> Self {
        Self {
            needle: search_text.to_lowercase(),
            filter,
        }
    }

    /// Whether the query narrows the collection at all
    pub fn is_unrestricted(&self) -> bool {
        self.needle.is_empty() && self.filter == TypeFilter::All
    }

    pub fn matches(&self, record: &ToolRecord) -> bool {
        self.filter.matches(record.tool_type()) && self.matches_text(record)
    }

    fn matches_text(&self, record: &ToolRecord) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        let tool_type = record.tool_type();
        [
            Some(record.name()),
            Some(record.machine()),
            Some(tool_type.label()),
            Some(tool_type.slug()),
            record.position(),
            record.notes(),
        ]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Filter `records` and return the matches in presentation order.
    pub fn apply<'a, I>(&self, records: I) -> Vec<&'a ToolRecord>
    where
        I: IntoIterator<Item = &'a ToolRecord>,
    {
        let mut matches: Vec<&ToolRecord> = records
            .into_iter()
            .filter(|record| self.matches(record))
            .collect();
        // Vec::sort_by is stable: equal keys keep collection order
        matches.sort_by(|a, b| presentation_order(a, b));
        matches
    }
}

/// Machine first, then position; a missing position sorts before any other.
pub fn presentation_order(a: &ToolRecord, b: &ToolRecord) -> Ordering {
    locale_cmp(a.machine(), b.machine())
        .then_with(|| locale_cmp(a.position().unwrap_or(""), b.position().unwrap_or("")))
}

/// Root-locale collator from the compiled CLDR data.
static COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    Collator::try_new(Default::default(), CollatorOptions::default())
        .inspect_err(|error| tracing::warn!(%error, "collator unavailable, sorting by code point"))
        .ok()
});

/// Compare two strings the way a human-facing list expects.
///
/// Uses Unicode collation: accents and case only break ties between
/// otherwise equal letters (`Émco` before `Fanuc`, `Ёмкость` before `Жук`),
/// lower case first. Byte order is the final tiebreak so the ordering is
/// total.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    COLLATOR
        .as_ref()
        .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}
