//! Column types, sort directions and normalized cell values.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ParseColumnTypeError;

/// Semantic type of a column, used for one sort pass.
///
/// Either configured explicitly on the column or detected from its first
/// non-blank cell (see [`detect_type`](crate::detect_type)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Decimal numbers, `.` or `,` as decimal separator.
    Number,
    /// `DD.MM.YYYY` with an optional `HH:MM` time of day.
    Date,
    /// Case-insensitive text.
    #[default]
    String,
}

impl ColumnType {
    /// Returns the lowercase name used in markup and configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::Number => "number",
            ColumnType::Date => "date",
            ColumnType::String => "string",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnType {
    type Err = ParseColumnTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "number" => Ok(ColumnType::Number),
            "date" => Ok(ColumnType::Date),
            "string" => Ok(ColumnType::String),
            _ => Err(ParseColumnTypeError::new(s)),
        }
    }
}

/// Requested order of a sort pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first (0-9, A-Z, oldest first).
    Ascending,
    /// Largest value first.
    Descending,
}

impl SortDirection {
    pub fn is_ascending(&self) -> bool {
        matches!(self, SortDirection::Ascending)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("asc"),
            SortDirection::Descending => f.write_str("desc"),
        }
    }
}

/// Sort state of a single column header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortState {
    /// Not the active sort column.
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortState {
    /// The direction this state sorts in, if it is active.
    pub fn direction(&self) -> Option<SortDirection> {
        match self {
            SortState::None => None,
            SortState::Ascending => Some(SortDirection::Ascending),
            SortState::Descending => Some(SortDirection::Descending),
        }
    }

    /// The direction a new activation of a column in this state sorts in.
    ///
    /// Only an ascending column flips to descending; an inactive or
    /// descending column starts over at ascending.
    pub fn next_direction(&self) -> SortDirection {
        match self {
            SortState::Ascending => SortDirection::Descending,
            SortState::None | SortState::Descending => SortDirection::Ascending,
        }
    }
}

impl From<SortDirection> for SortState {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Ascending => SortState::Ascending,
            SortDirection::Descending => SortState::Descending,
        }
    }
}

/// Comparable representation of one cell under a resolved column type.
///
/// Cells that fail to parse under a numeric or date column become `Text`,
/// so a single column can mix variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NormalizedValue {
    /// A finite number.
    Number(f64),
    /// Milliseconds since the Unix epoch.
    Timestamp(i64),
    /// Trimmed, lowercased text.
    Text(String),
}

impl NormalizedValue {
    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            NormalizedValue::Number(_) => "number",
            NormalizedValue::Timestamp(_) => "timestamp",
            NormalizedValue::Text(_) => "text",
        }
    }

    /// Numeric view of the value, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            NormalizedValue::Number(n) => Some(*n),
            NormalizedValue::Timestamp(ms) => Some(*ms as f64),
            NormalizedValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            NormalizedValue::Text(s) => Some(s),
            _ => None,
        }
    }
}
