//! TOML settings file.
//!
//! ```toml
//! delimiter = ";"
//!
//! [markup]
//! ascending_class = "asc"
//!
//! [columns.Departure]
//! type = "date"
//!
//! [columns.Notes]
//! sortable = false
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use tablesort_dom::SortConfig;
use tablesort_lib::ColumnType;

use crate::error::CliError;

/// Settings loaded from a file; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Field delimiter.
    pub delimiter: Option<char>,
    /// Class names and attribute keys.
    pub markup: SortConfig,
    /// Per-column settings keyed by header text or 1-based index.
    pub columns: BTreeMap<String, ColumnSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnSettings {
    /// Explicit column type.
    #[serde(rename = "type")]
    pub column_type: Option<ColumnType>,
    /// `false` makes the column unsortable.
    pub sortable: Option<bool>,
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let text = std::fs::read_to_string(path)?;
        let settings = Self::parse(&text).map_err(|source| CliError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "[settings] loaded {} ({} column entries)",
            path.display(),
            settings.columns.len()
        );
        Ok(settings)
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
