//! Class names and attribute keys used by the controller

use serde::Deserialize;
use serde::Serialize;

/// Markup conventions the controller reads and writes.
///
/// # Example
///
/// ```
/// use tablesort_dom::SortConfig;
///
/// let config = SortConfig::default()
///     .with_table_class("data-grid")
///     .with_ascending_class("asc");
/// assert_eq!(config.descending_class, "sorted-desc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Class a `table` element must carry to be bound.
    ///
    /// Default: `table`
    pub table_class: String,

    /// Class added to every sortable header on bind.
    ///
    /// Default: `sortable`
    pub sortable_class: String,

    /// Indicator class on the header sorted ascending.
    ///
    /// Default: `sorted-asc`
    pub ascending_class: String,

    /// Indicator class on the header sorted descending.
    ///
    /// Default: `sorted-desc`
    pub descending_class: String,

    /// Data attribute that opts a header out when set to `"false"`.
    ///
    /// Default: `sortable`
    pub sortable_attr: String,

    /// Data attribute holding an explicit column type.
    ///
    /// Default: `sort-type`
    pub sort_type_attr: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            table_class: "table".to_string(),
            sortable_class: "sortable".to_string(),
            ascending_class: "sorted-asc".to_string(),
            descending_class: "sorted-desc".to_string(),
            sortable_attr: "sortable".to_string(),
            sort_type_attr: "sort-type".to_string(),
        }
    }
}

impl SortConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class that marks tables to bind.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Sets the class added to sortable headers.
    pub fn with_sortable_class(mut self, class: impl Into<String>) -> Self {
        self.sortable_class = class.into();
        self
    }

    /// Sets the ascending indicator class.
    pub fn with_ascending_class(mut self, class: impl Into<String>) -> Self {
        self.ascending_class = class.into();
        self
    }

    /// Sets the descending indicator class.
    pub fn with_descending_class(mut self, class: impl Into<String>) -> Self {
        self.descending_class = class.into();
        self
    }

    /// Sets the opt-out data attribute key.
    pub fn with_sortable_attr(mut self, key: impl Into<String>) -> Self {
        self.sortable_attr = key.into();
        self
    }

    /// Sets the type override data attribute key.
    pub fn with_sort_type_attr(mut self, key: impl Into<String>) -> Self {
        self.sort_type_attr = key.into();
        self
    }
}
