use tabledom::Element;
use tablesort_lib::ColumnType;

use crate::config::SortConfig;

/// Per-column configuration read from a header element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Position of the header among the table's headers.
    pub index: usize,
    /// `false` only when the header opted out.
    pub sortable: bool,
    /// Explicit type, or `None` to detect at click time.
    pub type_override: Option<ColumnType>,
}

impl ColumnSpec {
    pub fn from_header(index: usize, header: &Element, config: &SortConfig) -> Self {
        let sortable = header
            .get_data(&config.sortable_attr)
            .is_none_or(|v| v != "false");

        let type_override = header
            .get_data(&config.sort_type_attr)
            .filter(|v| !v.trim().is_empty())
            .map(|v| {
                v.parse::<ColumnType>().unwrap_or_else(|err| {
                    log::warn!("[tablesort] header {}: {err}; sorting as string", header.id);
                    ColumnType::String
                })
            });

        Self {
            index,
            sortable,
            type_override,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_sortable_autodetect() {
        let spec = ColumnSpec::from_header(2, &Element::th("Name"), &SortConfig::default());
        assert_eq!(
            spec,
            ColumnSpec {
                index: 2,
                sortable: true,
                type_override: None
            }
        );
    }

    #[test]
    fn test_reads_data_attributes() {
        let config = SortConfig::default();

        let header = Element::th("Id").data("sortable", "false");
        assert!(!ColumnSpec::from_header(0, &header, &config).sortable);

        let header = Element::th("Id").data("sortable", "true");
        assert!(ColumnSpec::from_header(0, &header, &config).sortable);

        let header = Element::th("Born").data("sort-type", "date");
        assert_eq!(
            ColumnSpec::from_header(0, &header, &config).type_override,
            Some(ColumnType::Date)
        );

        let header = Element::th("Born").data("sort-type", "");
        assert_eq!(ColumnSpec::from_header(0, &header, &config).type_override, None);
    }

    #[test]
    fn test_unknown_type_sorts_as_string() {
        let header = Element::th("Code").data("sort-type", "hex");
        assert_eq!(
            ColumnSpec::from_header(0, &header, &SortConfig::default()).type_override,
            Some(ColumnType::String)
        );
    }

    #[test]
    fn test_custom_attribute_keys() {
        let config = SortConfig::default()
            .with_sortable_attr("sort")
            .with_sort_type_attr("kind");
        let header = Element::th("Qty").data("sort", "false").data("kind", "number");
        let spec = ColumnSpec::from_header(1, &header, &config);
        assert!(!spec.sortable);
        assert_eq!(spec.type_override, Some(ColumnType::Number));
    }
}
