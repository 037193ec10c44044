//! Value typing and ordering engine for sortable tables.
//!
//! Given the raw texts of one column, the engine infers whether the column
//! holds numbers, `DD.MM.YYYY[ HH:MM]` dates or plain text, normalizes each
//! cell into a comparable value, and produces a stable ordering of the rows.
//! It holds no state and knows nothing about element trees.
//!
//! # Example
//!
//! ```
//! use tablesort_lib::{ColumnType, SortDirection, detect_type, sort_order};
//!
//! let cells = ["10", "2", "33"];
//! assert_eq!(detect_type(cells), ColumnType::Number);
//! assert_eq!(sort_order(&cells, ColumnType::Number, SortDirection::Ascending), vec![1, 0, 2]);
//! ```

pub mod compare;
pub mod datetime;
pub mod detect;
pub mod error;
pub mod normalize;
pub mod types;

pub use compare::{ColumnSorter, compare, sort_order};
pub use detect::{detect_type, resolve_type};
pub use error::ParseColumnTypeError;
pub use normalize::normalize;
pub use types::{ColumnType, NormalizedValue, SortDirection, SortState};
