//! Click-to-sort behaviour for table elements.
//!
//! [`init_sortable_tables`] binds every matching table in an element tree.
//! Clicking a sortable header (see [`SortableTables::handle_event`]) sorts
//! the table body's rows by that column, toggling between ascending and
//! descending on repeated clicks, and moves the `sorted-asc`/`sorted-desc`
//! indicator class to the clicked header.
//!
//! Column types come from the `sort-type` data attribute when present and are
//! otherwise detected from the column's cells at click time. Headers with
//! `sortable = "false"` are left alone.

mod column;
mod config;
mod controller;
mod state;

pub use column::ColumnSpec;
pub use config::SortConfig;
pub use controller::{init_sortable_tables, SortOutcome, SortableTable, SortableTables};
pub use state::TableSortState;
