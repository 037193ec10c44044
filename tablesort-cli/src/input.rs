//! Delimited input to table elements.

use std::io::Read;

use tabledom::Element;
use tablesort_dom::SortConfig;

use crate::error::CliError;
use crate::settings::ColumnSettings;

pub const TABLE_ID: &str = "input";

/// Header row and data rows of a delimited file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableInput {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableInput {
    /// Read delimited text whose first record is the header row.
    ///
    /// Records may have fewer or more fields than the header.
    pub fn read<R: Read>(reader: R, delimiter: u8) -> Result<Self, CliError> {
        let mut csv = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv.headers()?.iter().map(str::to_string).collect();
        if headers.is_empty() {
            return Err(CliError::MissingHeader);
        }

        let mut rows = Vec::new();
        for record in csv.records() {
            rows.push(record?.iter().map(str::to_string).collect());
        }

        log::debug!(
            "[input] read {} columns, {} rows",
            headers.len(),
            rows.len()
        );
        Ok(Self { headers, rows })
    }

    /// Index of the column named by header text (case-insensitive) or by
    /// 1-based position.
    pub fn resolve_column(&self, key: &str) -> Result<usize, CliError> {
        let key = key.trim();
        if let Some(idx) = self
            .headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(key))
        {
            return Ok(idx);
        }
        match key.parse::<usize>() {
            Ok(n) if (1..=self.headers.len()).contains(&n) => Ok(n - 1),
            _ => Err(CliError::UnknownColumn(key.to_string())),
        }
    }

    /// Build a `table` element (class from `config`) with a header row and a
    /// body, carrying each column's settings as data attributes.
    pub fn to_table(&self, columns: &[ColumnSettings], config: &SortConfig) -> Element {
        let header_row = Element::tr().children(self.headers.iter().enumerate().map(|(idx, text)| {
            let mut th = Element::th(text.as_str()).id(header_id(idx));
            if let Some(column) = columns.get(idx) {
                if let Some(column_type) = column.column_type {
                    th.set_data(config.sort_type_attr.clone(), column_type.as_str());
                }
                if column.sortable == Some(false) {
                    th.set_data(config.sortable_attr.clone(), "false");
                }
            }
            th
        }));

        let body = Element::tbody().id(format!("{TABLE_ID}-body")).children(
            self.rows
                .iter()
                .map(|row| Element::tr().children(row.iter().map(|cell| Element::td(cell.as_str())))),
        );

        Element::table()
            .id(TABLE_ID)
            .class(config.table_class.clone())
            .child(Element::thead().child(header_row))
            .child(body)
    }
}

pub fn header_id(column: usize) -> String {
    format!("{TABLE_ID}-h{column}")
}

pub fn delimiter_byte(delimiter: char) -> Result<u8, CliError> {
    u8::try_from(delimiter)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(CliError::InvalidDelimiter(delimiter))
}
