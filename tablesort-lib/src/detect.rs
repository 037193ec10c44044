//! Column type detection.

use std::sync::LazyLock;

use regex::Regex;

use crate::datetime::parse_date_time;
use crate::types::ColumnType;

static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]+[.,]?[0-9]*$").expect("number pattern is valid"));

/// Infer a column's type from its raw cell texts.
///
/// Only the first cell whose trimmed text is non-empty is consulted; a column
/// of blank cells is [`ColumnType::String`]. Cells further down that do not
/// fit the detected type are handled by the normalizer's text fallback.
pub fn detect_type<I, S>(samples: I) -> ColumnType
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(sample) = samples
        .into_iter()
        .find(|s| !s.as_ref().trim().is_empty())
    else {
        return ColumnType::String;
    };
    let sample = sample.as_ref().trim();

    let column_type = if is_number(sample) {
        ColumnType::Number
    } else if parse_date_time(sample).is_some() {
        ColumnType::Date
    } else {
        ColumnType::String
    };

    log::trace!("[detect] sample {sample:?} -> {column_type}");
    column_type
}

/// The configured override if there is one, otherwise the detected type.
pub fn resolve_type<I, S>(override_type: Option<ColumnType>, samples: I) -> ColumnType
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    override_type.unwrap_or_else(|| detect_type(samples))
}

fn is_number(sample: &str) -> bool {
    NUMBER.is_match(sample)
        && sample
            .replacen(',', ".", 1)
            .parse::<f64>()
            .is_ok_and(f64::is_finite)
}
