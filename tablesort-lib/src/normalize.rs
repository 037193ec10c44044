//! Cell text normalization.

use crate::datetime::timestamp_millis;
use crate::types::{ColumnType, NormalizedValue};

/// Normalize one cell's raw text under the resolved column type.
///
/// The text is trimmed first. Numbers accept `,` as the decimal separator
/// and are read from the longest numeric prefix (`"12 kg"` is 12). Cells that
/// fail to parse as a number or date fall back to lowercased text, so this
/// never fails.
pub fn normalize(raw: &str, column_type: ColumnType) -> NormalizedValue {
    let text = raw.trim();

    match column_type {
        ColumnType::Number => match parse_leading_float(&text.replacen(',', ".", 1)) {
            Some(n) => NormalizedValue::Number(n),
            None => fallback(text),
        },
        ColumnType::Date => match timestamp_millis(text) {
            Some(ms) => NormalizedValue::Timestamp(ms),
            None => fallback(text),
        },
        ColumnType::String => fallback(text),
    }
}

fn fallback(text: &str) -> NormalizedValue {
    NormalizedValue::Text(text.to_lowercase())
}

/// Parse the longest prefix of `text` that forms a decimal number:
/// optional sign, digits with an optional fraction, optional exponent.
///
/// Returns `None` when there is no such prefix or the value is not finite.
fn parse_leading_float(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    // `end` only ever advances over ASCII bytes, so it is a char boundary.
    let value = text[..end].parse::<f64>().ok()?;
    value.is_finite().then_some(value)
}
