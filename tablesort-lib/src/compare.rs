//! Ordering of normalized values and stable column sorts.

use std::cmp::Ordering;

use crate::detect::resolve_type;
use crate::normalize::normalize;
use crate::types::{ColumnType, NormalizedValue, SortDirection};

impl NormalizedValue {
    /// Ascending order over all normalized values.
    ///
    /// Numbers and timestamps compare numerically, also with each other.
    /// Text compares by Unicode scalar value. Every numeric value orders
    /// before every text value, so cells that fell back to text gather after
    /// the parsed ones.
    pub fn natural_cmp(&self, other: &Self) -> Ordering {
        use NormalizedValue::{Number, Text, Timestamp};

        match (self, other) {
            (Timestamp(a), Timestamp(b)) => a.cmp(b),
            (Text(a), Text(b)) => a.cmp(b),
            (Text(_), _) => Ordering::Greater,
            (_, Text(_)) => Ordering::Less,
            _ => {
                // Both numeric; normalized numbers are finite.
                let (a, b) = (self.as_f64().unwrap_or(0.0), other.as_f64().unwrap_or(0.0));
                a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
            }
        }
    }
}

/// Compare two normalized values for the given direction.
///
/// `Ordering::Greater` means `a` sorts after `b`.
pub fn compare(a: &NormalizedValue, b: &NormalizedValue, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Ascending => a.natural_cmp(b),
        SortDirection::Descending => b.natural_cmp(a),
    }
}

/// Stable permutation that sorts a column's cells.
///
/// Element `i` of the result is the index of the row that goes to position
/// `i`. Rows whose cells normalize to equal values keep their relative order,
/// so sorting an already sorted column again changes nothing.
pub fn sort_order<S: AsRef<str>>(
    cells: &[S],
    column_type: ColumnType,
    direction: SortDirection,
) -> Vec<usize> {
    ColumnSorter::new(column_type, direction).order(cells)
}

/// A resolved column type and direction, applied to one sort pass.
///
/// Each cell is normalized exactly once before sorting.
///
/// # Example
///
/// ```
/// use tablesort_lib::{ColumnSorter, SortDirection};
///
/// let mut rows = vec![("b", "15.06.2023"), ("a", "01.01.2024"), ("c", "20.03.2024")];
/// let sorter = ColumnSorter::detect(rows.iter().map(|r| r.1), None, SortDirection::Ascending);
/// sorter.sort_rows(&mut rows, |r| r.1);
/// assert_eq!(rows.iter().map(|r| r.0).collect::<Vec<_>>(), ["b", "a", "c"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSorter {
    pub column_type: ColumnType,
    pub direction: SortDirection,
}

impl ColumnSorter {
    pub fn new(column_type: ColumnType, direction: SortDirection) -> Self {
        Self {
            column_type,
            direction,
        }
    }

    /// Resolve the column type from an override or the cells themselves.
    pub fn detect<I, S>(cells: I, override_type: Option<ColumnType>, direction: SortDirection) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(resolve_type(override_type, cells), direction)
    }

    /// See [`sort_order`].
    pub fn order<S: AsRef<str>>(&self, cells: &[S]) -> Vec<usize> {
        let mut keyed: Vec<(usize, NormalizedValue)> = cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx, normalize(cell.as_ref(), self.column_type)))
            .collect();

        // slice::sort_by is stable.
        keyed.sort_by(|(_, a), (_, b)| compare(a, b, self.direction));
        keyed.into_iter().map(|(idx, _)| idx).collect()
    }

    /// Stably sort `rows` in place by the text `key` extracts from each row.
    pub fn sort_rows<T, K, F>(&self, rows: &mut [T], key: F)
    where
        F: Fn(&T) -> K,
        K: AsRef<str>,
    {
        let mut keyed: Vec<(NormalizedValue, usize)> = rows
            .iter()
            .enumerate()
            .map(|(idx, row)| (normalize(key(row).as_ref(), self.column_type), idx))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| compare(a, b, self.direction));

        apply_permutation(rows, keyed.into_iter().map(|(_, idx)| idx).collect());
    }
}

/// Reorder `rows` so that position `i` holds the element previously at
/// `order[i]`.
fn apply_permutation<T>(rows: &mut [T], mut order: Vec<usize>) {
    for start in 0..order.len() {
        let mut current = start;
        while order[current] != start {
            let next = order[current];
            rows.swap(current, next);
            order[current] = current;
            current = next;
        }
        order[current] = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(cells: &[&str], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| cells[i].to_string()).collect()
    }

    #[test]
    fn test_compare_directions() {
        let a = NormalizedValue::Number(1.0);
        let b = NormalizedValue::Number(2.0);
        assert_eq!(compare(&a, &b, SortDirection::Ascending), Ordering::Less);
        assert_eq!(compare(&a, &b, SortDirection::Descending), Ordering::Greater);
        assert_eq!(compare(&a, &a.clone(), SortDirection::Descending), Ordering::Equal);
    }

    #[test]
    fn test_negative_zero_equals_zero() {
        let a = NormalizedValue::Number(0.0);
        let b = NormalizedValue::Number(-0.0);
        assert_eq!(compare(&a, &b, SortDirection::Ascending), Ordering::Equal);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let cells = ["10", "2", "33"];
        let order = sort_order(&cells, ColumnType::Number, SortDirection::Ascending);
        assert_eq!(texts(&cells, &order), ["2", "10", "33"]);
    }

    #[test]
    fn test_dates_sort_chronologically() {
        let cells = ["01.01.2024", "15.06.2023", "20.03.2024"];
        let order = sort_order(&cells, ColumnType::Date, SortDirection::Ascending);
        assert_eq!(texts(&cells, &order), ["15.06.2023", "01.01.2024", "20.03.2024"]);
    }

    #[test]
    fn test_strings_sort_case_insensitively() {
        let cells = ["banana", "Apple", "cherry"];
        let order = sort_order(&cells, ColumnType::String, SortDirection::Ascending);
        assert_eq!(texts(&cells, &order), ["Apple", "banana", "cherry"]);
    }

    #[test]
    fn test_text_fallbacks_follow_numbers() {
        let cells = ["", "5", "n/a", "3"];
        let asc = sort_order(&cells, ColumnType::Number, SortDirection::Ascending);
        assert_eq!(texts(&cells, &asc), ["3", "5", "", "n/a"]);

        let desc = sort_order(&cells, ColumnType::Number, SortDirection::Descending);
        assert_eq!(texts(&cells, &desc), ["n/a", "", "5", "3"]);
    }

    #[test]
    fn test_equal_keys_keep_prior_order() {
        let cells = ["b", "A", "a", "B"];
        let asc = sort_order(&cells, ColumnType::String, SortDirection::Ascending);
        assert_eq!(asc, vec![1, 2, 0, 3]);

        let desc = sort_order(&cells, ColumnType::String, SortDirection::Descending);
        assert_eq!(desc, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_descending_reverses_distinct_keys() {
        let cells = ["4", "1", "3", "2"];
        let asc = sort_order(&cells, ColumnType::Number, SortDirection::Ascending);
        let mut desc = sort_order(&cells, ColumnType::Number, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_rows_in_place() {
        let mut rows = vec![("x", "3"), ("y", "1"), ("z", "2"), ("w", "1")];
        ColumnSorter::new(ColumnType::Number, SortDirection::Ascending).sort_rows(&mut rows, |r| r.1);
        assert_eq!(rows, vec![("y", "1"), ("w", "1"), ("z", "2"), ("x", "3")]);
    }

    #[test]
    fn test_apply_permutation_cycles() {
        let mut rows = vec!['a', 'b', 'c', 'd', 'e'];
        apply_permutation(&mut rows, vec![2, 0, 1, 4, 3]);
        assert_eq!(rows, vec!['c', 'a', 'b', 'e', 'd']);
    }

    #[test]
    fn test_empty_column() {
        let cells: [&str; 0] = [];
        assert!(sort_order(&cells, ColumnType::String, SortDirection::Ascending).is_empty());
    }
}
