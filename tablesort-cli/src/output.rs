use crossterm::style::Stylize;
use tabledom::markup::to_markup;
use tabledom::{format_grid, query_tag, table_grid, Element};
use tablesort_dom::SortConfig;

use crate::options::OutputFormat;

const ASCENDING_MARK: &str = "▲";
const DESCENDING_MARK: &str = "▼";

pub fn render(table: &Element, config: &SortConfig, format: OutputFormat, styled: bool) -> String {
    match format {
        OutputFormat::Text => render_text(table, config, styled),
        OutputFormat::Html => to_markup(table, false),
    }
}

/// Aligned text with the sort indicator appended to the active header.
/// `styled` bolds the header line.
fn render_text(table: &Element, config: &SortConfig, styled: bool) -> String {
    let mut grid = table_grid(table);

    let marks = query_tag(table, "th", Some("table"))
        .into_iter()
        .map(|th| {
            if th.has_class(&config.ascending_class) {
                Some(ASCENDING_MARK)
            } else if th.has_class(&config.descending_class) {
                Some(DESCENDING_MARK)
            } else {
                None
            }
        })
        .collect::<Vec<_>>();

    if let Some(header) = grid.first_mut() {
        for (cell, mark) in header.iter_mut().zip(&marks) {
            if let Some(mark) = mark {
                cell.push(' ');
                cell.push_str(mark);
            }
        }
    }

    let text = format_grid(&grid, 1, None);
    if !styled {
        return text;
    }

    let mut lines = text.lines();
    let mut out = String::with_capacity(text.len() + 16);
    if let Some(first) = lines.next() {
        out.push_str(&format!("{}\n", first.bold()));
    }
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Element {
        Element::table()
            .child(
                Element::thead().child(
                    Element::tr()
                        .child(Element::th("Code"))
                        .child(Element::th("Seats").class("sorted-desc")),
                ),
            )
            .child(
                Element::tbody()
                    .child(Element::tr().child(Element::td("AF006")).child(Element::td("33")))
                    .child(Element::tr().child(Element::td("BA117")).child(Element::td("2"))),
            )
    }

    #[test]
    fn test_text_marks_sorted_header() {
        let out = render(&table(), &SortConfig::default(), OutputFormat::Text, false);
        assert_eq!(out, "Code   Seats ▼\n--------------\nAF006  33\nBA117  2\n");
    }

    #[test]
    fn test_styled_text_bolds_header_only() {
        let out = render(&table(), &SortConfig::default(), OutputFormat::Text, true);
        let mut lines = out.lines();
        assert!(lines.next().unwrap().contains('\u{1b}'));
        assert!(!lines.any(|l| l.contains('\u{1b}')));
    }

    #[test]
    fn test_html_keeps_classes() {
        let out = render(&table(), &SortConfig::default(), OutputFormat::Html, false);
        assert!(out.contains("<th class=\"sorted-desc\">Seats</th>"));
    }
}
