//! HTML-like serialization of element trees.

use crate::element::{Content, Element};

/// Serialize `root` as indented markup.
///
/// Classes and data attributes are emitted (`data-*` keys sorted); element
/// IDs only when `include_ids` is set. Text is escaped.
pub fn to_markup(root: &Element, include_ids: bool) -> String {
    let mut out = String::new();
    write_element(root, include_ids, 0, &mut out);
    out
}

fn write_element(el: &Element, include_ids: bool, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    out.push_str(&indent);
    out.push('<');
    out.push_str(&el.tag);

    if include_ids {
        push_attr(out, "id", &el.id);
    }
    if !el.classes.is_empty() {
        push_attr(out, "class", &el.classes.join(" "));
    }
    let mut data: Vec<_> = el.data.iter().collect();
    data.sort();
    for (key, value) in data {
        push_attr(out, &format!("data-{key}"), value);
    }
    out.push('>');

    match &el.content {
        Content::None => {}
        Content::Text(text) => out.push_str(&escape(text)),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                write_element(child, include_ids, depth + 1, out);
            }
            out.push_str(&indent);
        }
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push_str(">\n");
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape(value));
    out.push('"');
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_nested_with_attributes() {
        let table = Element::table().class("table").child(
            Element::tr().child(
                Element::th("A & B")
                    .class("sortable")
                    .data("sort-type", "number")
                    .data("sortable", "true"),
            ),
        );

        assert_eq!(
            to_markup(&table, false),
            "<table class=\"table\">\n  <tr>\n    <th class=\"sortable\" data-sort-type=\"number\" data-sortable=\"true\">A &amp; B</th>\n  </tr>\n</table>\n"
        );
    }

    #[test]
    fn test_markup_includes_ids_when_requested() {
        let cell = Element::td("<x>").id("c1");
        assert_eq!(to_markup(&cell, true), "<td id=\"c1\">&lt;x&gt;</td>\n");
    }
}
