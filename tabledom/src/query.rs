//! Tree queries by tag name.

use crate::element::{find_element, Content, Element};

/// All descendants of `root` (excluding `root` itself) with the given tag, in
/// document order.
///
/// When `boundary` is set, descendants carrying that tag are neither matched
/// nor descended into, which keeps a query on a table from reaching into
/// tables nested inside its cells.
pub fn query_tag<'a>(root: &'a Element, tag: &str, boundary: Option<&str>) -> Vec<&'a Element> {
    let mut out = Vec::new();
    collect_tag(root, tag, boundary, &mut out);
    out
}

fn collect_tag<'a>(
    element: &'a Element,
    tag: &str,
    boundary: Option<&str>,
    out: &mut Vec<&'a Element>,
) {
    if let Content::Children(children) = &element.content {
        for child in children {
            if boundary.is_some_and(|b| b == child.tag) {
                continue;
            }
            if child.tag == tag {
                out.push(child);
            }
            collect_tag(child, tag, boundary, out);
        }
    }
}

/// IDs of the elements [`query_tag`] would return.
pub fn query_tag_ids(root: &Element, tag: &str, boundary: Option<&str>) -> Vec<String> {
    query_tag(root, tag, boundary)
        .into_iter()
        .map(|el| el.id.clone())
        .collect()
}

/// Whether the element with `id` is `root` or one of its descendants.
pub fn contains_element(root: &Element, id: &str) -> bool {
    find_element(root, id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_tag_document_order() {
        let root = Element::table()
            .id("t")
            .child(Element::thead().child(Element::tr().child(Element::th("A").id("a"))))
            .child(
                Element::tbody().child(
                    Element::tr()
                        .child(Element::th("B").id("b"))
                        .child(Element::td("1")),
                ),
            );

        assert_eq!(query_tag_ids(&root, "th", None), vec!["a", "b"]);
        assert!(query_tag(&root, "table", None).is_empty());
    }

    #[test]
    fn test_query_tag_respects_boundary() {
        let nested = Element::table().child(Element::tr().child(Element::th("inner").id("inner")));
        let root = Element::table()
            .child(Element::tr().child(Element::th("outer").id("outer")))
            .child(Element::tr().child(Element::new("td").child(nested)));

        assert_eq!(query_tag_ids(&root, "th", Some("table")), vec!["outer"]);
        assert_eq!(query_tag_ids(&root, "th", None), vec!["outer", "inner"]);
    }

    #[test]
    fn test_contains_element() {
        let root = Element::tr().id("row").child(Element::td("x").id("cell"));
        assert!(contains_element(&root, "row"));
        assert!(contains_element(&root, "cell"));
        assert!(!contains_element(&root, "other"));
    }
}
