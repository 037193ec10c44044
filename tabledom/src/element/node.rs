use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    /// Lowercase tag name (`table`, `tbody`, `tr`, `th`, ...).
    pub tag: String,

    // Content
    pub content: Content,

    // Presentation
    /// Class list in insertion order, without duplicates.
    pub classes: Vec<String>,

    // Interaction
    pub clickable: bool,

    // Custom data storage (dataset-style attributes, keys without the `data-` prefix)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: "div".to_string(),
            content: Content::None,
            classes: Vec::new(),
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            id: generate_id(&tag),
            tag,
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: "span".to_string(),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn table() -> Self {
        Self::new("table")
    }

    pub fn thead() -> Self {
        Self::new("thead")
    }

    pub fn tbody() -> Self {
        Self::new("tbody")
    }

    pub fn tr() -> Self {
        Self::new("tr")
    }

    /// Header cell with plain text content.
    pub fn th(content: impl Into<String>) -> Self {
        Self::new("th").content(Content::Text(content.into()))
    }

    /// Data cell with plain text content.
    pub fn td(content: impl Into<String>) -> Self {
        Self::new("td").content(Content::Text(content.into()))
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    // Classes
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.has_class(&class) {
            self.classes.push(class);
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    pub fn set_data(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.data.insert(key.into(), value.into());
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => {
                // Replace content with children
                self.content = Content::Children(vec![child]);
            }
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => {
                self.content = Content::Children(new_children.into_iter().collect());
            }
        }
        self
    }

    /// Direct children of this element (empty for text or empty content).
    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }

    /// Direct children with the given tag, in order.
    pub fn children_with_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.child_elements().iter().filter(move |c| c.tag == tag)
    }

    /// Concatenated text of this element and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match &self.content {
            Content::None => {}
            Content::Text(s) => out.push_str(s),
            Content::Children(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_unique() {
        let a = Element::td("a");
        let b = Element::td("b");
        assert_ne!(a.id, b.id);
        assert!(a.id.starts_with("td-"));
    }

    #[test]
    fn test_classes_do_not_duplicate() {
        let mut el = Element::th("Name").class("sortable").class("sortable");
        assert_eq!(el.classes, vec!["sortable".to_string()]);

        el.add_class("sorted-asc");
        el.remove_class("sortable");
        assert!(!el.has_class("sortable"));
        assert!(el.has_class("sorted-asc"));
    }

    #[test]
    fn test_text_content_is_recursive() {
        let cell = Element::new("td")
            .child(Element::text("12"))
            .child(Element::new("b").child(Element::text(".5")));
        assert_eq!(cell.text_content(), "12.5");
        assert_eq!(Element::tr().text_content(), "");
    }

    #[test]
    fn test_tag_is_lowercased() {
        assert_eq!(Element::new("TH").tag, "th");
    }
}
