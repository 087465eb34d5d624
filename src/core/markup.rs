// LogCard - core/markup.rs
//
// Detached HTML node tree used to assemble cards and pages.
// Core layer: pure data plus string serialisation, no I/O.
//
// Content enters the tree in one of two modes:
//   - `Node::Text`   -- always escaped on output.
//   - `Node::Markup` -- trusted, emitted verbatim. The caller owns sanitising.

use std::fmt;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["hr", "br", "img", "input", "meta", "link"];

/// Escape text for use in HTML element content or a quoted attribute value.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// =============================================================================
// Nodes
// =============================================================================

/// One node in a detached tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    /// Literal text, escaped when rendered.
    Text(String),
    /// Trusted markup, rendered verbatim.
    Markup(String),
}

impl Node {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn markup(s: impl Into<String>) -> Self {
        Self::Markup(s.into())
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Self::Element(e) => e.render_into(out),
            Self::Text(t) => out.push_str(&escape_text(t)),
            Self::Markup(m) => out.push_str(m),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Self::Element(e)
    }
}

// =============================================================================
// Elements
// =============================================================================

/// An HTML element with a class list, an optional id, and ordered children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add every whitespace-separated class in `classes`, skipping any the
    /// element already has.
    pub fn with_class(mut self, classes: &str) -> Self {
        self.add_class(classes);
        self
    }

    pub fn add_class(&mut self, classes: &str) {
        for class in classes.split_whitespace() {
            if !self.has_class(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set a plain attribute. The value is escaped on output.
    pub fn with_attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Builder form of `append`.
    pub fn with_child(mut self, node: impl Into<Node>) -> Self {
        self.append(node);
        self
    }

    /// Append a child node. Children of void elements are never rendered.
    pub fn append(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Direct children that are elements, in order.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            _ => None,
        })
    }

    /// The `index`-th direct element child.
    pub fn child_element(&self, index: usize) -> Option<&Element> {
        self.element_children().nth(index)
    }

    /// This element and every element below it, depth-first in document order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.element_children() {
            out.extend(child.descendants());
        }
        out
    }

    /// Concatenated raw text and markup below this element, unescaped.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(e) => out.push_str(&e.text_content()),
                Node::Text(t) => out.push_str(t),
                Node::Markup(m) => out.push_str(m),
            }
        }
        out
    }

    /// Serialised children, as a browser's `innerHTML` would show them.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.render_into(&mut out);
        }
        out
    }

    /// Serialise this element and its subtree to an HTML string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if let Some(ref id) = self.id {
            out.push_str(" id=\"");
            out.push_str(&escape_text(id));
            out.push('"');
        }
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape_text(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_text(value));
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.render_into(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a < b"), "a &lt; b");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text("\"q\" 'a'"), "&quot;q&quot; &#39;a&#39;");
        assert_eq!(escape_text("<script>"), "&lt;script&gt;");
    }

    #[test]
    fn test_text_is_escaped_markup_is_not() {
        let p = Element::new("p")
            .with_child(Node::text("<b>x</b>"))
            .with_child(Node::markup("<i>y</i>"));
        assert_eq!(p.render(), "<p>&lt;b&gt;x&lt;/b&gt;<i>y</i></p>");
    }

    #[test]
    fn test_add_class_splits_and_deduplicates() {
        let div = Element::new("div")
            .with_class("flex  items-center")
            .with_class("items-center justify-between");
        assert_eq!(div.classes(), &["flex", "items-center", "justify-between"]);
        assert!(div.has_class("justify-between"));
        assert!(!div.has_class("flex-col"));
    }

    #[test]
    fn test_void_element_has_no_closing_tag() {
        let hr = Element::new("hr").with_class("border-t");
        assert_eq!(hr.render(), "<hr class=\"border-t\">");
    }

    #[test]
    fn test_empty_element_without_classes() {
        assert_eq!(Element::new("div").render(), "<div></div>");
    }

    #[test]
    fn test_id_and_attributes_are_escaped() {
        let el = Element::new("script")
            .with_id("a\"b")
            .with_attr("src", "https://x/?a=1&b=2");
        assert_eq!(
            el.render(),
            "<script id=\"a&quot;b\" src=\"https://x/?a=1&amp;b=2\"></script>"
        );
    }

    #[test]
    fn test_descendants_in_document_order() {
        let tree = Element::new("div")
            .with_child(Element::new("h3").with_child(Node::text("t")))
            .with_child(Element::new("p").with_child(Element::new("b")));
        let tags: Vec<_> = tree.descendants().iter().map(|e| e.tag()).collect();
        assert_eq!(tags, vec!["div", "h3", "p", "b"]);
    }

    #[test]
    fn test_text_content_and_inner_html() {
        let p = Element::new("p")
            .with_child(Node::text("1 < 2"))
            .with_child(Node::markup("&nbsp;"));
        assert_eq!(p.text_content(), "1 < 2&nbsp;");
        assert_eq!(p.inner_html(), "1 &lt; 2&nbsp;");
        assert_eq!(p.to_string(), "<p>1 &lt; 2&nbsp;</p>");
    }
}
