//! Minimal HTML element model the renderers target.
//!
//! Components in this crate do not write to a live document; they produce
//! `Element` trees whose attributes carry the accessibility contract
//! (`id`, `for`, `aria-*`, `data-*`). Hosts serialize with [`Element::to_html`]
//! or walk the tree directly; tests assert on attributes via
//! [`Element::find`] and [`Element::attr_value`].
//!
//! Attribute order is deterministic: insertion order, last write wins in
//! place. Serialized output is therefore stable enough to compare as strings.

use std::fmt;

/// A tree node: element or text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

/// Elements that never take children and serialize without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "meta"];

/// An element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute. An existing attribute of the same name is replaced
    /// in place, keeping its position.
    pub fn attr(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        let name = name.into();
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Look up an attribute value.
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Append a child node.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children(mut self, children: Vec<Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first search over this element and its descendants.
    pub fn find<F>(&self, pred: F) -> Option<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        self.find_inner(&pred)
    }

    fn find_inner(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            Node::Element(e) => e.find_inner(pred),
            Node::Text(_) => None,
        })
    }

    /// All descendants (and self) matching the predicate, depth-first.
    pub fn find_all<F>(&self, pred: F) -> Vec<&Element>
    where
        F: Fn(&Element) -> bool,
    {
        let mut out = Vec::new();
        self.collect_inner(&pred, &mut out);
        out
    }

    fn collect_inner<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(e) = child {
                e.collect_inner(pred, out);
            }
        }
    }

    /// Concatenated text content of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.text_inner(&mut out);
        out
    }

    fn text_inner(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.text_inner(out),
            }
        }
    }

    /// Serialize to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out)
            .expect("writing to a String cannot fail");
        out
    }

    fn write_html(&self, out: &mut String) -> fmt::Result {
        use fmt::Write;

        write!(out, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(out, " {}=\"{}\"", name, escape_attr(value))?;
        }
        if VOID_TAGS.contains(&self.tag.as_str()) {
            write!(out, ">")?;
            return Ok(());
        }
        write!(out, ">")?;
        for child in &self.children {
            match child {
                Node::Text(t) => write!(out, "{}", escape_text(t))?,
                Node::Element(e) => e.write_html(out)?,
            }
        }
        write!(out, "</{}>", self.tag)
    }
}

fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn serializes_attributes_in_insertion_order() {
        let el = Element::new("label")
            .attr("for", "f1")
            .attr("data-error", false)
            .child("Name");
        assert_eq!(el.to_html(), r#"<label for="f1" data-error="false">Name</label>"#);
    }

    #[test]
    fn attr_overwrite_keeps_position() {
        let el = Element::new("div").attr("id", "a").attr("class", "x").attr("id", "b");
        assert_eq!(el.to_html(), r#"<div id="b" class="x"></div>"#);
    }

    #[test]
    fn void_tags_do_not_close() {
        let el = Element::new("input").attr("type", "email");
        assert_eq!(el.to_html(), r#"<input type="email">"#);
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let el = Element::new("p")
            .attr("title", "a\"b<c")
            .child("1 < 2 & 3 > 2");
        assert_eq!(
            el.to_html(),
            r#"<p title="a&quot;b&lt;c">1 &lt; 2 &amp; 3 &gt; 2</p>"#
        );
    }

    #[test]
    fn find_walks_depth_first() {
        let tree = Element::new("form").child(
            Element::new("div")
                .attr("data-slot", "form-item")
                .child(Element::new("label").attr("for", "x")),
        );
        let label = tree.find(|e| e.tag() == "label").unwrap();
        assert_eq!(label.attr_value("for"), Some("x"));
        assert!(tree.find(|e| e.tag() == "select").is_none());
    }

    #[test]
    fn text_content_concatenates() {
        let el = Element::new("p").child("a").child(Element::new("b").child("c"));
        assert_eq!(el.text_content(), "ac");
    }
}
