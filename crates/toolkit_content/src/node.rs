//! Minimal render tree
//!
//! Renderers build [`Node`] trees with a chained builder API. A tree
//! serializes to HTML (escaped with `html-escape`) or to indented plain text
//! for terminals.

use html_escape::{encode_double_quoted_attribute, encode_text};

/// A child of an element
#[derive(Clone, Debug, PartialEq)]
pub enum Child {
    Element(Node),
    Text(String),
}

/// An element with attributes, inline styles, and children
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: &'static str,
    attrs: Vec<(String, String)>,
    styles: Vec<(&'static str, String)>,
    children: Vec<Child>,
    /// Stand-in used by the plain-text serializer for purely visual elements
    text_alt: Option<String>,
}

/// Create a node with the given tag
pub fn el(tag: &'static str) -> Node {
    Node::new(tag)
}

pub fn div() -> Node {
    Node::new("div")
}

pub fn span() -> Node {
    Node::new("span")
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            styles: Vec::new(),
            children: Vec::new(),
            text_alt: None,
        }
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Add an inline style declaration
    pub fn style(mut self, property: &'static str, value: impl Into<String>) -> Self {
        self.styles.push((property, value.into()));
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(Child::Element(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children
            .extend(children.into_iter().map(Child::Element));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Child::Text(text.into()));
        self
    }

    /// Text emitted in place of this node's content by [`Node::to_text`]
    pub fn text_alt(mut self, alt: impl Into<String>) -> Self {
        self.text_alt = Some(alt.into());
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_style(&self, property: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn child_nodes(&self) -> impl Iterator<Item = &Node> {
        self.children.iter().filter_map(|c| match c {
            Child::Element(n) => Some(n),
            Child::Text(_) => None,
        })
    }

    /// Depth-first search for descendants (and self) with a given tag
    pub fn find_all(&self, tag: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_tag(tag, &mut found);
        found
    }

    fn collect_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Node>) {
        if self.tag == tag {
            found.push(self);
        }
        for child in self.child_nodes() {
            child.collect_tag(tag, found);
        }
    }

    /// Concatenated text content, ignoring `text_alt`
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Child::Text(t) => out.push_str(t),
                Child::Element(n) => out.push_str(&n.text_content()),
            }
        }
        out
    }

    fn is_block(&self) -> bool {
        matches!(
            self.tag,
            "div" | "p" | "h1" | "h2" | "h3" | "h4" | "ul" | "ol" | "li" | "section" | "article"
                | "header" | "footer" | "pre"
        )
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "br" | "hr" | "img")
    }

    // ========== HTML ==========

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&encode_double_quoted_attribute(value));
            out.push('"');
        }
        if !self.styles.is_empty() {
            let css: Vec<String> = self
                .styles
                .iter()
                .map(|(p, v)| format!("{p}: {v}"))
                .collect();
            out.push_str(" style=\"");
            out.push_str(&encode_double_quoted_attribute(&css.join("; ")));
            out.push('"');
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            match child {
                Child::Text(t) => out.push_str(&encode_text(t)),
                Child::Element(n) => n.write_html(out),
            }
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }

    // ========== Plain text ==========

    /// Plain-text rendering: block elements on their own lines, nested list
    /// items indented by two spaces per level.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out, 0);
        let trimmed = out.trim_end();
        let mut text = trimmed.to_string();
        text.push('\n');
        text
    }

    fn write_text(&self, out: &mut String, list_depth: usize) {
        if let Some(alt) = &self.text_alt {
            out.push_str(alt);
            return;
        }
        let block = self.is_block();
        if block && !out.is_empty() && !out.ends_with('\n') {
            out.push('\n');
        }
        if self.tag == "li" {
            out.push_str(&"  ".repeat(list_depth.saturating_sub(1)));
        }
        if self.tag == "br" {
            out.push('\n');
        }
        let depth = if matches!(self.tag, "ul" | "ol") {
            list_depth + 1
        } else {
            list_depth
        };
        for child in &self.children {
            match child {
                Child::Text(t) => out.push_str(t),
                Child::Element(n) => n.write_text(out, depth),
            }
        }
        if block && !out.ends_with('\n') {
            out.push('\n');
        }
        if matches!(self.tag, "p" | "h1" | "h2" | "h3" | "h4" | "ul" | "ol") && depth <= 1 {
            out.push('\n');
        }
    }
}
