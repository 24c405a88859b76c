//! A minimal, stateless HTML node tree.
//!
//! Nodes are built with [`el`] and serialized through `Display`. Text and
//! attribute values are always escaped; there is no raw-HTML node.

mod escape;

pub use escape::{escape_attr, escape_text};

use std::fmt;

/// Elements serialized without children or a closing tag.
const VOID_TAGS: &[&str] = &["br"];

/// Properties that can be set on an element at construction time.
///
/// `text` becomes the element's first child, ahead of any children passed to
/// [`el`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Props {
    id: Option<String>,
    class: Option<String>,
    href: Option<String>,
    text: Option<String>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

/// Build an element node from a tag, its properties, and trailing children.
pub fn el(tag: &'static str, props: Props, children: impl IntoIterator<Item = Node>) -> Node {
    let Props {
        id,
        class,
        href,
        text,
    } = props;

    let attrs = [("id", id), ("class", class), ("href", href)]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect();

    let children = text.map(Node::Text).into_iter().chain(children).collect();

    Node::Element(Element {
        tag,
        attrs,
        children,
    })
}

/// Build a text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            Self::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all of its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(s) => out.push_str(s),
            Self::Element(e) => e.children.iter().for_each(|c| c.collect_text(out)),
        }
    }
}

impl Element {
    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().filter_map(Node::as_element)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(&escape_text(s)),
            Self::Element(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag)?;
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_attr(value))?;
        }
        f.write_str(">")?;
        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }
        for child in &self.children {
            fmt::Display::fmt(child, f)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};

    #[test]
    fn text_precedes_children() {
        let node = el(
            "h1",
            Props::new().text("UDFs"),
            [el("a", Props::new().href("#udfs").class("headerLink").text("¶"), [])],
        );
        check!(node.to_string() == r##"<h1>UDFs<a class="headerLink" href="#udfs">¶</a></h1>"##);
    }

    #[test]
    fn attributes_serialize_in_fixed_order() {
        let node = el("a", Props::new().href("#x").class("c").id("i"), []);
        check!(node.to_string() == r##"<a id="i" class="c" href="#x"></a>"##);
    }

    #[test]
    fn br_has_no_closing_tag() {
        let node = el("p", Props::new().text("a"), [el("br", Props::new(), []), text("b")]);
        check!(node.to_string() == "<p>a<br>b</p>");
    }

    #[test]
    fn escapes_text_and_attributes() {
        let node = el("p", Props::new().id("a\"b"), [text("<script>&")]);
        check!(node.to_string() == r#"<p id="a&quot;b">&lt;script&gt;&amp;</p>"#);
    }

    #[test]
    fn construction_is_independent() {
        let first = el("div", Props::new().class("x"), []);
        let second = el("div", Props::new().class("x"), []);
        check!(first == second);

        let_assert!(Some(e) = first.as_element());
        check!(e.tag() == "div");
        check!(e.attr("class") == Some("x"));
        check!(e.attr("id").is_none());
        check!(e.children().is_empty());
    }

    #[test]
    fn text_content_walks_descendants() {
        let node = el(
            "p",
            Props::new(),
            [el("strong", Props::new().text("a"), []), text(" - (b) c")],
        );
        check!(node.text_content() == "a - (b) c");
    }
}
