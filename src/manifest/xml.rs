/// Minimal XML writer for metadata descriptors.
///
/// Renders the exact shape the metadata API tooling expects: declaration
/// line, 4-space indentation, one element per line, elements with text
/// content inlined on a single line. Not a general-purpose XML library.
use std::fmt::Write;

const INDENT: &str = "    ";

/// An XML element: attributes plus either text content or child elements.
#[derive(Debug, Clone, Default)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// A new element with no attributes, children, or text.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            ..Self::default()
        }
    }

    /// A leaf element holding text content.
    #[must_use]
    pub fn text(name: &str, content: &str) -> Self {
        Self {
            name: name.to_owned(),
            text: Some(content.to_owned()),
            ..Self::default()
        }
    }

    /// Add an attribute (builder style).
    #[must_use]
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Add a child element (builder style).
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child element.
    pub fn push(&mut self, child: Element) {
        self.children.push(child);
    }

    fn render(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape_attribute(value));
        }
        if let Some(text) = &self.text {
            let _ = writeln!(out, ">{}</{}>", escape_text(text), self.name);
        } else if self.children.is_empty() {
            out.push_str("/>\n");
        } else {
            out.push_str(">\n");
            for child in &self.children {
                child.render(depth + 1, out);
            }
            for _ in 0..depth {
                out.push_str(INDENT);
            }
            let _ = writeln!(out, "</{}>", self.name);
        }
    }
}

/// A document: declaration line plus one root element.
#[derive(Debug, Clone)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wrap `root` into a document.
    #[must_use]
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Serialize with declaration, 4-space indent, newline-terminated lines.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("<?xml version=\"1.0\" ?>\n");
        self.root.render(0, &mut out);
        out
    }
}

fn escape_text(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
