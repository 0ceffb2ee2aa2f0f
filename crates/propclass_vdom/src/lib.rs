//! Virtual DOM used as the host for class-named components
//!
//! This crate provides element creation, cloning, child classification,
//! HTML output, markup parsing and node-reference binding.

use indexmap::IndexMap;
use propclass_core::{CleanProps, Result, Value};
use serde::{Deserialize, Serialize};

pub mod child;
pub mod node_ref;
pub mod parser;

pub use child::Child;
pub use node_ref::{mount_refs, NodeRef};

const TEXT_TAG: &str = "#text";
const FRAGMENT_TAG: &str = "#fragment";

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VNode {
    pub tag: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<VNode>,
    pub text: Option<String>,
    pub key: Option<String>,
    #[serde(skip)]
    pub node_ref: Option<NodeRef>,
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
            text: None,
            key: None,
            node_ref: None,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            text: Some(content.into()),
            ..Self::element(TEXT_TAG)
        }
    }

    /// A group of siblings rendered without a wrapping element.
    pub fn fragment(children: Vec<VNode>) -> Self {
        Self::element(FRAGMENT_TAG).with_children(children)
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    /// Spread stripped component properties onto this element as attributes.
    ///
    /// `null` and `false` are left out, `true` becomes a boolean attribute,
    /// lists and objects are written as JSON.
    pub fn with_props(mut self, props: CleanProps) -> Self {
        for (key, value) in props {
            if let Some(attr) = attr_value(&value) {
                self.attrs.insert(key, attr);
            }
        }
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_children(mut self, children: Vec<VNode>) -> Self {
        self.children = children;
        self
    }

    pub fn with_node_ref(mut self, node_ref: NodeRef) -> Self {
        self.node_ref = Some(node_ref);
        self
    }

    /// Copy this node with some attributes overridden. Children, key and any
    /// attached reference are kept.
    pub fn clone_with_attrs<K, V, I>(&self, attrs: I) -> VNode
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut node = self.clone();
        for (key, value) in attrs {
            node.attrs.insert(key.into(), value.into());
        }
        node
    }

    pub fn is_text(&self) -> bool {
        self.tag == TEXT_TAG
    }

    pub fn is_fragment(&self) -> bool {
        self.tag == FRAGMENT_TAG
    }

    pub fn is_element(&self) -> bool {
        !self.is_text() && !self.is_fragment()
    }

    /// The `class` attribute, or `""` when unset.
    pub fn class_name(&self) -> &str {
        self.attrs.get("class").map_or("", String::as_str)
    }

    /// Replace the `class` attribute. An empty class removes it.
    pub fn set_class_name(&mut self, class: impl Into<String>) {
        let class = class.into();
        if class.is_empty() {
            self.attrs.shift_remove("class");
        } else {
            self.attrs.insert("class".to_string(), class);
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        if self.is_text() {
            out.push_str(&html_escape(self.text.as_deref().unwrap_or("")));
            return;
        }
        if self.is_fragment() {
            for child in &self.children {
                child.write_html(out);
            }
            return;
        }

        out.push('<');
        out.push_str(&self.tag);
        for (key, value) in &self.attrs {
            out.push(' ');
            out.push_str(key);
            if !value.is_empty() {
                out.push_str("=\"");
                out.push_str(&html_escape(value));
                out.push('"');
            }
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

fn attr_value(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some(String::new()),
        Value::List(_) | Value::Object(_) => serde_json::to_string(value).ok(),
        other => Some(other.to_string()),
    }
}

/// HTML escape function for safety
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Parse HTML into a virtual DOM
pub fn parse_html(html: &str) -> Result<VNode> {
    parser::parse_html(html)
}

/// Parse HTML into a sequence of children
pub fn parse_children(html: &str) -> Result<Vec<Child>> {
    parser::parse_children(html)
}
