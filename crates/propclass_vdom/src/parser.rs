//! HTML parser for converting markup into virtual DOM nodes
//!
//! Comments and whitespace-only text are dropped. `data-key` attributes are
//! lifted into [`VNode::key`].

use crate::{Child, VNode};
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use indexmap::IndexMap;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use propclass_core::{PropClassError, Result};

/// Parse HTML and return its first element.
pub fn parse_html(html: &str) -> Result<VNode> {
    parse_body_nodes(html)?
        .into_iter()
        .find(VNode::is_element)
        .ok_or_else(|| PropClassError::ParseError("No element found in markup".to_string()))
}

/// Parse HTML into an ordered sequence of children.
///
/// Top-level text becomes [`Child::Text`], elements become [`Child::Element`].
pub fn parse_children(html: &str) -> Result<Vec<Child>> {
    let children: Vec<Child> = parse_body_nodes(html)?
        .into_iter()
        .map(Child::from)
        .collect();
    tracing::debug!(count = children.len(), "parsed children from markup");
    Ok(children)
}

/// Convert the contents of `<body>`. Must run before `dom` drops: `RcDom`
/// empties every node it owns on drop.
fn parse_body_nodes(html: &str) -> Result<Vec<VNode>> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| PropClassError::ParseError(format!("Failed to parse HTML: {e}")))?;

    let body = find_body(&dom.document)
        .ok_or_else(|| PropClassError::ParseError("Parsed document has no <body>".to_string()))?;
    Ok(convert_children(&body))
}

fn find_body(document: &Handle) -> Option<Handle> {
    // html5ever wraps fragments in <html><head/><body>content</body></html>
    let html = first_element_named(document, "html")?;
    first_element_named(&html, "body")
}

fn first_element_named(handle: &Handle, tag: &str) -> Option<Handle> {
    handle
        .children
        .borrow()
        .iter()
        .find(|child| matches!(&child.data, NodeData::Element { name, .. } if name.local.as_ref() == tag))
        .cloned()
}

fn convert_children(handle: &Handle) -> Vec<VNode> {
    let mut children = Vec::new();
    for child in handle.children.borrow().iter() {
        match handle_to_vnode(child) {
            Some(node) => children.push(node),
            None => tracing::trace!("skipped comment or whitespace node"),
        }
    }
    children
}

fn handle_to_vnode(handle: &Handle) -> Option<VNode> {
    match &handle.data {
        NodeData::Text { contents } => {
            let text = contents.borrow().to_string();
            if text.chars().all(char::is_whitespace) {
                None
            } else {
                Some(VNode::text(text))
            }
        }

        NodeData::Element { name, attrs, .. } => {
            let mut vnode = VNode::element(name.local.to_string());

            let mut attributes = IndexMap::new();
            for attr in attrs.borrow().iter() {
                let attr_name = attr.name.local.to_string();
                let attr_value = attr.value.to_string();

                if attr_name == "data-key" && !attr_value.is_empty() {
                    vnode.key = Some(attr_value.clone());
                }
                attributes.insert(attr_name, attr_value);
            }
            vnode.attrs = attributes;
            vnode.children = convert_children(handle);

            Some(vnode)
        }

        _ => None,
    }
}
