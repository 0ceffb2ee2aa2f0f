//! Renderable children
//!
//! Only [`Child::Element`] counts as a valid element: it is the one variant
//! that can be cloned and given new attributes.

use crate::VNode;

#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Element(VNode),
    Text(String),
    Null,
}

impl Child {
    pub fn is_valid_element(&self) -> bool {
        matches!(self, Child::Element(_))
    }

    pub fn as_element(&self) -> Option<&VNode> {
        match self {
            Child::Element(node) => Some(node),
            _ => None,
        }
    }

    /// Convert into a node for placement inside a parent. `Null` renders nothing.
    pub fn into_node(self) -> Option<VNode> {
        match self {
            Child::Element(node) => Some(node),
            Child::Text(text) => Some(VNode::text(text)),
            Child::Null => None,
        }
    }
}

impl From<VNode> for Child {
    fn from(node: VNode) -> Self {
        if node.is_text() {
            Child::Text(node.text.unwrap_or_default())
        } else {
            Child::Element(node)
        }
    }
}

impl From<&str> for Child {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl From<String> for Child {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

impl<T: Into<Child>> From<Option<T>> for Child {
    fn from(child: Option<T>) -> Self {
        child.map_or(Child::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_elements_are_valid() {
        assert!(Child::from(VNode::element("li")).is_valid_element());
        assert!(!Child::from("text").is_valid_element());
        assert!(!Child::Null.is_valid_element());
    }

    #[test]
    fn test_text_vnode_becomes_text_child() {
        let child = Child::from(VNode::text("hello"));
        assert_eq!(child, Child::Text("hello".to_string()));
    }

    #[test]
    fn test_into_node() {
        assert_eq!(Child::Null.into_node(), None);
        let node = Child::from("red").into_node().unwrap();
        assert!(node.is_text());
        assert_eq!(node.text_content(), "red");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Child::from(None::<VNode>), Child::Null);
        assert!(Child::from(Some(VNode::element("b"))).is_valid_element());
    }
}
