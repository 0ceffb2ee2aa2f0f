//! Property-based tests for the host DOM using proptest.
//!
//! Tests three properties:
//! 1. Escaping: text and attribute values never leak markup characters
//! 2. Ref binding: every attached reference is bound, and its path resolves
//!    back to the node carrying it (fragments flattened)
//! 3. Class attribute: set_class_name/class_name agree for any input

use propclass_vdom::{mount_refs, NodeRef, VNode};
use proptest::prelude::*;

// ============================================================================
// Random VNode tree generators
// ============================================================================

const TAGS: &[&str] = &["div", "span", "p", "li", "ul", "a", "h1", "section"];

/// Generate a random tree where some elements carry a reference and some
/// children are grouped in fragments.
fn arb_tree_inner(max_depth: u32, current_depth: u32) -> BoxedStrategy<VNode> {
    let leaf = prop_oneof![
        "[a-zA-Z0-9 ]{1,20}".prop_map(VNode::text),
        (prop::sample::select(TAGS), any::<bool>()).prop_map(|(tag, with_ref)| {
            let node = VNode::element(tag);
            if with_ref {
                node.with_node_ref(NodeRef::new())
            } else {
                node
            }
        }),
    ];
    if current_depth >= max_depth {
        leaf.boxed()
    } else {
        prop_oneof![
            leaf,
            (
                prop::sample::select(TAGS),
                any::<bool>(),
                prop::collection::vec(arb_tree_inner(max_depth, current_depth + 1), 0..=5),
            )
                .prop_map(|(tag, with_ref, children)| {
                    let node = VNode::element(tag).with_children(children);
                    if with_ref {
                        node.with_node_ref(NodeRef::new())
                    } else {
                        node
                    }
                }),
            prop::collection::vec(arb_tree_inner(max_depth, current_depth + 1), 0..=4)
                .prop_map(VNode::fragment),
        ]
        .boxed()
    }
}

fn arb_tree() -> BoxedStrategy<VNode> {
    (0u32..=4)
        .prop_flat_map(|depth| arb_tree_inner(depth, 0))
        .boxed()
}

// ============================================================================
// Helpers
// ============================================================================

fn collect_refs(node: &VNode, out: &mut Vec<NodeRef>) {
    if let Some(node_ref) = &node.node_ref {
        out.push(node_ref.clone());
    }
    for child in &node.children {
        collect_refs(child, out);
    }
}

/// Children as they appear in the DOM, with fragments flattened.
fn dom_children(node: &VNode) -> Vec<&VNode> {
    let mut out = Vec::new();
    for child in &node.children {
        if child.is_fragment() {
            out.extend(dom_children(child));
        } else {
            out.push(child);
        }
    }
    out
}

fn resolve<'a>(root: &'a VNode, path: &[usize]) -> Option<&'a VNode> {
    let (first, rest) = match path.split_first() {
        None => return (!root.is_fragment()).then_some(root),
        Some(split) => split,
    };
    let mut node = *dom_children(root).get(*first)?;
    for index in rest {
        node = *dom_children(node).get(*index)?;
    }
    Some(node)
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property 1: escaped text never contains raw markup characters.
    #[test]
    fn text_is_escaped(text in "\\PC{0,40}") {
        let html = VNode::text(text.clone()).to_html();
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
        prop_assert!(!html.contains('"'));
    }

    /// Property 1b: attribute values cannot break out of their quotes.
    #[test]
    fn attr_is_escaped(value in "\\PC{1,40}") {
        let html = VNode::element("span").with_attr("title", value).to_html();
        let inner = html
            .strip_prefix("<span title=\"")
            .and_then(|rest| rest.strip_suffix("\"></span>"));
        prop_assert!(inner.is_some(), "unexpected html: {}", html);
        prop_assert!(!inner.unwrap_or_default().contains('"'));
    }

    /// Property 2: mount_refs binds all refs and each path leads back to its node.
    #[test]
    fn refs_resolve_to_their_nodes(tree in arb_tree()) {
        let mut refs = Vec::new();
        collect_refs(&tree, &mut refs);

        let bound = mount_refs(&tree);
        prop_assert_eq!(bound, refs.len());

        for node_ref in refs {
            let path = node_ref.current();
            prop_assert!(path.is_some());
            let path = path.unwrap_or_default();
            let target = resolve(&tree, &path);
            prop_assert!(target.is_some(), "path {:?} does not resolve", path);
            prop_assert_eq!(target.and_then(|n| n.node_ref.clone()), Some(node_ref));
        }
    }

    /// Property 3: the class attribute reads back what was written.
    #[test]
    fn class_name_round_trip(class in "[a-z -]{0,30}") {
        let mut node = VNode::element("div");
        node.set_class_name(class.clone());
        prop_assert_eq!(node.class_name(), class.as_str());
        prop_assert_eq!(node.attrs.contains_key("class"), !class.is_empty());
    }
}
