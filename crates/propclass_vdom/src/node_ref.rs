//! Node references
//!
//! A [`NodeRef`] is attached to at most one element of a rendered tree.
//! [`mount_refs`] binds each attached reference to the element's position,
//! given as the child-index path from the root. Fragments add no level to
//! the path: their children take consecutive indices in the parent.

use crate::VNode;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct NodeRef {
    slot: Arc<RwLock<Option<Vec<usize>>>>,
}

impl NodeRef {
    /// An unbound reference.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the element this reference is bound to.
    pub fn current(&self) -> Option<Vec<usize>> {
        self.slot.read().clone()
    }

    pub fn is_bound(&self) -> bool {
        self.slot.read().is_some()
    }

    pub fn clear(&self) {
        *self.slot.write() = None;
    }

    fn bind(&self, path: Vec<usize>) {
        *self.slot.write() = Some(path);
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("current", &self.current())
            .finish()
    }
}

/// Bind every reference attached in `root`. Returns how many were bound.
pub fn mount_refs(root: &VNode) -> usize {
    let mut bound = 0;
    if root.is_fragment() {
        let mut next = 0;
        mount_siblings(&root.children, &[], &mut next, &mut bound);
    } else {
        mount_node(root, Vec::new(), &mut bound);
    }
    tracing::trace!(bound, "mounted node refs");
    bound
}

fn mount_node(node: &VNode, path: Vec<usize>, bound: &mut usize) {
    if let Some(node_ref) = &node.node_ref {
        node_ref.bind(path.clone());
        *bound += 1;
    }
    let mut next = 0;
    mount_siblings(&node.children, &path, &mut next, bound);
}

fn mount_siblings(nodes: &[VNode], parent: &[usize], next: &mut usize, bound: &mut usize) {
    for node in nodes {
        if node.is_fragment() {
            mount_siblings(&node.children, parent, next, bound);
            continue;
        }
        let mut path = parent.to_vec();
        path.push(*next);
        *next += 1;
        mount_node(node, path, bound);
    }
}
