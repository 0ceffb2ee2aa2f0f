//! Components whose class name is derived from their properties.
//!
//! A [`ClassNameFactory`] is built once from a default target element, a
//! function that turns props into a class name, and a list of props that must
//! not reach the DOM. Each [`ClassNameFactory::render`] then produces either a
//! single element or, with `decorate`, a fragment of re-classed children.
//!
//! ```
//! use propclass_components::{ClassNameFactory, Props};
//!
//! let text_color = ClassNameFactory::new(
//!     "span",
//!     |p: &Props| p.get_str("variant").unwrap_or_default().to_string(),
//!     &["variant"],
//! );
//!
//! let out = text_color
//!     .render(&Props::new().set("variant", "red").child("red"), None)
//!     .unwrap();
//! assert_eq!(out.to_html(), r#"<span class="red">red</span>"#);
//! ```

use crate::config::ComponentConfig;
use crate::diagnostics::{Diagnostics, TracingDiagnostics, Warning};
use crate::props::Props;
use propclass_core::{class_names, PropClassError, Result};
use propclass_vdom::{Child, NodeRef, VNode};
use std::fmt;
use std::sync::Arc;

/// Name used in warnings and errors when none is configured.
pub const DEFAULT_COMPONENT_NAME: &str = "ClassNamifiedElement";

type ClassNameFn = dyn Fn(&Props) -> String + Send + Sync;

/// Output of a single render.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Normal mode: one element.
    Element(VNode),
    /// Decorate mode: the re-classed children, without a wrapper.
    Fragment(Vec<VNode>),
}

impl Rendered {
    pub fn as_element(&self) -> Option<&VNode> {
        match self {
            Rendered::Element(node) => Some(node),
            Rendered::Fragment(_) => None,
        }
    }

    /// Top-level nodes as they land in the parent.
    pub fn nodes(&self) -> &[VNode] {
        match self {
            Rendered::Element(node) => std::slice::from_ref(node),
            Rendered::Fragment(nodes) => nodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// Convert into a single node that can be placed as a child.
    pub fn into_vnode(self) -> VNode {
        match self {
            Rendered::Element(node) => node,
            Rendered::Fragment(nodes) => VNode::fragment(nodes),
        }
    }

    pub fn to_html(&self) -> String {
        self.nodes().iter().map(VNode::to_html).collect()
    }
}

impl From<Rendered> for Child {
    fn from(rendered: Rendered) -> Self {
        Child::Element(rendered.into_vnode())
    }
}

/// A reusable component definition.
///
/// Cloning is cheap; the class-name function and diagnostics sink are shared.
#[derive(Clone)]
pub struct ClassNameFactory {
    name: String,
    default_target: String,
    class_name: Arc<ClassNameFn>,
    omit: Vec<String>,
    diagnostics: Arc<dyn Diagnostics>,
}

impl ClassNameFactory {
    pub fn new<F, K>(default_target: impl Into<String>, class_name: F, omit: &[K]) -> Self
    where
        F: Fn(&Props) -> String + Send + Sync + 'static,
        K: AsRef<str>,
    {
        Self {
            name: DEFAULT_COMPONENT_NAME.to_string(),
            default_target: default_target.into(),
            class_name: Arc::new(class_name),
            omit: omit.iter().map(|k| k.as_ref().to_string()).collect(),
            diagnostics: Arc::new(TracingDiagnostics),
        }
    }

    pub fn from_config<F>(config: ComponentConfig, class_name: F) -> Self
    where
        F: Fn(&Props) -> String + Send + Sync + 'static,
    {
        let factory = Self::new(config.default_target, class_name, config.omit.as_slice());
        match config.name {
            Some(name) => factory.with_name(name),
            None => factory,
        }
    }

    /// Name shown in warnings and errors.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_target(&self) -> &str {
        &self.default_target
    }

    pub fn omit_keys(&self) -> &[String] {
        &self.omit
    }

    /// Render once.
    ///
    /// Fails only when `decorate` is set and a node reference is passed: a
    /// decorated render has no single element to attach it to. Any
    /// `Some(node_ref)` counts, bound or not.
    pub fn render(&self, props: &Props, node_ref: Option<&NodeRef>) -> Result<Rendered> {
        let decorate = props.is_decorating();

        if decorate && node_ref.is_some() {
            return Err(PropClassError::RefWithDecorate {
                component: self.name.clone(),
            });
        }
        if decorate && props.target().is_some() {
            self.diagnostics
                .warn(&self.name, Warning::AsIgnoredWhenDecorating);
        }
        if decorate && !props.has_children() {
            self.diagnostics
                .warn(&self.name, Warning::DecorateWithoutChildren);
        }

        let computed = (self.class_name)(props);
        let external = props.external_class_name();

        if decorate {
            tracing::trace!(component = %self.name, "decorating children");
            return Ok(Rendered::Fragment(decorate_children(
                props.child_nodes(),
                external.as_deref(),
                &computed,
            )));
        }

        let tag = props.target().unwrap_or(&self.default_target);
        tracing::trace!(component = %self.name, tag, "rendering element");

        let children = props
            .child_nodes()
            .iter()
            .cloned()
            .filter_map(Child::into_node)
            .collect();
        let mut node = VNode::element(tag)
            .with_props(props.values().clean(self.omit.as_slice()))
            .with_children(children);
        node.set_class_name(class_names([external.as_deref(), Some(computed.as_str())]));
        if let Some(node_ref) = node_ref {
            node = node.with_node_ref(node_ref.clone());
        }

        Ok(Rendered::Element(node))
    }
}

/// Clone each element child with the merged class; drop everything else.
fn decorate_children(children: &[Child], external: Option<&str>, computed: &str) -> Vec<VNode> {
    children
        .iter()
        .filter_map(Child::as_element)
        .map(|el| {
            let class = class_names([Some(el.class_name()), external, Some(computed)]);
            let mut clone = el.clone();
            clone.set_class_name(class);
            clone
        })
        .collect()
}

impl fmt::Debug for ClassNameFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassNameFactory")
            .field("name", &self.name)
            .field("default_target", &self.default_target)
            .field("omit", &self.omit)
            .finish_non_exhaustive()
    }
}

/// Shorthand for [`ClassNameFactory::new`].
pub fn props_to_class_name<F, K>(
    default_target: impl Into<String>,
    class_name: F,
    omit: &[K],
) -> ClassNameFactory
where
    F: Fn(&Props) -> String + Send + Sync + 'static,
    K: AsRef<str>,
{
    ClassNameFactory::new(default_target, class_name, omit)
}
