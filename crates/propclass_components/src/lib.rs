//! Components that derive their CSS class from their properties.
//!
//! A component renders either one element carrying the computed class, or,
//! in decorate mode, its element children with the class merged in.

pub mod config;
pub mod diagnostics;
pub mod factory;
pub mod props;

pub use config::ComponentConfig;
pub use diagnostics::{CollectedWarnings, Diagnostics, TracingDiagnostics, Warning};
pub use factory::{props_to_class_name, ClassNameFactory, Rendered, DEFAULT_COMPONENT_NAME};
pub use props::Props;

pub use propclass_core::{class_names, PropClassError, PropertyBag, Result, Value};
pub use propclass_vdom::{mount_refs, parse_children, Child, NodeRef, VNode};
