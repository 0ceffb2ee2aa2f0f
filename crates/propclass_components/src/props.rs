//! Per-render component input

use propclass_core::{PropertyBag, Result, Value, AS_KEY, CLASS_NAME_KEY, DECORATE_KEY};
use propclass_vdom::Child;
use serde::de::DeserializeOwned;

/// Everything a caller hands to one render: the property bag (reserved
/// keys included) and the ordered children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: PropertyBag,
    children: Vec<Child>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bag(values: PropertyBag) -> Self {
        Self {
            values,
            children: Vec::new(),
        }
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.set(key, value);
        self
    }

    /// Render as `tag` instead of the component's default target.
    pub fn as_element(self, tag: impl Into<String>) -> Self {
        self.set(AS_KEY, Value::String(tag.into()))
    }

    pub fn decorate(self, decorate: bool) -> Self {
        self.set(DECORATE_KEY, decorate)
    }

    pub fn class_name(self, class: impl Into<String>) -> Self {
        self.set(CLASS_NAME_KEY, Value::String(class.into()))
    }

    pub fn child(mut self, child: impl Into<Child>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, C>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Child>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get_str(key)
    }

    pub fn values(&self) -> &PropertyBag {
        &self.values
    }

    pub fn child_nodes(&self) -> &[Child] {
        &self.children
    }

    /// Whether any child renders. `Null` entries do not count.
    pub fn has_children(&self) -> bool {
        self.children.iter().any(|c| !matches!(c, Child::Null))
    }

    pub fn is_decorating(&self) -> bool {
        self.values.is_decorating()
    }

    pub fn target(&self) -> Option<&str> {
        self.values.target()
    }

    pub fn external_class_name(&self) -> Option<String> {
        self.values.external_class_name()
    }

    /// Read the property bag as a typed struct.
    ///
    /// ```
    /// use propclass_components::Props;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct TextColor {
    ///     variant: String,
    /// }
    ///
    /// let props = Props::new().set("variant", "red");
    /// assert_eq!(props.extract::<TextColor>().unwrap().variant, "red");
    /// ```
    pub fn extract<T: DeserializeOwned>(&self) -> Result<T> {
        let json = serde_json::to_value(&self.values)?;
        Ok(serde_json::from_value(json)?)
    }
}
