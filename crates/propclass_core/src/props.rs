//! Property bags and reserved-key stripping
//!
//! A [`PropertyBag`] carries everything a caller passes to a component,
//! including the reserved control keys. [`CleanProps`] is what is left after
//! the reserved keys and a component's omit list are removed; only that type
//! may be spread onto a rendered element.

use crate::classes::class_value;
use crate::Value;
use ahash::AHashSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Selects the element to render instead of the default target.
pub const AS_KEY: &str = "as";
/// Switches a component into child-decoration mode.
pub const DECORATE_KEY: &str = "decorate";
/// Externally supplied class name merged ahead of the computed one.
pub const CLASS_NAME_KEY: &str = "className";

/// Keys interpreted by the component itself and never forwarded.
pub const RESERVED_KEYS: [&str; 3] = [AS_KEY, CLASS_NAME_KEY, DECORATE_KEY];

/// Copy `map` without the keys in `exclude`, keeping insertion order.
pub fn remove_keys<K: AsRef<str>>(
    map: &IndexMap<String, Value>,
    exclude: &[K],
) -> IndexMap<String, Value> {
    let excluded: AHashSet<&str> = exclude.iter().map(AsRef::as_ref).collect();
    map.iter()
        .filter(|(key, _)| !excluded.contains(key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyBag {
    entries: IndexMap<String, Value>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The `as` override, if it names a target.
    pub fn target(&self) -> Option<&str> {
        self.get_str(AS_KEY).filter(|tag| !tag.is_empty())
    }

    pub fn is_decorating(&self) -> bool {
        self.get(DECORATE_KEY).is_some_and(Value::is_truthy)
    }

    /// The externally passed `className`, flattened to a class string.
    pub fn external_class_name(&self) -> Option<String> {
        self.get(CLASS_NAME_KEY)
            .map(class_value)
            .filter(|class| !class.is_empty())
    }

    /// Strip reserved keys and `omit` to get the set that may reach the output.
    pub fn clean<K: AsRef<str>>(&self, omit: &[K]) -> CleanProps {
        let mut exclude: Vec<&str> = RESERVED_KEYS.to_vec();
        exclude.extend(omit.iter().map(AsRef::as_ref));
        CleanProps {
            entries: remove_keys(&self.entries, exclude.as_slice()),
        }
    }

    pub fn as_map(&self) -> &IndexMap<String, Value> {
        &self.entries
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for PropertyBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Properties with every reserved and omitted key removed.
///
/// Built only by [`PropertyBag::clean`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanProps {
    entries: IndexMap<String, Value>,
}

impl CleanProps {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl IntoIterator for CleanProps {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
