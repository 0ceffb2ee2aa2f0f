//! Class-name merging
//!
//! Joins class fragments with a single space. Missing and empty fragments are
//! skipped; duplicates are kept as given.

use crate::Value;

/// Merge an ordered sequence of optional class fragments into one class string.
///
/// ```
/// use propclass_core::class_names;
///
/// assert_eq!(class_names([Some("btn"), None, Some(""), Some("btn-red")]), "btn btn-red");
/// ```
pub fn class_names<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts.into_iter().flatten() {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Class string for a property value.
///
/// Strings and non-zero numbers are used as-is, lists are flattened, objects
/// contribute the keys whose values are truthy. Null and booleans add nothing.
pub fn class_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(_) | Value::Float(_) if value.is_truthy() => value.to_string(),
        Value::List(items) => class_names(items.iter().map(|item| Some(class_value(item)))),
        Value::Object(map) => class_names(
            map.iter()
                .map(|(key, flag)| flag.is_truthy().then_some(key.as_str())),
        ),
        _ => String::new(),
    }
}
