//! Configuration objects passed to component constructors and updates.

use metal_dom::Element;
use serde_json::{Map, Value};

/// The attribute map carried by a configuration-mode plugin call.
pub type AttrMap = Map<String, Value>;

/// Configuration handed to a component constructor or attribute update.
///
/// The host element rides alongside the attribute map rather than inside it:
/// elements are node handles, not JSON values. The adapter always fills in
/// `element` with the node the instance is attached to, replacing anything
/// the caller supplied.
#[derive(Clone, Debug, Default)]
pub struct ComponentConfig {
    pub element: Option<Element>,
    pub attrs: AttrMap,
}

impl ComponentConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration carrying only the given attributes.
    pub fn from_attrs(attrs: AttrMap) -> Self {
        Self {
            element: None,
            attrs,
        }
    }

    /// Sets the host element, replacing any previous one.
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    /// The attribute value stored under `name`.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}

/// Shallow merge of two attribute maps; values in `overrides` win.
pub fn merge_attrs(base: &AttrMap, overrides: &AttrMap) -> AttrMap {
    let mut merged = base.clone();
    for (key, value) in overrides {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(pairs: &[(&str, Value)]) -> AttrMap {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn merge_is_right_biased() {
        let base = attrs(&[("foo", json!("a")), ("bar", json!(1))]);
        let overrides = attrs(&[("foo", json!("b"))]);

        let merged = merge_attrs(&base, &overrides);
        assert_eq!(merged.get("foo"), Some(&json!("b")));
        assert_eq!(merged.get("bar"), Some(&json!(1)));
    }

    #[test]
    fn merge_keeps_inputs_intact() {
        let base = attrs(&[("foo", json!("a"))]);
        let overrides = attrs(&[("foo", json!("b"))]);

        let _ = merge_attrs(&base, &overrides);
        assert_eq!(base.get("foo"), Some(&json!("a")));
    }

    #[test]
    fn with_element_replaces_previous() {
        let first = Element::new("div");
        let second = Element::new("div");

        let config = ComponentConfig::new()
            .with_element(first)
            .with_element(second.clone());
        assert_eq!(config.element, Some(second));
    }

    #[test]
    fn attr_reads_from_map() {
        let config = ComponentConfig::from_attrs(attrs(&[("foo", json!("bar"))]));
        assert_eq!(config.attr("foo"), Some(&json!("bar")));
        assert_eq!(config.attr("missing"), None);
    }
}
