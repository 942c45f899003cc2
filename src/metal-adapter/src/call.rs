//! The plugin calling convention.
//!
//! The original convention is positional: a string first argument selects
//! method-mode, anything else is configuration. [`PluginCall`] makes that
//! choice structural instead of sniffing value types at the call site.

use metal_core::AttrMap;
use metal_dom::Selection;
use serde_json::Value;

/// A single plugin invocation.
#[derive(Clone, Debug)]
pub enum PluginCall {
    /// Configuration-mode: create an instance per element, or update the
    /// ones that already exist.
    Configure(AttrMap),
    /// Method-mode: invoke a named method on the first element's instance.
    Method { name: String, args: Vec<Value> },
}

impl PluginCall {
    /// A configuration-mode call with no attributes (the "omitted config"
    /// shape).
    pub fn configure() -> Self {
        Self::Configure(AttrMap::new())
    }

    /// A configuration-mode call carrying `attrs`.
    pub fn with_attrs(attrs: AttrMap) -> Self {
        Self::Configure(attrs)
    }

    /// A method-mode call with the remaining arguments.
    pub fn method(name: impl Into<String>, args: Vec<Value>) -> Self {
        Self::Method {
            name: name.into(),
            args,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method { .. })
    }
}

/// What a plugin invocation produced.
#[derive(Clone, Debug)]
pub enum PluginOutput {
    /// Configuration-mode hands the input selection back for chaining.
    Selection(Selection),
    /// Method-mode returns the method's raw result, never a collection.
    Value(Value),
}

impl PluginOutput {
    /// The chained selection, if this was a configuration-mode result.
    pub fn into_selection(self) -> Option<Selection> {
        match self {
            Self::Selection(selection) => Some(selection),
            Self::Value(_) => None,
        }
    }

    /// The raw method result, if this was a method-mode result.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Value(value) => Some(value),
            Self::Selection(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_config_is_an_empty_map() {
        match PluginCall::configure() {
            PluginCall::Configure(attrs) => assert!(attrs.is_empty()),
            PluginCall::Method { .. } => panic!("expected configuration-mode"),
        }
    }

    #[test]
    fn method_calls_carry_rest_args() {
        let call = PluginCall::method("crop", vec![json!(1), json!("tight")]);
        assert!(call.is_method());
        match call {
            PluginCall::Method { name, args } => {
                assert_eq!(name, "crop");
                assert_eq!(args, vec![json!(1), json!("tight")]);
            }
            PluginCall::Configure(_) => panic!("expected method-mode"),
        }
    }

    #[test]
    fn output_accessors_match_modes() {
        let value = PluginOutput::Value(json!("done"));
        assert_eq!(value.clone().into_value(), Some(json!("done")));
        assert!(value.into_selection().is_none());
    }
}
