//! The component contract consumed by the plugin adapter.

use crate::config::ComponentConfig;
use metal_dom::Element;
use serde_json::Value;
use thiserror::Error;

/// Failures raised by component implementations. The adapter never catches
/// or rewrites these; they reach the plugin caller as-is.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("failed to construct component: {message}")]
    Construct { message: String },
    #[error("render failed: {message}")]
    Render { message: String },
    #[error("attribute update rejected: {message}")]
    Attrs { message: String },
    #[error("method {method} failed: {message}")]
    Method { method: String, message: String },
    #[error("{message}")]
    Other { message: String },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

/// A boxed component instance, the unit stored per (element, plugin) pair.
pub type BoxedComponent = Box<dyn Component>;

/// A UI component drivable through the plugin adapter.
///
/// Instances are produced by a constructor closure from a
/// [`ComponentConfig`], rendered exactly once right after construction, and
/// updated in place through [`set_attrs`](Component::set_attrs) on every
/// later configuration-mode call.
pub trait Component {
    /// The element this instance is attached to. Always present on
    /// adapter-constructed instances.
    fn element(&self) -> Option<&Element>;

    /// Mounts the component's rendered state onto its element. The adapter
    /// calls this exactly once, immediately after construction.
    fn render(&mut self) -> ComponentResult<()>;

    /// Merges new configuration into the live instance.
    fn set_attrs(&mut self, config: ComponentConfig) -> ComponentResult<()>;

    /// True if the component exposes a callable method under `name`. This is
    /// the capability surface for method-mode plugin calls.
    fn has_method(&self, name: &str) -> bool {
        let _ = name;
        false
    }

    /// Invokes a named method. The adapter only calls this for names that
    /// [`has_method`](Component::has_method) accepted.
    fn call_method(&mut self, name: &str, args: Vec<Value>) -> ComponentResult<Value> {
        let _ = args;
        Err(ComponentError::Method {
            method: name.to_owned(),
            message: "not implemented".to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare {
        element: Option<Element>,
    }

    impl Component for Bare {
        fn element(&self) -> Option<&Element> {
            self.element.as_ref()
        }

        fn render(&mut self) -> ComponentResult<()> {
            Ok(())
        }

        fn set_attrs(&mut self, _config: ComponentConfig) -> ComponentResult<()> {
            Ok(())
        }
    }

    #[test]
    fn components_expose_no_methods_by_default() {
        let bare = Bare { element: None };
        assert!(!bare.has_method("anything"));
    }

    #[test]
    fn default_call_method_is_an_error() {
        let mut bare = Bare { element: None };
        let err = bare
            .call_method("anything", Vec::new())
            .expect_err("default call_method should fail");
        assert!(matches!(err, ComponentError::Method { .. }));
    }
}
