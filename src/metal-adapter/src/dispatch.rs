//! Dispatch behavior of installed plugin callables.
//!
//! A configuration-mode call visits every element in the selection
//! independently, creating an instance where none exists and updating the
//! one that does. A method-mode call operates on the first element only and
//! returns the method's raw result. The state machine per (element, plugin)
//! pair is one-way: once initialized, an instance is updated in place and
//! never replaced or re-rendered by the adapter.

use crate::call::{PluginCall, PluginOutput};
use crate::error::{PluginError, PluginResult};
use metal_core::{AttrMap, BoxedComponent, ComponentConfig, ComponentResult};
use metal_dom::{Element, Selection};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a live component instance attached to an element.
pub type InstanceHandle = Rc<RefCell<BoxedComponent>>;

pub(crate) type SharedCtor = Rc<dyn Fn(ComponentConfig) -> ComponentResult<BoxedComponent>>;

/// The attachment-store key instances of the plugin `name` live under.
pub fn storage_key(name: &str) -> String {
    format!("metal-{name}")
}

/// Looks up the live instance for plugin `name` on `element`.
pub fn instance(element: &Element, name: &str) -> Option<InstanceHandle> {
    element.data::<InstanceHandle>(&storage_key(name))
}

pub(crate) fn handle_call(
    plugin: &str,
    ctor: &SharedCtor,
    selection: &Selection,
    call: PluginCall,
) -> PluginResult<PluginOutput> {
    match call {
        PluginCall::Method { name, args } => {
            call_method(plugin, selection.first(), &name, args).map(PluginOutput::Value)
        }
        PluginCall::Configure(attrs) => {
            for element in selection.iter() {
                create_or_update_instance(plugin, ctor, element, &attrs)?;
            }
            Ok(PluginOutput::Selection(selection.clone()))
        }
    }
}

/// Calls `method` on the instance attached to `element`, which must have
/// been initialized by an earlier configuration-mode call.
fn call_method(
    plugin: &str,
    element: Option<&Element>,
    method: &str,
    args: Vec<Value>,
) -> PluginResult<Value> {
    let not_initialized = || PluginError::NotInitialized {
        plugin: plugin.to_owned(),
        method: method.to_owned(),
    };

    let element = element.ok_or_else(not_initialized)?;
    let handle = instance(element, plugin).ok_or_else(not_initialized)?;

    // Leading or trailing underscore marks a method private; denied before
    // the component is even probed for it.
    if method.starts_with('_') || method.ends_with('_') {
        return Err(PluginError::PrivateMethod {
            plugin: plugin.to_owned(),
            method: method.to_owned(),
        });
    }
    if !handle.borrow().has_method(method) {
        return Err(PluginError::NoSuchMethod {
            plugin: plugin.to_owned(),
            method: method.to_owned(),
        });
    }

    tracing::trace!(plugin, method, element = element.id(), "dispatching plugin method");
    let result = handle.borrow_mut().call_method(method, args)?;
    Ok(result)
}

/// Creates an instance for `element`, or updates the one already attached.
fn create_or_update_instance(
    plugin: &str,
    ctor: &SharedCtor,
    element: &Element,
    attrs: &AttrMap,
) -> PluginResult<()> {
    let key = storage_key(plugin);
    let config = ComponentConfig::from_attrs(attrs.clone()).with_element(element.clone());

    match element.data::<InstanceHandle>(&key) {
        Some(handle) => {
            tracing::trace!(plugin, element = element.id(), "updating component attributes");
            handle.borrow_mut().set_attrs(config)?;
        }
        None => {
            let mut component = ctor(config)?;
            component.render()?;
            tracing::debug!(plugin, element = element.id(), "created component instance");
            let handle: InstanceHandle = Rc::new(RefCell::new(component));
            element.set_data(key, handle);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_key_is_prefixed_with_metal() {
        assert_eq!(storage_key("crop"), "metal-crop");
        assert_eq!(storage_key(""), "metal-");
    }

    #[test]
    fn instance_is_absent_on_fresh_elements() {
        let element = Element::new("div");
        assert!(instance(&element, "crop").is_none());
    }
}
