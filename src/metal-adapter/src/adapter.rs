//! Plugin registration and the selection-side calling convention.

use crate::call::{PluginCall, PluginOutput};
use crate::dispatch::{self, SharedCtor};
use crate::error::{PluginError, PluginResult};
use crate::registry;
use metal_core::{AttrMap, BoxedComponent, ComponentConfig, ComponentResult};
use metal_dom::{Document, Selection};
use serde_json::Value;
use std::rc::Rc;

/// Registers a component constructor as a plugin with the given name.
///
/// After registration, any selection can drive the component through
/// [`PluginExt`] under `name`. Registering a name that is already taken
/// silently replaces the earlier handler; instances created through the old
/// one stay attached to their elements.
///
/// Fails if no [`Document`] is installed on this thread, or if `name` is
/// empty. The table is untouched on failure.
pub fn register<F>(name: &str, ctor: F) -> PluginResult<()>
where
    F: Fn(ComponentConfig) -> ComponentResult<BoxedComponent> + 'static,
{
    if !Document::is_installed() {
        return Err(PluginError::DocumentMissing);
    }
    if name.is_empty() {
        return Err(PluginError::InvalidName);
    }

    let ctor: SharedCtor = Rc::new(ctor);
    let plugin = name.to_owned();
    let handler = Rc::new(move |selection: &Selection, call: PluginCall| {
        dispatch::handle_call(&plugin, &ctor, selection, call)
    });

    let replaced = registry::install(name.to_owned(), handler);
    if replaced {
        tracing::debug!(plugin = %name, "replaced plugin registration");
    } else {
        tracing::debug!(plugin = %name, "registered plugin");
    }
    Ok(())
}

/// Selection-side entry points for registered plugins.
///
/// This is the extension surface a selection library would install named
/// callables onto; here it is a trait so `selection.plugin("crop", ..)`
/// reads the way `collection.crop(..)` does in the original convention.
pub trait PluginExt {
    /// Dispatches `call` to the plugin registered under `name`.
    fn plugin(&self, name: &str, call: PluginCall) -> PluginResult<PluginOutput>;

    /// Configuration-mode shorthand: creates or updates an instance per
    /// element and returns the same selection for chaining.
    fn configure(&self, name: &str, attrs: AttrMap) -> PluginResult<Selection>;

    /// Method-mode shorthand: invokes `method` on the first element's
    /// instance and returns its raw result.
    fn invoke(&self, name: &str, method: &str, args: Vec<Value>) -> PluginResult<Value>;
}

impl PluginExt for Selection {
    fn plugin(&self, name: &str, call: PluginCall) -> PluginResult<PluginOutput> {
        let handler = registry::lookup(name).ok_or_else(|| PluginError::UnknownPlugin {
            name: name.to_owned(),
        })?;
        handler(self, call)
    }

    fn configure(&self, name: &str, attrs: AttrMap) -> PluginResult<Selection> {
        let output = self.plugin(name, PluginCall::with_attrs(attrs))?;
        // Registered handlers always hand the selection back in
        // configuration-mode.
        Ok(output.into_selection().unwrap_or_else(|| self.clone()))
    }

    fn invoke(&self, name: &str, method: &str, args: Vec<Value>) -> PluginResult<Value> {
        let output = self.plugin(name, PluginCall::method(method, args))?;
        Ok(output.into_value().unwrap_or(Value::Null))
    }
}
