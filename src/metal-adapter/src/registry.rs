//! The process-wide plugin registration table.
//!
//! The table maps plugin names to dispatch handlers. It is thread-local:
//! the adapter assumes a single cooperative UI thread, and each test thread
//! gets an isolated table. It is created lazily by the first registration
//! and lives until [`clear`] at process or test teardown. Registering a name
//! twice silently replaces the earlier handler.

use crate::call::{PluginCall, PluginOutput};
use crate::error::PluginResult;
use metal_dom::Selection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub(crate) type PluginHandler = Rc<dyn Fn(&Selection, PluginCall) -> PluginResult<PluginOutput>>;

thread_local! {
    static PLUGINS: RefCell<HashMap<String, PluginHandler>> = RefCell::new(HashMap::new());
}

/// Installs `handler` under `name`, replacing any previous registration.
/// Returns whether a registration was replaced.
pub(crate) fn install(name: String, handler: PluginHandler) -> bool {
    PLUGINS.with(|table| table.borrow_mut().insert(name, handler).is_some())
}

pub(crate) fn lookup(name: &str) -> Option<PluginHandler> {
    PLUGINS.with(|table| table.borrow().get(name).cloned())
}

/// True if a plugin is currently registered under `name`.
pub fn is_registered(name: &str) -> bool {
    PLUGINS.with(|table| table.borrow().contains_key(name))
}

/// Removes the registration for `name`, if any. Instances already attached
/// to elements stay there; only new dispatch is affected.
pub fn unregister(name: &str) -> bool {
    PLUGINS.with(|table| table.borrow_mut().remove(name).is_some())
}

/// Names currently registered on this thread, in no particular order.
pub fn registered_names() -> Vec<String> {
    PLUGINS.with(|table| table.borrow().keys().cloned().collect())
}

/// Drops every registration on this thread. Intended for process or test
/// teardown.
pub fn clear() {
    PLUGINS.with(|table| table.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn noop_handler(tag: &'static str) -> PluginHandler {
        Rc::new(move |_, _| Ok(PluginOutput::Value(Value::String(tag.to_owned()))))
    }

    fn probe(name: &str) -> Option<Value> {
        let handler = lookup(name)?;
        handler(&Selection::empty(), PluginCall::configure())
            .ok()
            .and_then(PluginOutput::into_value)
    }

    #[test]
    fn install_then_lookup_round_trips() {
        clear();
        assert!(!install("crop".to_owned(), noop_handler("first")));

        assert!(is_registered("crop"));
        assert_eq!(probe("crop"), Some(Value::String("first".to_owned())));
        clear();
    }

    #[test]
    fn last_registration_wins() {
        clear();
        install("crop".to_owned(), noop_handler("first"));
        assert!(install("crop".to_owned(), noop_handler("second")));

        assert_eq!(probe("crop"), Some(Value::String("second".to_owned())));
        assert_eq!(registered_names(), vec!["crop".to_owned()]);
        clear();
    }

    #[test]
    fn unregister_removes_only_the_named_plugin() {
        clear();
        install("crop".to_owned(), noop_handler("crop"));
        install("zoom".to_owned(), noop_handler("zoom"));

        assert!(unregister("crop"));
        assert!(!is_registered("crop"));
        assert!(is_registered("zoom"));
        assert!(!unregister("crop"));
        clear();
    }

    #[test]
    fn clear_empties_the_table() {
        install("crop".to_owned(), noop_handler("crop"));
        clear();
        assert!(!is_registered("crop"));
        assert!(registered_names().is_empty());
    }
}
