//! Element handles and the per-element attachment store.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

struct ElementInner {
    id: u64,
    tag: String,
    data: RefCell<HashMap<String, Box<dyn Any>>>,
}

/// A cheap-clone handle to a single element node.
///
/// Clones share the same underlying node: equality is identity, and the
/// attachment store is visible through every handle. Handles are
/// single-threaded by construction (interior `Rc`/`RefCell`), matching the
/// one-UI-thread model the adapter assumes.
#[derive(Clone)]
pub struct Element {
    inner: Rc<ElementInner>,
}

impl Element {
    /// Creates a detached element with the given tag name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(ElementInner {
                id: NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed),
                tag: tag.into(),
                data: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Process-unique serial for this node. Stable for the node's lifetime.
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// The tag name the element was created with.
    pub fn tag(&self) -> &str {
        &self.inner.tag
    }

    /// Attaches `value` to this element under `key`, replacing any previous
    /// value stored there.
    pub fn set_data<T: Any>(&self, key: impl Into<String>, value: T) {
        self.inner
            .data
            .borrow_mut()
            .insert(key.into(), Box::new(value));
    }

    /// Returns a clone of the value attached under `key`, if one exists and
    /// has type `T`.
    pub fn data<T: Any + Clone>(&self, key: &str) -> Option<T> {
        let data = self.inner.data.borrow();
        data.get(key).and_then(|value| value.downcast_ref::<T>()).cloned()
    }

    /// True if any value is attached under `key`.
    pub fn has_data(&self, key: &str) -> bool {
        self.inner.data.borrow().contains_key(key)
    }

    /// Detaches the value stored under `key`. Returns whether one existed.
    pub fn remove_data(&self, key: &str) -> bool {
        self.inner.data.borrow_mut().remove(key).is_some()
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Element {}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("id", &self.inner.id)
            .field("tag", &self.inner.tag)
            .finish()
    }
}
