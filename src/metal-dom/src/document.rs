//! The thread-local document global.
//!
//! Plugin registration requires a selection context to be present, the way a
//! browser page requires its selection library global. `Document::install`
//! provides that context for the current thread; `Document::uninstall` exists
//! so tests can exercise the missing-context failure path.

use crate::element::Element;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static CURRENT: RefCell<Option<Document>> = RefCell::new(None);
}

struct DocumentInner {
    body: Element,
}

/// The per-thread document context. One document is current per UI thread;
/// handles are cheap clones of it.
#[derive(Clone)]
pub struct Document {
    inner: Rc<DocumentInner>,
}

impl Document {
    fn new() -> Self {
        Self {
            inner: Rc::new(DocumentInner {
                body: Element::new("body"),
            }),
        }
    }

    /// Installs a fresh document as this thread's current one, replacing any
    /// previous document, and returns a handle to it.
    pub fn install() -> Document {
        let document = Document::new();
        CURRENT.with(|current| {
            let replaced = current.borrow_mut().replace(document.clone());
            if replaced.is_some() {
                tracing::debug!("replaced current document for this thread");
            } else {
                tracing::debug!("installed document for this thread");
            }
        });
        document
    }

    /// Removes this thread's current document, returning it if one was
    /// installed. Intended for process or test teardown.
    pub fn uninstall() -> Option<Document> {
        CURRENT.with(|current| current.borrow_mut().take())
    }

    /// A handle to this thread's current document, if one is installed.
    pub fn current() -> Option<Document> {
        CURRENT.with(|current| current.borrow().clone())
    }

    /// True if a document is installed on this thread.
    pub fn is_installed() -> bool {
        CURRENT.with(|current| current.borrow().is_some())
    }

    /// The document body element.
    pub fn body(&self) -> &Element {
        &self.inner.body
    }

    /// Creates a detached element with the given tag name.
    pub fn create_element(&self, tag: impl Into<String>) -> Element {
        Element::new(tag)
    }
}
