//! Minimal DOM-selection surface for the Metal plugin adapter.
//!
//! This crate models only what the adapter's contract consumes:
//! - [`Element`]: a cheap-clone node handle with identity equality and a
//!   typed per-element key/value attachment store
//! - [`Selection`]: an ordered, identity-preserving element collection
//! - [`Document`]: the thread-local context that must be installed before
//!   plugins can be registered
//!
//! It is deliberately not a DOM implementation: there is no tree, no
//! selectors, and no events. Elements exist so component instances have a
//! node to attach to; selections exist so plugin calls have a collection to
//! dispatch over.

pub mod document;
pub mod element;
pub mod selection;

pub use document::Document;
pub use element::Element;
pub use selection::Selection;
