//! Bridges Metal components onto a selection's named-plugin calling
//! convention.
//!
//! This crate provides:
//! - [`register`], which installs a component constructor under a plugin
//!   name in a process-wide (per UI thread) table
//! - the dispatch routine deciding whether a call creates/updates instances
//!   or invokes a method on one
//! - [`PluginExt`], the selection-side calling surface
//!
//! # Calling convention
//!
//! A plugin call is either configuration-mode or method-mode:
//! - Configuration-mode ([`PluginCall::Configure`]) visits every element of
//!   the selection independently. The first such call on an element
//!   constructs a component from the attributes plus the element itself,
//!   renders it once, and attaches it under the storage key
//!   `"metal-" + name`. Later calls merge attributes into the live
//!   instance. The call returns the selection it was made on, so calls
//!   chain.
//! - Method-mode ([`PluginCall::Method`]) operates on the first element
//!   only and returns the method's raw result. Names with a leading or
//!   trailing underscore are treated as private and refused.
//!
//! # Usage
//!
//! ```rust,ignore
//! use metal_adapter::{register, PluginExt};
//! use metal_dom::{Document, Element, Selection};
//!
//! Document::install();
//! register("crop", |config| Ok(Box::new(Crop::new(config)?)))?;
//!
//! let selection = Selection::from(Element::new("div"));
//! selection
//!     .configure("crop", attrs)?      // construct + render
//!     .configure("crop", new_attrs)?; // update in place
//! let result = selection.invoke("crop", "reset", vec![])?;
//! ```

mod adapter;
mod call;
mod dispatch;
mod error;
pub mod registry;

pub use adapter::{register, PluginExt};
pub use call::{PluginCall, PluginOutput};
pub use dispatch::{instance, storage_key, InstanceHandle};
pub use error::{PluginError, PluginResult};
