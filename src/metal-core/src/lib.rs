//! Component contract and configuration objects for the Metal plugin
//! adapter.
//!
//! The adapter consumes two things from a component framework: a way to
//! construct and drive component instances, and a configuration object
//! shape. This crate defines both:
//! - [`Component`]: render-once, update-in-place instances with an optional
//!   dynamic method surface
//! - [`ComponentConfig`] / [`AttrMap`]: JSON-backed attribute maps paired
//!   with the host element
//!
//! It also carries the embedder-facing [`logging`] bootstrap.

pub mod component;
pub mod config;
pub mod logging;

pub use component::{BoxedComponent, Component, ComponentError, ComponentResult};
pub use config::{merge_attrs, AttrMap, ComponentConfig};
pub use logging::{init_logging, LogLevel, LoggingError};
