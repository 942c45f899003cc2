use metal_core::ComponentError;
use thiserror::Error;

/// Failures surfaced by plugin registration and dispatch.
///
/// Every variant except `Component` is a contract violation by the caller;
/// none are retried or recovered here. Component-raised failures pass
/// through unmodified.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("a document must be installed on this thread before plugins can be registered")]
    DocumentMissing,
    #[error("a non-empty name is required for registering a plugin")]
    InvalidName,
    #[error("no plugin registered under name {name}")]
    UnknownPlugin { name: String },
    #[error("tried to call method {method} on plugin {plugin} without initializing it first")]
    NotInitialized { plugin: String, method: String },
    #[error("plugin {plugin} has no method called {method}")]
    NoSuchMethod { plugin: String, method: String },
    #[error("method {method} on plugin {plugin} is private")]
    PrivateMethod { plugin: String, method: String },
    #[error(transparent)]
    Component(#[from] ComponentError),
}

pub type PluginResult<T> = Result<T, PluginError>;
