//! DNS proxy configuration and resolver registry.

pub mod config;
pub mod observability;
pub mod registry;
pub mod source;

pub use config::{load_config, load_config_with, ConfigError, ProxySettings};
pub use registry::{RegisteredServer, Registry};
