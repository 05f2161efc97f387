//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (read & decode over schema.rs defaults)
//!     → validation.rs (listen addresses, source declarations)
//!     → sources + explicit servers → Registry
//!     → ProxySettings (settings.rs, validated, immutable)
//!     → handed to the proxy runtime
//! ```
//!
//! # Design Decisions
//! - Loading runs once at startup; there is no reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A broken source only shrinks the resolver pool; a broken explicit
//!   server stops startup

pub mod loader;
pub mod schema;
pub mod settings;
pub mod validation;

pub use loader::{load_config, load_config_with, Collaborators, ConfigError};
pub use schema::{ProxyConfig, ServerConfig, SourceConfig};
pub use settings::{CacheSettings, Protocol, ProxySettings};
