//! Configuration loading from disk.
//!
//! Loading runs once at startup, sequentially: decode, validate, resolve
//! sources, resolve explicit servers, then check the registry is non-empty.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::{ProxyConfig, ServerConfig};
use crate::config::settings::ProxySettings;
use crate::config::validation::{validate_listen_addresses, validate_source};
use crate::registry::{
    LegacyStampBuilder, RegisteredServer, Registry, StampBuilder, StampError, StampProps,
    WantedNames,
};
use crate::source::{NoSourceBackend, SourceFactory};

/// Error type for configuration loading. Every variant aborts startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse error: {0}")]
    Decode(#[from] toml::de::Error),

    #[error("no listen address configured")]
    NoListenAddress,

    #[error("missing {field} for source [{source_name}]")]
    MissingSourceField {
        field: &'static str,
        source_name: String,
    },

    #[error("{feature} not supported yet (server [{server}])")]
    UnsupportedFeature {
        feature: &'static str,
        server: String,
    },

    #[error("invalid server [{name}]: {error}")]
    InvalidServer { name: String, error: StampError },

    #[error("no servers configured")]
    NoServers,
}

/// External components used while resolving servers.
pub struct Collaborators<'a> {
    pub sources: &'a dyn SourceFactory,
    pub stamps: &'a dyn StampBuilder,
}

impl Default for Collaborators<'static> {
    fn default() -> Self {
        Self {
            sources: &NoSourceBackend,
            stamps: &LegacyStampBuilder,
        }
    }
}

/// Load configuration with the built-in collaborators.
pub fn load_config(path: &Path) -> Result<ProxySettings, ConfigError> {
    load_config_with(path, &Collaborators::default())
}

/// Load, validate and resolve configuration from a TOML file.
pub fn load_config_with(
    path: &Path,
    collaborators: &Collaborators<'_>,
) -> Result<ProxySettings, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config = decode_config(&content)?;

    tracing::debug!(path = %path.display(), "Configuration decoded");

    resolve_settings(config, collaborators)
}

/// Decode a configuration document over the defaults.
pub fn decode_config(content: &str) -> Result<ProxyConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Turn a decoded configuration into runtime settings.
pub fn resolve_settings(
    config: ProxyConfig,
    collaborators: &Collaborators<'_>,
) -> Result<ProxySettings, ConfigError> {
    validate_listen_addresses(&config.listen_addresses)?;

    let wanted = WantedNames::resolve(config.server_names.as_deref(), &config.servers);
    let mut registry = Registry::new();

    resolve_sources(&config, &wanted, collaborators.sources, &mut registry)?;
    resolve_explicit_servers(&config, &wanted, collaborators.stamps, &mut registry)?;

    if registry.is_empty() {
        return Err(ConfigError::NoServers);
    }

    Ok(ProxySettings::from_config(&config, registry))
}

/// Register wanted resolvers listed by each declared source.
///
/// Invalid declarations are fatal. Sources that cannot be constructed or
/// parsed are logged and skipped.
fn resolve_sources(
    config: &ProxyConfig,
    wanted: &WantedNames,
    factory: &dyn SourceFactory,
    registry: &mut Registry,
) -> Result<(), ConfigError> {
    for (name, declaration) in &config.sources {
        let spec = validate_source(name, declaration)?;

        let source = match factory.construct(&spec) {
            Ok(source) => source,
            Err(e) => {
                tracing::error!(source = %name, error = %e, "Unable to use source");
                continue;
            }
        };

        let servers = match source.parse() {
            Ok(servers) => servers,
            Err(e) => {
                tracing::error!(source = %name, error = %e, "Unable to use source");
                continue;
            }
        };

        for server in servers {
            if !wanted.contains(&server.name) {
                continue;
            }
            tracing::info!(server = %server.name, source = %name, "Adding resolver to the wanted set");
            registry.register(server);
        }
    }
    Ok(())
}

/// Register wanted resolvers that have an explicit definition.
fn resolve_explicit_servers(
    config: &ProxyConfig,
    wanted: &WantedNames,
    builder: &dyn StampBuilder,
    registry: &mut Registry,
) -> Result<(), ConfigError> {
    for name in wanted.iter() {
        let Some(server) = config.servers.get(name) else {
            continue;
        };
        let registered = resolve_explicit_server(name, server, builder)?;
        tracing::info!(server = %name, "Adding resolver to the wanted set");
        registry.register(registered);
    }
    Ok(())
}

fn resolve_explicit_server(
    name: &str,
    server: &ServerConfig,
    builder: &dyn StampBuilder,
) -> Result<RegisteredServer, ConfigError> {
    if !server.stamp.is_empty() {
        return Err(ConfigError::UnsupportedFeature {
            feature: "stamp strings",
            server: name.to_string(),
        });
    }

    let stamp = builder
        .from_legacy(&server.address, &server.public_key, &server.provider_name)
        .map_err(|error| ConfigError::InvalidServer {
            name: name.to_string(),
            error,
        })?
        .with_props(StampProps {
            dnssec: server.dnssec,
            no_log: server.no_log,
        });

    Ok(RegisteredServer::new(name, stamp))
}
