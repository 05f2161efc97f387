//! Configuration schema definitions.
//!
//! This module defines the configuration file structure as declared by the
//! operator. `Default` supplies the baseline values; `#[serde(default)]` makes
//! every key optional so a decoded file is the defaults with overrides applied.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Root configuration for the DNS proxy.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    /// Resolvers to activate. When absent, every `[servers]` entry is used.
    pub server_names: Option<Vec<String>>,

    /// Local addresses to accept queries on (e.g., "127.0.0.1:53").
    pub listen_addresses: Vec<String>,

    /// Detach from the terminal after startup.
    pub daemonize: bool,

    /// Forward queries over TCP instead of UDP.
    pub force_tcp: bool,

    /// Upstream query timeout in milliseconds.
    pub timeout_ms: u64,

    /// Certificate refresh delay in minutes.
    pub cert_refresh_delay: u64,

    /// Answer AAAA queries locally with an empty response.
    pub block_ipv6: bool,

    /// Enable the response cache.
    pub cache: bool,

    /// Maximum number of cached responses.
    pub cache_size: usize,

    /// TTL applied to negative answers, in seconds.
    pub cache_neg_ttl: u32,

    /// Lower TTL bound for cached answers, in seconds.
    pub cache_min_ttl: u32,

    /// Upper TTL bound for cached answers, in seconds.
    pub cache_max_ttl: u32,

    /// Explicitly configured resolvers, keyed by name.
    pub servers: BTreeMap<String, ServerConfig>,

    /// Signed resolver lists, keyed by name.
    pub sources: BTreeMap<String, SourceConfig>,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            server_names: None,
            listen_addresses: vec!["127.0.0.1:53".to_string()],
            daemonize: false,
            force_tcp: false,
            timeout_ms: 2500,
            cert_refresh_delay: 30,
            block_ipv6: false,
            cache: true,
            cache_size: 256,
            cache_neg_ttl: 60,
            cache_min_ttl: 60,
            cache_max_ttl: 8600,
            servers: BTreeMap::new(),
            sources: BTreeMap::new(),
        }
    }
}

/// A manually configured resolver.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Encoded server stamp. Not supported yet; setting it aborts loading.
    pub stamp: String,

    /// Provider name (e.g., "2.dnscrypt-cert.example.com").
    pub provider_name: String,

    /// Resolver address (e.g., "203.0.113.1:443").
    pub address: String,

    /// Provider public key, hex encoded (colons allowed).
    pub public_key: String,

    /// Resolver claims not to log queries.
    pub no_log: bool,

    /// Resolver validates DNSSEC.
    pub dnssec: bool,
}

/// A remote, signed list of resolvers.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct SourceConfig {
    pub url: String,

    /// Minisign public key used to verify the list signature.
    pub minisign_key: String,

    /// Local copy of the list.
    pub cache_file: String,

    /// List format identifier (e.g., "v1").
    pub format: String,

    /// Refresh delay in hours. Zero or negative means the default (24h).
    pub refresh_delay: i64,
}
