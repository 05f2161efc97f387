//! Resolved runtime settings.
//!
//! `ProxySettings` is what configuration loading hands to the proxy: the
//! decoded values converted to runtime types, plus the resolver registry.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use crate::config::schema::ProxyConfig;
use crate::registry::Registry;

/// Transport used to forward queries upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Udp,
    Tcp,
}

impl Protocol {
    pub fn from_force_tcp(force_tcp: bool) -> Self {
        if force_tcp {
            Protocol::Tcp
        } else {
            Protocol::Udp
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Protocol::Udp => write!(f, "udp"),
            Protocol::Tcp => write!(f, "tcp"),
        }
    }
}

/// Response cache parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSettings {
    pub enabled: bool,
    pub size: usize,
    pub neg_ttl: u32,
    pub min_ttl: u32,
    pub max_ttl: u32,
}

/// Validated settings for the running proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxySettings {
    pub listen_addresses: Vec<String>,
    pub main_proto: Protocol,
    pub timeout: Duration,
    pub cert_refresh_delay: Duration,
    pub daemonize: bool,
    pub block_ipv6: bool,
    pub cache: CacheSettings,
    pub registry: Registry,
}

impl ProxySettings {
    /// Convert decoded values to runtime types. The registry is supplied by
    /// the caller once resolvers are resolved.
    pub(crate) fn from_config(config: &ProxyConfig, registry: Registry) -> Self {
        Self {
            listen_addresses: config.listen_addresses.clone(),
            main_proto: Protocol::from_force_tcp(config.force_tcp),
            timeout: Duration::from_millis(config.timeout_ms),
            cert_refresh_delay: Duration::from_secs(config.cert_refresh_delay.saturating_mul(60)),
            daemonize: config.daemonize,
            block_ipv6: config.block_ipv6,
            cache: CacheSettings {
                enabled: config.cache,
                size: config.cache_size,
                neg_ttl: config.cache_neg_ttl,
                min_ttl: config.cache_min_ttl,
                max_ttl: config.cache_max_ttl,
            },
            registry,
        }
    }
}
