//! Shared collaborators and helpers for configuration tests.

use std::io::Write;
use std::net::SocketAddr;

use dns_proxy::registry::stamp::decode_public_key;
use dns_proxy::registry::{RegisteredServer, ServerStamp, StampBuilder, StampError};
use dns_proxy::source::{Source, SourceError, SourceFactory, SourceSpec};
use tempfile::NamedTempFile;

/// Write a configuration document to a temporary file.
pub fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Stamp builder that accepts keys of any length.
pub struct PermissiveStamps;

impl StampBuilder for PermissiveStamps {
    fn from_legacy(
        &self,
        address: &str,
        public_key: &str,
        provider_name: &str,
    ) -> Result<ServerStamp, StampError> {
        let addr: SocketAddr = address
            .parse()
            .map_err(|_| StampError::InvalidAddress(address.to_string()))?;
        let key = decode_public_key(public_key)?;
        if provider_name.is_empty() {
            return Err(StampError::MissingProviderName);
        }
        Ok(ServerStamp::new(addr, key, provider_name))
    }
}

/// Serves in-memory resolver lists, keyed by source URL.
#[derive(Default)]
pub struct StaticSources {
    lists: Vec<(String, Vec<RegisteredServer>)>,
}

impl StaticSources {
    pub fn with_list(mut self, url: &str, names: &[&str]) -> Self {
        let servers = names
            .iter()
            .enumerate()
            .map(|(i, name)| RegisteredServer::new(*name, stamp(i as u8 + 1)))
            .collect();
        self.lists.push((url.to_string(), servers));
        self
    }
}

struct StaticSource(Vec<RegisteredServer>);

impl Source for StaticSource {
    fn parse(&self) -> Result<Vec<RegisteredServer>, SourceError> {
        Ok(self.0.clone())
    }
}

impl SourceFactory for StaticSources {
    fn construct(&self, spec: &SourceSpec) -> Result<Box<dyn Source>, SourceError> {
        self.lists
            .iter()
            .find(|(url, _)| *url == spec.url)
            .map(|(_, servers)| Box::new(StaticSource(servers.clone())) as Box<dyn Source>)
            .ok_or_else(|| SourceError::Unavailable(spec.url.clone()))
    }
}

/// A stamp pointing at 10.0.0.<n>:443.
pub fn stamp(n: u8) -> ServerStamp {
    ServerStamp::new(
        SocketAddr::from(([10, 0, 0, n], 443)),
        vec![n; 32],
        "2.dnscrypt-cert.example.com",
    )
}
