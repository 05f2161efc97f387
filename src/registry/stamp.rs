//! Server stamps.
//!
//! A stamp describes how to reach and authenticate a resolver. Stamps are
//! built either by a source (discovered resolvers) or from the legacy
//! address / public key / provider name triple of an explicit definition.

use std::fmt;
use std::net::SocketAddr;

use serde::Serialize;
use thiserror::Error;

/// Length of a provider public key, in bytes.
pub const PUBLIC_KEY_LEN: usize = 32;

/// Informal properties advertised by a resolver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StampProps {
    pub dnssec: bool,
    pub no_log: bool,
}

/// A validated connection descriptor for one resolver.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ServerStamp {
    server_addr: SocketAddr,
    #[serde(serialize_with = "serialize_key")]
    server_pk: Vec<u8>,
    provider_name: String,
    props: StampProps,
}

impl ServerStamp {
    /// Create a stamp from already validated parts.
    pub fn new(server_addr: SocketAddr, server_pk: Vec<u8>, provider_name: impl Into<String>) -> Self {
        Self {
            server_addr,
            server_pk,
            provider_name: provider_name.into(),
            props: StampProps::default(),
        }
    }

    /// Replace the informal properties.
    pub fn with_props(mut self, props: StampProps) -> Self {
        self.props = props;
        self
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    pub fn server_pk(&self) -> &[u8] {
        &self.server_pk
    }

    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    pub fn props(&self) -> StampProps {
        self.props
    }
}

impl fmt::Debug for ServerStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerStamp")
            .field("server_addr", &self.server_addr)
            .field("server_pk", &hex::encode(&self.server_pk))
            .field("provider_name", &self.provider_name)
            .field("props", &self.props)
            .finish()
    }
}

fn serialize_key<S: serde::Serializer>(key: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(key))
}

/// Errors raised while building a stamp from legacy fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StampError {
    #[error("invalid resolver address [{0}]")]
    InvalidAddress(String),

    #[error("unsupported public key [{0}]")]
    InvalidPublicKey(String),

    #[error("missing provider name")]
    MissingProviderName,
}

/// Builds stamps from the legacy address / public key / provider name triple.
pub trait StampBuilder {
    fn from_legacy(
        &self,
        address: &str,
        public_key: &str,
        provider_name: &str,
    ) -> Result<ServerStamp, StampError>;
}

/// The stock builder: strict address and key validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyStampBuilder;

impl StampBuilder for LegacyStampBuilder {
    fn from_legacy(
        &self,
        address: &str,
        public_key: &str,
        provider_name: &str,
    ) -> Result<ServerStamp, StampError> {
        let server_addr: SocketAddr = address
            .trim()
            .parse()
            .map_err(|_| StampError::InvalidAddress(address.to_string()))?;

        let server_pk = decode_public_key(public_key)?;
        if server_pk.len() != PUBLIC_KEY_LEN {
            return Err(StampError::InvalidPublicKey(public_key.to_string()));
        }

        if provider_name.trim().is_empty() {
            return Err(StampError::MissingProviderName);
        }

        Ok(ServerStamp::new(server_addr, server_pk, provider_name.trim()))
    }
}

/// Decode a hex public key, accepting colons as byte separators.
pub fn decode_public_key(public_key: &str) -> Result<Vec<u8>, StampError> {
    let compact: String = public_key.chars().filter(|c| *c != ':').collect();
    hex::decode(compact.trim()).map_err(|_| StampError::InvalidPublicKey(public_key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "B735:1140:206F:225D:3E2B:D822:D7FD:691E:A1C3:3CC8:D666:8D0C:BE04:BFAB:CA43:FB79";

    #[test]
    fn test_legacy_stamp() {
        let stamp = LegacyStampBuilder
            .from_legacy("203.0.113.1:443", KEY, "2.dnscrypt-cert.example.com")
            .unwrap();
        assert_eq!(stamp.server_addr(), "203.0.113.1:443".parse().unwrap());
        assert_eq!(stamp.server_pk().len(), PUBLIC_KEY_LEN);
        assert_eq!(stamp.server_pk()[0], 0xb7);
        assert_eq!(stamp.provider_name(), "2.dnscrypt-cert.example.com");
        assert_eq!(stamp.props(), StampProps::default());
    }

    #[test]
    fn test_ipv6_address() {
        let stamp = LegacyStampBuilder
            .from_legacy("[2001:db8::1]:443", KEY, "p.example")
            .unwrap();
        assert!(stamp.server_addr().is_ipv6());
    }

    #[test]
    fn test_invalid_address() {
        let err = LegacyStampBuilder
            .from_legacy("resolver.example:443", KEY, "p.example")
            .unwrap_err();
        assert_eq!(err, StampError::InvalidAddress("resolver.example:443".into()));

        let err = LegacyStampBuilder.from_legacy("1.2.3.4", KEY, "p.example").unwrap_err();
        assert!(matches!(err, StampError::InvalidAddress(_)));
    }

    #[test]
    fn test_invalid_public_key() {
        let err = LegacyStampBuilder
            .from_legacy("1.2.3.4:443", "ABCD", "p.example")
            .unwrap_err();
        assert_eq!(err, StampError::InvalidPublicKey("ABCD".into()));

        let err = LegacyStampBuilder
            .from_legacy("1.2.3.4:443", "not hex", "p.example")
            .unwrap_err();
        assert!(matches!(err, StampError::InvalidPublicKey(_)));
    }

    #[test]
    fn test_missing_provider_name() {
        let err = LegacyStampBuilder.from_legacy("1.2.3.4:443", KEY, " ").unwrap_err();
        assert_eq!(err, StampError::MissingProviderName);
    }

    #[test]
    fn test_decode_public_key() {
        assert_eq!(decode_public_key("ab:CD").unwrap(), vec![0xab, 0xcd]);
        assert!(decode_public_key("abc").is_err());
    }
}
