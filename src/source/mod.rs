//! Resolver sources.
//!
//! # Responsibilities
//! - Describe a validated source declaration (`SourceSpec`)
//! - Define the seam to the component that fetches, verifies and parses a
//!   signed resolver list (`SourceFactory` / `Source`)
//!
//! # Design Decisions
//! - Fetching and signature checks live behind the trait; loading only
//!   combines their output
//! - Any source failure is recoverable: the source is skipped

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::registry::RegisteredServer;

/// A validated source declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub name: String,
    pub url: String,
    pub minisign_key: String,
    pub cache_file: PathBuf,
    pub format: String,
    pub refresh_delay: Duration,
}

/// Errors raised by a source backend.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("unsupported source format [{0}]")]
    UnsupportedFormat(String),

    #[error("cache file error: {0}")]
    Cache(#[from] std::io::Error),

    #[error("signature verification failed: {0}")]
    Signature(String),

    #[error("unable to parse resolver list: {0}")]
    Parse(String),

    #[error("source backend unavailable: {0}")]
    Unavailable(String),
}

/// A resolver list that has been fetched and verified.
pub trait Source {
    /// Resolvers listed by the source, in list order.
    fn parse(&self) -> Result<Vec<RegisteredServer>, SourceError>;
}

/// Creates sources from their declarations.
pub trait SourceFactory {
    fn construct(&self, spec: &SourceSpec) -> Result<Box<dyn Source>, SourceError>;
}

/// Factory used when no source backend is linked into the binary.
///
/// Every declared source is still validated, then skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSourceBackend;

impl SourceFactory for NoSourceBackend {
    fn construct(&self, spec: &SourceSpec) -> Result<Box<dyn Source>, SourceError> {
        Err(SourceError::Unavailable(format!(
            "no backend to fetch [{}]",
            spec.url
        )))
    }
}

impl fmt::Display for SourceSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.name, self.url, self.format)
    }
}
