//! Configuration validation.
//!
//! # Responsibilities
//! - Reject an empty listen address list
//! - Check required fields of each source declaration
//! - Fill in the refresh delay default
//!
//! # Design Decisions
//! - Fails on the first problem; every check here is an operator error
//! - Fields are checked in a fixed order so the reported field is stable

use std::path::PathBuf;
use std::time::Duration;

use crate::config::loader::ConfigError;
use crate::config::schema::SourceConfig;
use crate::source::SourceSpec;

/// Refresh delay applied when a source declares none, in hours.
pub const DEFAULT_REFRESH_DELAY_HOURS: u64 = 24;

/// Ensure at least one listen address is configured.
pub fn validate_listen_addresses(addresses: &[String]) -> Result<(), ConfigError> {
    if addresses.is_empty() {
        return Err(ConfigError::NoListenAddress);
    }
    Ok(())
}

/// Validate a source declaration and turn it into a `SourceSpec`.
pub fn validate_source(name: &str, source: &SourceConfig) -> Result<SourceSpec, ConfigError> {
    let required = [
        ("url", &source.url),
        ("minisign_key", &source.minisign_key),
        ("cache_file", &source.cache_file),
        ("format", &source.format),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(ConfigError::MissingSourceField {
                field,
                source_name: name.to_string(),
            });
        }
    }

    let hours = if source.refresh_delay <= 0 {
        tracing::debug!(
            source = %name,
            refresh_delay_hours = DEFAULT_REFRESH_DELAY_HOURS,
            "Using default refresh delay"
        );
        DEFAULT_REFRESH_DELAY_HOURS
    } else {
        source.refresh_delay as u64
    };

    Ok(SourceSpec {
        name: name.to_string(),
        url: source.url.clone(),
        minisign_key: source.minisign_key.clone(),
        cache_file: PathBuf::from(&source.cache_file),
        format: source.format.clone(),
        refresh_delay: Duration::from_secs(hours.saturating_mul(3600)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> SourceConfig {
        SourceConfig {
            url: "https://example.com/resolvers.csv".into(),
            minisign_key: "RWQ".into(),
            cache_file: "public.csv".into(),
            format: "v1".into(),
            refresh_delay: 12,
        }
    }

    #[test]
    fn test_listen_addresses() {
        assert!(validate_listen_addresses(&["127.0.0.1:53".into()]).is_ok());
        let err = validate_listen_addresses(&[]).unwrap_err();
        assert_eq!(err.to_string(), "no listen address configured");
    }

    #[test]
    fn test_valid_source() {
        let spec = validate_source("public", &source()).unwrap();
        assert_eq!(spec.name, "public");
        assert_eq!(spec.cache_file, PathBuf::from("public.csv"));
        assert_eq!(spec.refresh_delay, Duration::from_secs(12 * 3600));
    }

    #[test]
    fn test_refresh_delay_default() {
        for delay in [0, -5] {
            let mut config = source();
            config.refresh_delay = delay;
            let spec = validate_source("public", &config).unwrap();
            assert_eq!(spec.refresh_delay, Duration::from_secs(24 * 3600));
        }
    }

    #[test]
    fn test_huge_refresh_delay_saturates() {
        let mut config = source();
        config.refresh_delay = i64::MAX;
        let spec = validate_source("public", &config).unwrap();
        assert_eq!(spec.refresh_delay, Duration::from_secs(u64::MAX));
    }

    #[test]
    fn test_missing_fields() {
        let cases: [(&str, fn(&mut SourceConfig)); 4] = [
            ("url", |s: &mut SourceConfig| s.url.clear()),
            ("minisign_key", |s: &mut SourceConfig| s.minisign_key.clear()),
            ("cache_file", |s: &mut SourceConfig| s.cache_file.clear()),
            ("format", |s: &mut SourceConfig| s.format.clear()),
        ];
        for (field, clear) in cases {
            let mut config = source();
            clear(&mut config);
            let err = validate_source("public", &config).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("missing {} for source [public]", field)
            );
        }
    }

    #[test]
    fn test_first_missing_field_reported() {
        let err = validate_source("empty", &SourceConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing url for source [empty]");
    }
}
