//! The set of resolver names the operator wants active.

use std::collections::BTreeMap;

use crate::registry::server::names_match;

/// Resolver names to activate, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WantedNames {
    names: Vec<String>,
}

impl WantedNames {
    /// Use the explicit `server_names` list when present, otherwise every
    /// explicitly configured server (in sorted key order).
    ///
    /// Source-derived resolvers are never wanted unless listed by name.
    pub fn resolve<V>(server_names: Option<&[String]>, servers: &BTreeMap<String, V>) -> Self {
        let names = match server_names {
            Some(names) if !names.is_empty() => names.to_vec(),
            _ => servers.keys().cloned().collect(),
        };
        Self { names }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|wanted| names_match(wanted, name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
