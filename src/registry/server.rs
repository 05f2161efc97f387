//! Registered resolvers and the registry that collects them.

use serde::Serialize;

use crate::registry::stamp::ServerStamp;

/// A resolver the proxy may forward queries to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredServer {
    pub name: String,
    pub stamp: ServerStamp,
}

impl RegisteredServer {
    pub fn new(name: impl Into<String>, stamp: ServerStamp) -> Self {
        Self {
            name: name.into(),
            stamp,
        }
    }
}

/// Ordered set of resolvers, built once during configuration loading.
///
/// Append-only. Names are not deduplicated: several sources may list a
/// resolver under the same name and every entry is kept, in registration
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Registry {
    servers: Vec<RegisteredServer>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a server.
    pub fn register(&mut self, server: RegisteredServer) {
        self.servers.push(server);
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RegisteredServer> {
        self.servers.iter()
    }

    /// First server registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RegisteredServer> {
        self.servers.iter().find(|s| names_match(&s.name, name))
    }

    /// Every server registered under `name`, in registration order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a RegisteredServer> + 'a {
        self.servers.iter().filter(move |s| names_match(&s.name, name))
    }

    pub fn into_servers(self) -> Vec<RegisteredServer> {
        self.servers
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a RegisteredServer;
    type IntoIter = std::slice::Iter<'a, RegisteredServer>;

    fn into_iter(self) -> Self::IntoIter {
        self.servers.iter()
    }
}

/// Case-insensitive resolver name comparison.
pub fn names_match(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
