//! Resolver registry.
//!
//! # Data Flow
//! ```text
//! server_names / [servers] keys
//!     → wanted.rs (names to activate)
//!
//! sources (discovered resolvers, filtered by wanted names)
//! explicit servers (legacy fields → stamp.rs)
//!     → server.rs (Registry, ordered, append-only)
//!     → handed to the proxy runtime, read-only
//! ```
//!
//! # Design Decisions
//! - Names compare case-insensitively everywhere
//! - No deduplication: resolvers sharing a name all stay registered

pub mod server;
pub mod stamp;
pub mod wanted;

pub use server::{RegisteredServer, Registry};
pub use stamp::{LegacyStampBuilder, ServerStamp, StampBuilder, StampError, StampProps};
pub use wanted::WantedNames;
