//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loading produces:
//!     → logging.rs (structured log events)
//!
//! Consumers:
//!     → stderr via tracing-subscriber fmt layer
//! ```

pub mod logging;
