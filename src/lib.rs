// cidrwatch - Network range tracker for service domains

//! cidrwatch resolves a list of domain names to IPv4 addresses, maps each
//! address to its containing network block via an external lookup service,
//! and maintains a historical ledger of observed addresses. The output is an
//! up-to-date allow-list of the network ranges behind a service and a record
//! of when each address was first and last seen.

pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod ledger;
pub mod lookup;
pub mod output;
pub mod pipeline;
pub mod resolver;

// Re-export commonly used types
pub use crate::config::Config;
pub use crate::error::WatchError;
pub use crate::pipeline::{run, RunSummary};

/// Result type for cidrwatch operations
pub type Result<T> = anyhow::Result<T>;

/// Error type for cidrwatch operations
pub use anyhow::Error;
