// Configuration - explicit runtime configuration for a single run

use crate::constants;
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime configuration, passed explicitly into each pipeline stage.
///
/// Initialized once at startup from the values in [`constants`] and never
/// mutated afterwards. The builder-style helpers exist so tests can redirect
/// files into a temporary directory or point the lookup at a local endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    /// Upstream DNS servers queried for A records.
    pub dns_servers: Vec<IpAddr>,
    /// Sequential queries issued per domain.
    pub query_rounds: usize,
    /// Newline-delimited domain list (input).
    pub domain_file: PathBuf,
    /// Sorted subnet list (output, overwritten).
    pub subnet_file: PathBuf,
    /// Persisted first/last-seen history (merged across runs).
    pub ledger_file: PathBuf,
    /// Addresses new in the current run (written only when non-empty).
    pub new_ips_file: PathBuf,
    /// Base URL of the subnet lookup service.
    pub lookup_base_url: String,
    /// Per-request timeout for subnet lookups.
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dns_servers: constants::DNS_SERVERS.iter().copied().map(IpAddr::V4).collect(),
            query_rounds: constants::QUERY_ROUNDS,
            domain_file: PathBuf::from(constants::DOMAIN_FILE),
            subnet_file: PathBuf::from(constants::SUBNET_FILE),
            ledger_file: PathBuf::from(constants::LEDGER_FILE),
            new_ips_file: PathBuf::from(constants::NEW_IPS_FILE),
            lookup_base_url: constants::LOOKUP_BASE_URL.to_string(),
            http_timeout: constants::HTTP_TIMEOUT,
        }
    }
}

impl Config {
    /// Root all four files in `dir`, keeping the default file names.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            domain_file: dir.join(constants::DOMAIN_FILE),
            subnet_file: dir.join(constants::SUBNET_FILE),
            ledger_file: dir.join(constants::LEDGER_FILE),
            new_ips_file: dir.join(constants::NEW_IPS_FILE),
            ..Self::default()
        }
    }

    /// Replace the lookup service endpoint.
    pub fn with_lookup_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.lookup_base_url = base_url.into();
        self
    }

    /// Replace the per-domain query count.
    pub fn with_query_rounds(mut self, rounds: usize) -> Self {
        self.query_rounds = rounds;
        self
    }
}
