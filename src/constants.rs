// cidrwatch - Network range tracker for service domains

//! Process-wide configuration constants.
//!
//! Everything an operator might retarget lives here: the upstream DNS
//! servers, the lookup service endpoint, and the input/output file names.
//! There are no command-line flags; `Config::default()` picks these up.

use std::net::Ipv4Addr;
use std::time::Duration;

// =============================================================================
// DNS resolution
// =============================================================================

/// Fixed upstream resolvers (Cloudflare). The system resolver is never used.
pub const DNS_SERVERS: [Ipv4Addr; 2] = [Ipv4Addr::new(1, 1, 1, 1), Ipv4Addr::new(1, 0, 0, 1)];

/// UDP port for upstream DNS queries.
pub const DNS_PORT: u16 = 53;

/// A-record queries issued per domain. Round-robin upstreams rotate their
/// answer sets between queries, so a single query only sees a slice of the
/// address pool behind a domain.
pub const QUERY_ROUNDS: usize = 10;

// =============================================================================
// Subnet lookup service
// =============================================================================

/// Base URL of the IP intelligence service; the address is appended verbatim.
pub const LOOKUP_BASE_URL: &str = "https://ip.guide/";

/// Timeout applied to every lookup request.
pub const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with lookup requests.
pub const USER_AGENT: &str = concat!("cidrwatch/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Files
// =============================================================================

/// Input: newline-delimited domain names.
pub const DOMAIN_FILE: &str = "domains.txt";

/// Output: sorted CIDR blocks, one per line, overwritten each run.
pub const SUBNET_FILE: &str = "subnets.txt";

/// Output: persisted address history, merged across runs.
pub const LEDGER_FILE: &str = "ip_ledger.csv";

/// Output: addresses first observed in the current run. Only written when
/// there are any.
pub const NEW_IPS_FILE: &str = "new_ips.csv";

/// Column header shared by the ledger and the new-addresses snapshot.
pub const LEDGER_HEADER: [&str; 3] = ["IP", "First Seen", "Last Seen"];

/// Local-time format for first/last-seen timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
