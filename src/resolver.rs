// DNS sampling resolver - repeated A-record queries against fixed upstreams

use crate::config::Config;
use crate::constants::DNS_PORT;
use crate::error::WatchError;
use crate::Result;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;
use std::collections::BTreeSet;
use std::net::Ipv4Addr;

/// Resolver pinned to the configured upstream servers, sampling each domain
/// with a fixed number of repeated queries.
///
/// Round-robin upstreams rotate their answer sets between queries, so one
/// query only sees a slice of the address pool behind a domain. The repeated
/// sampling is behavioral, not incidental, and the answer cache is disabled
/// so every round actually reaches the wire.
pub struct SamplingResolver {
    resolver: TokioAsyncResolver,
    rounds: usize,
}

impl SamplingResolver {
    /// Build a resolver for the servers in `config`. The system resolver
    /// configuration is never consulted.
    pub fn new(config: &Config) -> Self {
        let name_servers = NameServerConfigGroup::from_ips_clear(&config.dns_servers, DNS_PORT, true);
        let resolver_config = ResolverConfig::from_parts(None, vec![], name_servers);

        let mut opts = ResolverOpts::default();
        // a cached answer would hide rotation between rounds
        opts.cache_size = 0;

        Self {
            resolver: TokioAsyncResolver::tokio(resolver_config, opts),
            rounds: config.query_rounds,
        }
    }

    /// Union of A records across the sampling rounds, queried sequentially.
    ///
    /// Any round failing (timeout, NXDOMAIN, servfail) fails the domain as a
    /// whole; the caller logs and skips it.
    pub async fn resolve_domain(&self, domain: &str) -> Result<BTreeSet<Ipv4Addr>> {
        let mut addresses = BTreeSet::new();

        for _ in 0..self.rounds {
            let lookup = self.resolver.ipv4_lookup(domain).await.map_err(|source| {
                WatchError::ResolutionFailed {
                    domain: domain.to_string(),
                    source,
                }
            })?;
            addresses.extend(lookup.iter().map(|record| record.0));
        }

        Ok(addresses)
    }

    /// Number of queries issued per domain.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}
