// Pipeline - one full pass from domain list to subnet file and ledger

use crate::config::Config;
use crate::constants::TIMESTAMP_FORMAT;
use crate::input;
use crate::ledger::{self, Ledger};
use crate::lookup::SubnetLookup;
use crate::output;
use crate::resolver::SamplingResolver;
use crate::Result;
use chrono::Local;
use ipnetwork::Ipv4Network;
use std::collections::BTreeSet;
use std::net::Ipv4Addr;
use tracing::{info, warn};

/// Counters from one run, for the closing summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub domains: usize,
    pub addresses: usize,
    pub subnets: usize,
    pub new_addresses: usize,
}

/// Execute one full pass: domains -> addresses -> subnets + ledger update.
///
/// Fully sequential. Only a missing domain file aborts the run (before any
/// output file is touched); resolution and lookup failures are logged and
/// degraded per domain or per address.
pub async fn run(config: &Config) -> Result<RunSummary> {
    let domains = input::load_domains(&config.domain_file)?;
    info!(
        "loaded {} domains from {}",
        domains.len(),
        config.domain_file.display()
    );

    let resolver = SamplingResolver::new(config);
    let addresses = resolve_all(&resolver, &domains).await;
    info!("{} distinct addresses observed", addresses.len());

    let lookup = SubnetLookup::new(config)?;
    let mut subnets: BTreeSet<Ipv4Network> = BTreeSet::new();
    for address in &addresses {
        let subnet = lookup.subnet_for(*address).await;
        info!("{address} -> {subnet}");
        subnets.insert(subnet);
    }

    output::write_subnets(&config.subnet_file, &subnets)?;
    info!(
        "wrote {} subnets to {}",
        subnets.len(),
        config.subnet_file.display()
    );

    let mut history = Ledger::load(&config.ledger_file)?;
    let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();
    let new_entries = history.observe(&addresses, &timestamp);
    history.save(&config.ledger_file)?;

    if !new_entries.is_empty() {
        ledger::write_entries(&config.new_ips_file, &new_entries)?;
        info!(
            "{} new addresses recorded in {}",
            new_entries.len(),
            config.new_ips_file.display()
        );
    }

    Ok(RunSummary {
        domains: domains.len(),
        addresses: addresses.len(),
        subnets: subnets.len(),
        new_addresses: new_entries.len(),
    })
}

/// Resolve every domain, accumulating one global address set. A failing
/// domain is logged and skipped; the run continues.
async fn resolve_all(resolver: &SamplingResolver, domains: &[String]) -> BTreeSet<Ipv4Addr> {
    let mut addresses = BTreeSet::new();

    for domain in domains {
        info!("resolving {domain}");
        match resolver.resolve_domain(domain).await {
            Ok(found) => {
                info!("{domain}: {} addresses", found.len());
                addresses.extend(found);
            }
            Err(e) => warn!("skipping {domain}: {e:#}"),
        }
    }

    addresses
}
