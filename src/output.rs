// Subnet file writer - sorted network blocks, one per line

use crate::error::WatchError;
use crate::Result;
use ipnetwork::Ipv4Network;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Overwrite `path` with one CIDR per line.
///
/// The set's order is the output order: `Ipv4Network` orders by network
/// address and then prefix length, which is the numeric ordering the
/// allow-list consumers expect (not a lexical sort of the strings).
pub fn write_subnets<P: AsRef<Path>>(path: P, subnets: &BTreeSet<Ipv4Network>) -> Result<()> {
    let path = path.as_ref();

    let mut contents = String::new();
    for subnet in subnets {
        contents.push_str(&subnet.to_string());
        contents.push('\n');
    }

    fs::write(path, contents).map_err(|source| WatchError::FileSystem {
        path: path.display().to_string(),
        source,
    })?;
    Ok(())
}
