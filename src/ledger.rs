// Address ledger - first/last-seen history persisted as CSV

use crate::constants::LEDGER_HEADER;
use crate::error::WatchError;
use crate::Result;
use csv::WriterBuilder;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::path::Path;

/// One row of the ledger: an address and when it was first and last
/// observed. Timestamps are opaque strings; existing values round-trip
/// untouched, new ones come from the current run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    #[serde(rename = "IP")]
    pub address: Ipv4Addr,
    #[serde(rename = "First Seen")]
    pub first_seen: String,
    #[serde(rename = "Last Seen")]
    pub last_seen: String,
}

/// History of every address ever observed, keyed by address.
///
/// Entries keep their on-disk order across rewrites; addresses new to the
/// current run are appended. FirstSeen is immutable once set, LastSeen is
/// refreshed on every run that re-observes the address, and entries are
/// never deleted.
#[derive(Debug, Default)]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
    index: HashMap<Ipv4Addr, usize>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a ledger from disk. A missing file is an empty ledger, not an
    /// error. Duplicate address rows collapse to the last one.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(source) => WatchError::FileSystem {
                path: path.display().to_string(),
                source,
            },
            other => WatchError::ParseError {
                message: format!("ledger {}: {other:?}", path.display()),
            },
        })?;

        let mut ledger = Self::new();
        for record in reader.deserialize() {
            let entry: LedgerEntry = record?;
            ledger.insert(entry);
        }
        Ok(ledger)
    }

    fn insert(&mut self, entry: LedgerEntry) {
        match self.index.get(&entry.address) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.address, self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Merge one run's observations taken at `timestamp`.
    ///
    /// Known addresses get a fresh LastSeen; unknown ones are appended with
    /// FirstSeen = LastSeen = `timestamp`. Returns the entries created by
    /// this run, in observation order.
    pub fn observe<'a>(
        &mut self,
        addresses: impl IntoIterator<Item = &'a Ipv4Addr>,
        timestamp: &str,
    ) -> Vec<LedgerEntry> {
        let mut new_entries = Vec::new();

        for &address in addresses {
            match self.index.get(&address) {
                Some(&position) => {
                    self.entries[position].last_seen = timestamp.to_string();
                }
                None => {
                    let entry = LedgerEntry {
                        address,
                        first_seen: timestamp.to_string(),
                        last_seen: timestamp.to_string(),
                    };
                    new_entries.push(entry.clone());
                    self.insert(entry);
                }
            }
        }

        new_entries
    }

    /// Rewrite the full ledger at `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_entries(path, &self.entries)
    }

    pub fn get(&self, address: &Ipv4Addr) -> Option<&LedgerEntry> {
        self.index.get(address).map(|&position| &self.entries[position])
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Write entries as CSV under the fixed header. Shared by the main ledger
/// and the new-addresses snapshot; overwrites any previous content.
pub fn write_entries<P: AsRef<Path>>(path: P, entries: &[LedgerEntry]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path.as_ref())?;

    writer.write_record(LEDGER_HEADER)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    fn addresses(list: &[&str]) -> BTreeSet<Ipv4Addr> {
        list.iter().map(|ip| ip.parse().unwrap()).collect()
    }

    #[test]
    fn missing_file_is_an_empty_ledger() {
        let dir = TempDir::new().unwrap();
        let ledger = Ledger::load(dir.path().join("ip_ledger.csv")).unwrap();
        assert!(ledger.is_empty());
    }

    #[test]
    fn observe_records_first_and_last_seen() {
        let mut ledger = Ledger::new();
        let new_entries = ledger.observe(&addresses(&["9.9.9.9"]), "2026-08-07 10:00:00");

        assert_eq!(new_entries.len(), 1);
        let entry = ledger.get(&"9.9.9.9".parse().unwrap()).unwrap();
        assert_eq!(entry.first_seen, "2026-08-07 10:00:00");
        assert_eq!(entry.last_seen, "2026-08-07 10:00:00");
    }

    #[test]
    fn reobservation_updates_only_last_seen() {
        let mut ledger = Ledger::new();
        ledger.observe(&addresses(&["9.9.9.9"]), "2026-08-06 09:00:00");
        let new_entries = ledger.observe(&addresses(&["9.9.9.9", "8.8.8.8"]), "2026-08-07 10:00:00");

        assert_eq!(new_entries.len(), 1);
        assert_eq!(new_entries[0].address, "8.8.8.8".parse::<Ipv4Addr>().unwrap());

        let known = ledger.get(&"9.9.9.9".parse().unwrap()).unwrap();
        assert_eq!(known.first_seen, "2026-08-06 09:00:00");
        assert_eq!(known.last_seen, "2026-08-07 10:00:00");

        let added = ledger.get(&"8.8.8.8".parse().unwrap()).unwrap();
        assert_eq!(added.first_seen, "2026-08-07 10:00:00");
        assert_eq!(added.last_seen, "2026-08-07 10:00:00");
    }

    #[test]
    fn observe_is_idempotent_for_the_key_set() {
        let mut ledger = Ledger::new();
        ledger.observe(&addresses(&["9.9.9.9", "8.8.8.8"]), "2026-08-07 10:00:00");
        let second = ledger.observe(&addresses(&["9.9.9.9", "8.8.8.8"]), "2026-08-07 10:05:00");

        assert!(second.is_empty());
        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.get(&"9.9.9.9".parse().unwrap()).unwrap().first_seen,
            "2026-08-07 10:00:00"
        );
    }

    #[test]
    fn save_and_load_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_ledger.csv");

        let mut ledger = Ledger::new();
        ledger.observe(&addresses(&["9.9.9.9"]), "2026-08-06 09:00:00");
        ledger.observe(&addresses(&["1.1.1.1"]), "2026-08-07 10:00:00");
        ledger.save(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("IP,First Seen,Last Seen\n"));

        let reloaded = Ledger::load(&path).unwrap();
        assert_eq!(reloaded.entries(), ledger.entries());
        // prior entries keep their prior order
        assert_eq!(reloaded.entries()[0].address, "9.9.9.9".parse::<Ipv4Addr>().unwrap());
        assert_eq!(reloaded.entries()[1].address, "1.1.1.1".parse::<Ipv4Addr>().unwrap());
    }

    #[test]
    fn duplicate_rows_collapse_to_the_last() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_ledger.csv");
        std::fs::write(
            &path,
            "IP,First Seen,Last Seen\n\
             9.9.9.9,2026-08-01 00:00:00,2026-08-01 00:00:00\n\
             9.9.9.9,2026-08-02 00:00:00,2026-08-03 00:00:00\n",
        )
        .unwrap();

        let ledger = Ledger::load(&path).unwrap();
        assert_eq!(ledger.len(), 1);
        let entry = ledger.get(&"9.9.9.9".parse().unwrap()).unwrap();
        assert_eq!(entry.first_seen, "2026-08-02 00:00:00");
    }

    #[test]
    fn empty_ledger_still_writes_the_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ip_ledger.csv");

        Ledger::new().save(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "IP,First Seen,Last Seen\n");
    }
}
