use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::model::RecentEntry;

/// Whether a successful lookup for `query` should be recorded. An empty
/// trimmed query is a valid lookup but is never recorded.
pub fn should_record(query: &str) -> bool {
    !query.trim().is_empty()
}

/// On-disk shape of the recents file: `{ "recents": [ { city, country } ] }`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RecentsFile {
    recents: Vec<RecentEntry>,
}

/// Ordered history of successful lookups, backed by a JSON file.
///
/// The file is read once when the store is opened; every mutation updates
/// the in-memory list first and then writes through to disk, so `count` and
/// `list` reflect the change immediately. No deduplication, no size bound.
///
/// One store is constructed at startup and handed to whoever needs it.
/// Mutation takes `&mut self`, which keeps the single-writer discipline a
/// compile-time fact; a multi-threaded embedding would wrap the store in a
/// mutex or a single-writer channel.
#[derive(Debug)]
pub struct RecentsStore {
    path: PathBuf,
    data: RecentsFile,
}

impl RecentsStore {
    /// Open the store at `path`. A missing file yields an empty list (first
    /// run); an unreadable or corrupt file is logged and also yields an
    /// empty list rather than failing startup.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(data) => data,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "corrupt recents file, starting empty");
                    RecentsFile::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => RecentsFile::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unreadable recents file, starting empty");
                RecentsFile::default()
            }
        };

        Ok(Self { path, data })
    }

    /// Open the store at the platform data directory.
    pub fn open_default() -> Result<Self> {
        Self::open(Self::default_path()?)
    }

    /// Path to the recents file in the platform data directory.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-wizard", "wizard-cli")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("recents.json"))
    }

    /// Add an entry to the end of the list. Never rejects and never
    /// deduplicates.
    pub fn append(&mut self, entry: RecentEntry) -> Result<()> {
        debug!(city = %entry.city, country = %entry.country, "recording recent search");
        self.data.recents.push(entry);
        self.save()
    }

    /// Empty the list in place. `count` is 0 as soon as this returns.
    pub fn clear(&mut self) -> Result<()> {
        self.data.recents.clear();
        self.save()
    }

    /// Entries in insertion order.
    pub fn list(&self) -> &[RecentEntry] {
        &self.data.recents
    }

    pub fn count(&self) -> usize {
        self.data.recents.len()
    }

    pub fn get(&self, index: usize) -> Option<&RecentEntry> {
        self.data.recents.get(index)
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create recents directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(&self.data)
            .context("Failed to serialize recent searches")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write recents file: {}", self.path.display()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(city: &str, country: &str) -> RecentEntry {
        RecentEntry { city: city.into(), country: country.into() }
    }

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let store = RecentsStore::open(dir.path().join("recents.json")).expect("open store");

        assert_eq!(store.count(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn append_increments_count_immediately() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut store = RecentsStore::open(dir.path().join("recents.json")).expect("open store");

        store.append(entry("Paris", "FR")).expect("append");
        assert_eq!(store.count(), 1);

        store.append(entry("London", "GB")).expect("append");
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn duplicates_are_kept_in_insertion_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut store = RecentsStore::open(dir.path().join("recents.json")).expect("open store");

        store.append(entry("Paris", "FR")).expect("append");
        store.append(entry("London", "GB")).expect("append");
        store.append(entry("Paris", "FR")).expect("append");

        let cities: Vec<&str> = store.list().iter().map(|e| e.city.as_str()).collect();
        assert_eq!(cities, ["Paris", "London", "Paris"]);
    }

    #[test]
    fn clear_empties_immediately() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let mut store = RecentsStore::open(dir.path().join("recents.json")).expect("open store");

        store.append(entry("Paris", "FR")).expect("append");
        store.clear().expect("clear");

        assert_eq!(store.count(), 0);
    }

    #[test]
    fn mutations_survive_reopen() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("recents.json");

        {
            let mut store = RecentsStore::open(&path).expect("open store");
            store.append(entry("Paris", "FR")).expect("append");
        }

        let store = RecentsStore::open(&path).expect("reopen store");
        assert_eq!(store.count(), 1);
        assert_eq!(store.get(0), Some(&entry("Paris", "FR")));
    }

    #[test]
    fn on_disk_shape_is_a_recents_array() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("recents.json");

        let mut store = RecentsStore::open(&path).expect("open store");
        store.append(entry("Paris", "FR")).expect("append");

        let written = fs::read_to_string(&path).expect("read written file");
        let value: serde_json::Value = serde_json::from_str(&written).expect("valid json");

        assert_eq!(value["recents"][0]["city"], "Paris");
        assert_eq!(value["recents"][0]["country"], "FR");
    }

    #[test]
    fn empty_queries_are_never_recorded() {
        assert!(!should_record(""));
        assert!(!should_record("   "));
        assert!(!should_record("\t\n"));
        assert!(should_record("Paris, FR"));
    }

    #[test]
    fn corrupt_file_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("recents.json");
        fs::write(&path, "{not json").expect("write corrupt file");

        let store = RecentsStore::open(&path).expect("open store");
        assert_eq!(store.count(), 0);
    }
}
