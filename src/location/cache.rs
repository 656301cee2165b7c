//! File-based cache of precise geocodes at ~/.sightgeo/geocode_cache.json.
//!
//! Case-insensitive keys. No expiry: a place does not move.
//! Backward compatible: legacy files map each location to a bare
//! `[lat, lon]` pair and are read as entries with timestamp 0.

use super::types::Coordinate;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
struct CacheEntry {
    lat: f64,
    lon: f64,
    timestamp: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Entry(CacheEntry),
    Pair([f64; 2]),
}

impl From<StoredEntry> for CacheEntry {
    fn from(stored: StoredEntry) -> Self {
        match stored {
            StoredEntry::Entry(e) => e,
            StoredEntry::Pair([lat, lon]) => CacheEntry { lat, lon, timestamp: 0 },
        }
    }
}

/// The geocode cache.
pub struct GeocodeCache {
    path: PathBuf,
    entries: HashMap<String, CacheEntry>,
}

impl GeocodeCache {
    /// Load cache from the default location (~/.sightgeo/geocode_cache.json).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load cache from a specific path. A missing or unreadable file gives
    /// an empty cache.
    pub fn load_from(path: PathBuf) -> Self {
        let entries = Self::read_file(&path).unwrap_or_default();
        Self { path, entries }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".sightgeo")
            .join("geocode_cache.json")
    }

    fn read_file(path: &Path) -> Option<HashMap<String, CacheEntry>> {
        let data = fs::read_to_string(path).ok()?;
        match serde_json::from_str::<HashMap<String, StoredEntry>>(&data) {
            Ok(raw) => Some(
                raw.into_iter()
                    .map(|(k, v)| (k.to_lowercase(), CacheEntry::from(v)))
                    .collect(),
            ),
            Err(e) => {
                warn!("Ignoring unreadable cache {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, query: &str) -> Option<Coordinate> {
        self.entries
            .get(&query.to_lowercase())
            .map(|e| Coordinate::new(e.lat, e.lon))
    }

    /// Store in memory. Call [`persist`](Self::persist) to write to disk.
    pub fn put(&mut self, query: &str, coordinate: Coordinate) {
        let entry = CacheEntry {
            lat: coordinate.lat,
            lon: coordinate.lon,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        self.entries.insert(query.to_lowercase(), entry);
    }

    pub fn persist(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_cache() -> (GeocodeCache, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geocode_cache.json");
        (GeocodeCache::load_from(path), dir)
    }

    #[test]
    fn test_cache_put_get() {
        let (mut cache, _dir) = test_cache();
        cache.put("Aberdeen, Scotland", Coordinate::new(57.1437, -2.0981));

        let c = cache.get("Aberdeen, Scotland").unwrap();
        assert!((c.lat - 57.1437).abs() < 0.001);
        assert!((c.lon - -2.0981).abs() < 0.001);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_case_insensitive() {
        let (mut cache, _dir) = test_cache();
        cache.put("Phoenix, AZ", Coordinate::new(33.4484, -112.074));

        assert!(cache.get("PHOENIX, AZ").is_some());
        assert!(cache.get("phoenix, az").is_some());
    }

    #[test]
    fn test_cache_miss() {
        let (cache, _dir) = test_cache();
        assert!(cache.get("nonexistent").is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_is_in_memory_until_persist() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("geocode_cache.json");

        let mut cache = GeocodeCache::load_from(path.clone());
        cache.put("Tokyo", Coordinate::new(35.6762, 139.6503));
        assert!(!path.exists());

        cache.persist().unwrap();
        let reloaded = GeocodeCache::load_from(path);
        let c = reloaded.get("tokyo").unwrap();
        assert!((c.lat - 35.6762).abs() < 1e-9);
    }

    #[test]
    fn test_cache_reads_legacy_pairs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geocode_cache.json");
        let legacy = r#"{
            "Sudbury, ON": [46.4917, -80.993],
            "Cork, Ireland": {"lat": 51.8985, "lon": -8.4756, "timestamp": 1700000000000}
        }"#;
        fs::write(&path, legacy).unwrap();

        let cache = GeocodeCache::load_from(path);
        assert_eq!(cache.len(), 2);
        let c = cache.get("sudbury, on").unwrap();
        assert!((c.lat - 46.4917).abs() < 1e-9);
        assert!((c.lon - -80.993).abs() < 1e-9);
        assert!(cache.get("Cork, Ireland").is_some());
    }

    #[test]
    fn test_corrupt_file_gives_empty_cache() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("geocode_cache.json");
        fs::write(&path, "{not json").unwrap();

        let cache = GeocodeCache::load_from(path);
        assert!(cache.is_empty());
    }
}
