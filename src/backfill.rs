//! Batch jobs that fill in missing sighting coordinates.
//!
//! Fast backfill: offline resolver over every record, upserted in batches.
//! Precise backfill: one Nominatim lookup per unique location string,
//! rate-limited and resumable through the geocode cache.

use std::collections::{HashMap, HashSet};
use std::slice;
use std::thread;
use std::time::Duration;

use log::{error, info, warn};
use rand::Rng;
use serde::Serialize;

use crate::location::resolver::is_placeholder;
use crate::location::{Coordinate, GeocodeCache, Geocoder, LocationMatch, LocationResolver};
use crate::store::{fetch_all_missing, CoordinateUpdate, SightingRow, SightingStore, StoreError};

pub const DEFAULT_PAGE_SIZE: usize = 1000;
pub const DEFAULT_BATCH_SIZE: usize = 500;
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1100);
const MAX_SKIP_SAMPLES: usize = 20;
const CHECKPOINT_EVERY: usize = 50;

/// Outcome of a backfill run.
///
/// For the fast job counts are records; for the precise job they are
/// unique location strings, except `failed_rows` which is always records.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BackfillReport {
    pub total: usize,
    pub geocoded: usize,
    pub skipped: usize,
    pub from_cache: usize,
    pub failed: usize,
    pub failed_rows: usize,
    pub skip_samples: Vec<String>,
}

impl BackfillReport {
    /// Share of `total` that ended up with a coordinate, in percent.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        100.0 * (self.geocoded + self.from_cache) as f64 / self.total as f64
    }

    fn sample(&mut self, text: &str) {
        if self.skip_samples.len() < MAX_SKIP_SAMPLES && !self.skip_samples.iter().any(|s| s == text) {
            self.skip_samples.push(text.to_string());
        }
    }
}

#[derive(Debug, Clone)]
pub struct FastOptions {
    pub page_size: usize,
    pub batch_size: usize,
    pub dry_run: bool,
}

impl Default for FastOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreciseOptions {
    pub page_size: usize,
    pub batch_size: usize,
    /// Index into the unique-location list to resume from.
    pub start_from: usize,
    /// Pause after every network lookup.
    pub delay: Duration,
    pub dry_run: bool,
}

impl Default for PreciseOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            batch_size: DEFAULT_BATCH_SIZE,
            start_from: 0,
            delay: DEFAULT_DELAY,
            dry_run: false,
        }
    }
}

pub fn run_fast_backfill<S: SightingStore + ?Sized>(
    store: &S,
    resolver: &LocationResolver,
    opts: &FastOptions,
) -> Result<BackfillReport, StoreError> {
    run_fast_backfill_with(store, resolver, opts, &mut rand::thread_rng())
}

/// Fast backfill with an injected random source for the jitter.
pub fn run_fast_backfill_with<S, R>(
    store: &S,
    resolver: &LocationResolver,
    opts: &FastOptions,
    rng: &mut R,
) -> Result<BackfillReport, StoreError>
where
    S: SightingStore + ?Sized,
    R: Rng,
{
    info!("Fetching records without coordinates...");
    let mut rows = fetch_all_missing(store, opts.page_size)?;
    let removed = dedupe_ids(&mut rows);
    if removed > 0 {
        info!("Dropped {} duplicate ids", removed);
    }
    info!("Total records to geocode: {}", rows.len());

    let batch_size = opts.batch_size.max(1);
    let mut report = BackfillReport {
        total: rows.len(),
        ..BackfillReport::default()
    };
    let mut matches: HashMap<&str, Option<LocationMatch>> = HashMap::new();
    let mut pending: Vec<CoordinateUpdate> = Vec::with_capacity(batch_size);

    for (i, row) in rows.iter().enumerate() {
        let text = row.location.as_deref().unwrap_or("");
        let found = *matches.entry(text).or_insert_with(|| resolver.locate(text));

        let Some(m) = found else {
            report.skipped += 1;
            report.sample(text);
            continue;
        };
        report.geocoded += 1;
        if opts.dry_run {
            continue;
        }

        pending.push(CoordinateUpdate::new(row.id, m.jittered(rng).coordinate()));
        if pending.len() >= batch_size {
            flush(store, &mut pending, &mut report);
            info!(
                "Updated batch: {} geocoded, {} skipped ({}/{})",
                report.geocoded,
                report.skipped,
                i + 1,
                report.total
            );
        }
    }
    flush(store, &mut pending, &mut report);

    if opts.dry_run {
        info!(
            "Would geocode: {}/{} ({:.1}%)",
            report.geocoded,
            report.total,
            report.coverage()
        );
    } else {
        info!("Geocoded: {}", report.geocoded);
        info!("Skipped: {}", report.skipped);
        if report.failed_rows > 0 {
            warn!("Failed writes: {}", report.failed_rows);
        }
        info!("Coverage: {:.1}%", report.coverage());
    }
    Ok(report)
}

/// Keep the first row for each id. Returns how many were dropped.
fn dedupe_ids(rows: &mut Vec<SightingRow>) -> usize {
    let before = rows.len();
    let mut seen = HashSet::new();
    rows.retain(|r| seen.insert(r.id));
    before - rows.len()
}

/// Write the buffered batch. A rejected batch is retried row by row.
fn flush<S: SightingStore + ?Sized>(store: &S, pending: &mut Vec<CoordinateUpdate>, report: &mut BackfillReport) {
    if pending.is_empty() {
        return;
    }
    if let Err(e) = store.upsert_coordinates(pending) {
        error!("Batch update error: {} (retrying {} rows individually)", e, pending.len());
        for update in pending.iter() {
            if let Err(e) = store.upsert_coordinates(slice::from_ref(update)) {
                warn!("Row {} failed: {}", update.id, e);
                report.failed_rows += 1;
            }
        }
    }
    pending.clear();
}

/// Precise backfill: geocode each unique location once and fan the result
/// out to every record that carries it.
pub fn run_precise_backfill<S, G>(
    store: &S,
    geocoder: &G,
    cache: &mut GeocodeCache,
    opts: &PreciseOptions,
) -> Result<BackfillReport, StoreError>
where
    S: SightingStore + ?Sized,
    G: Geocoder + ?Sized,
{
    info!("Fetching locations without coordinates...");
    let rows = fetch_all_missing(store, opts.page_size)?;
    let groups = group_by_location(rows);
    let records: usize = groups.iter().map(|(_, ids)| ids.len()).sum();
    info!(
        "Found {} unique locations covering {} records",
        groups.len(),
        records
    );

    let skipped = opts.start_from.min(groups.len());
    let mut report = BackfillReport {
        total: groups.len() - skipped,
        skipped,
        ..BackfillReport::default()
    };
    if opts.dry_run {
        info!("Dry run complete.");
        return Ok(report);
    }
    info!("Loaded {} cached locations", cache.len());

    let batch_size = opts.batch_size.max(1);
    for (i, (location, ids)) in groups.iter().enumerate().skip(opts.start_from) {
        let coordinate = match cache.get(location) {
            Some(c) => {
                report.from_cache += 1;
                Some(c)
            }
            None => {
                let looked_up = lookup(geocoder, location);
                if !opts.delay.is_zero() {
                    thread::sleep(opts.delay);
                }
                match looked_up {
                    Some(c) => {
                        cache.put(location, c);
                        report.geocoded += 1;
                    }
                    None => {
                        report.failed += 1;
                        report.sample(location);
                    }
                }
                looked_up
            }
        };

        if let Some(c) = coordinate {
            for chunk in ids.chunks(batch_size) {
                if let Err(e) = store.update_coordinates(chunk, c) {
                    error!("Update error for {}: {}", location, e);
                    report.failed_rows += chunk.len();
                }
            }
        }

        if (i + 1) % CHECKPOINT_EVERY == 0 {
            save_cache(cache);
            info!(
                "Progress: {}/{} | Geocoded: {} | Failed: {} | Cached: {}",
                i + 1,
                groups.len(),
                report.geocoded,
                report.failed,
                report.from_cache
            );
        }
    }
    save_cache(cache);

    info!("Geocoded: {}", report.geocoded);
    info!("From cache: {}", report.from_cache);
    info!("Failed: {}", report.failed);
    Ok(report)
}

fn lookup<G: Geocoder + ?Sized>(geocoder: &G, location: &str) -> Option<Coordinate> {
    match geocoder.geocode(location) {
        Ok(found) => found,
        Err(e) => {
            warn!("Geocode error for '{}': {}", location, e);
            None
        }
    }
}

fn save_cache(cache: &GeocodeCache) {
    if let Err(e) = cache.persist() {
        error!("Could not save cache to {}: {}", cache.path().display(), e);
    }
}

/// Group ids by exact location text, in first-seen order. Blank and
/// placeholder locations are left out.
fn group_by_location(rows: Vec<SightingRow>) -> Vec<(String, Vec<i64>)> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<i64>)> = Vec::new();
    for row in rows {
        let Some(location) = row.location.filter(|l| !is_placeholder(l)) else {
            continue;
        };
        match index.get(&location) {
            Some(&slot) => groups[slot].1.push(row.id),
            None => {
                index.insert(location.clone(), groups.len());
                groups.push((location, vec![row.id]));
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::GeocodeError;
    use crate::store::memory::MemoryStore;
    use approx::assert_abs_diff_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use tempfile::TempDir;

    fn fast(store: &MemoryStore, opts: &FastOptions) -> BackfillReport {
        let resolver = LocationResolver::new();
        run_fast_backfill_with(store, &resolver, opts, &mut StdRng::seed_from_u64(626)).unwrap()
    }

    #[derive(Default)]
    struct FakeGeocoder {
        known: HashMap<&'static str, Coordinate>,
        broken: HashSet<&'static str>,
        calls: RefCell<Vec<String>>,
    }

    impl Geocoder for FakeGeocoder {
        fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
            self.calls.borrow_mut().push(query.to_string());
            if self.broken.contains(query) {
                return Err(GeocodeError::Network("timed out".into()));
            }
            Ok(self.known.get(query).copied())
        }
    }

    fn precise_opts() -> PreciseOptions {
        PreciseOptions {
            delay: Duration::ZERO,
            ..PreciseOptions::default()
        }
    }

    fn temp_cache() -> (GeocodeCache, TempDir) {
        let dir = TempDir::new().unwrap();
        let cache = GeocodeCache::load_from(dir.path().join("geocode_cache.json"));
        (cache, dir)
    }

    #[test]
    fn test_coverage() {
        let report = BackfillReport {
            total: 8,
            geocoded: 5,
            from_cache: 1,
            ..BackfillReport::default()
        };
        assert_abs_diff_eq!(report.coverage(), 75.0, epsilon = 1e-9);
        assert_eq!(BackfillReport::default().coverage(), 0.0);
    }

    #[test]
    fn test_fast_backfill_counts() {
        let store = MemoryStore::with_rows(&[
            (1, Some("London")),
            (2, Some("Anytown, TX")),
            (3, Some("Unspecified")),
            (4, Some("Xyzzy Flats")),
        ]);
        let report = fast(&store, &FastOptions::default());

        assert_eq!(report.total, 4);
        assert_eq!(report.geocoded, 2);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.skip_samples, vec!["Unspecified", "Xyzzy Flats"]);
        assert_eq!(report.failed_rows, 0);

        let (lat, lon) = store.coordinate(1).unwrap();
        assert_abs_diff_eq!(lat, 51.5074, epsilon = 0.02 + 1e-6);
        assert_abs_diff_eq!(lon, -0.1278, epsilon = 0.02 + 1e-6);
        assert!(store.coordinate(2).is_some());
        assert!(store.coordinate(3).is_none());
    }

    #[test]
    fn test_fast_backfill_drops_duplicate_ids() {
        let store = MemoryStore::with_rows(&[(1, Some("London")), (1, Some("Paris")), (2, Some("London"))]);
        let report = fast(&store, &FastOptions::default());

        assert_eq!(report.total, 2);
        let (lat, _) = store.coordinate(1).unwrap();
        assert_abs_diff_eq!(lat, 51.5074, epsilon = 0.02 + 1e-6);
    }

    #[test]
    fn test_fast_backfill_jitters_each_record() {
        let store = MemoryStore::with_rows(&[(1, Some("Germany")), (2, Some("Germany"))]);
        fast(&store, &FastOptions::default());
        assert_ne!(store.coordinate(1), store.coordinate(2));
    }

    #[test]
    fn test_fast_backfill_batches() {
        let rows: Vec<(i64, Option<&str>)> = (1..=5).map(|id| (id, Some("Paris"))).collect();
        let store = MemoryStore::with_rows(&rows);
        let opts = FastOptions {
            batch_size: 2,
            ..FastOptions::default()
        };
        fast(&store, &opts);
        assert_eq!(*store.upsert_calls.borrow(), vec![2, 2, 1]);
    }

    #[test]
    fn test_fast_backfill_row_fallback() {
        let rows: Vec<(i64, Option<&str>)> = (1..=3).map(|id| (id, Some("Paris"))).collect();
        let mut store = MemoryStore::with_rows(&rows);
        store.poisoned.insert(2);
        let opts = FastOptions {
            batch_size: 3,
            ..FastOptions::default()
        };
        let report = fast(&store, &opts);

        assert_eq!(*store.upsert_calls.borrow(), vec![3, 1, 1, 1]);
        assert_eq!(report.failed_rows, 1);
        assert!(store.coordinate(1).is_some());
        assert!(store.coordinate(2).is_none());
        assert!(store.coordinate(3).is_some());
    }

    #[test]
    fn test_fast_backfill_oversized_batch_recovers() {
        let rows: Vec<(i64, Option<&str>)> = (1..=4).map(|id| (id, Some("Paris"))).collect();
        let mut store = MemoryStore::with_rows(&rows);
        store.max_batch = Some(1);
        let report = fast(&store, &FastOptions::default());

        assert_eq!(report.failed_rows, 0);
        assert_eq!(store.written.borrow().len(), 4);
    }

    #[test]
    fn test_fast_backfill_dry_run_writes_nothing() {
        let store = MemoryStore::with_rows(&[(1, Some("London")), (2, Some("Xyzzy Flats"))]);
        let opts = FastOptions {
            dry_run: true,
            ..FastOptions::default()
        };
        let report = fast(&store, &opts);

        assert_eq!(report.geocoded, 1);
        assert_eq!(report.skipped, 1);
        assert!(store.upsert_calls.borrow().is_empty());
    }

    #[test]
    fn test_skip_samples_distinct_and_capped() {
        let texts: Vec<String> = (0..30).map(|i| format!("Xyzzy{}", i)).collect();
        let mut rows: Vec<(i64, Option<&str>)> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (i as i64 + 1, Some(t.as_str())))
            .collect();
        rows.push((100, Some("Xyzzy0")));
        let store = MemoryStore::with_rows(&rows);
        let report = fast(&store, &FastOptions::default());

        assert_eq!(report.skipped, 31);
        assert_eq!(report.skip_samples.len(), MAX_SKIP_SAMPLES);
        assert_eq!(report.skip_samples[0], "Xyzzy0");
        assert_eq!(report.skip_samples[1], "Xyzzy1");
    }

    #[test]
    fn test_group_by_location_first_seen_order() {
        let rows = vec![
            SightingRow { id: 3, location: Some("Reno, NV".into()) },
            SightingRow { id: 1, location: Some("Cork".into()) },
            SightingRow { id: 5, location: None },
            SightingRow { id: 4, location: Some("Reno, NV".into()) },
        ];
        let groups = group_by_location(rows);
        assert_eq!(
            groups,
            vec![("Reno, NV".to_string(), vec![3, 4]), ("Cork".to_string(), vec![1])]
        );
    }

    #[test]
    fn test_group_by_location_drops_blank_and_placeholder() {
        let rows = vec![
            SightingRow { id: 1, location: Some("".into()) },
            SightingRow { id: 2, location: Some("   ".into()) },
            SightingRow { id: 3, location: Some(", , Unspecified".into()) },
            SightingRow { id: 4, location: Some("Cork".into()) },
        ];
        assert_eq!(group_by_location(rows), vec![("Cork".to_string(), vec![4])]);
    }

    #[test]
    fn test_precise_backfill_skips_blank_locations() {
        let store = MemoryStore::with_rows(&[(1, Some("")), (2, Some("   ")), (3, Some("Cork"))]);
        let mut geocoder = FakeGeocoder::default();
        geocoder.known.insert("Cork", Coordinate::new(51.8985, -8.4756));
        let (mut cache, _dir) = temp_cache();

        let report = run_precise_backfill(&store, &geocoder, &mut cache, &precise_opts()).unwrap();

        assert_eq!(*geocoder.calls.borrow(), vec!["Cork"]);
        assert_eq!(report.total, 1);
        assert_eq!(report.failed, 0);
        assert!(store.coordinate(3).is_some());
    }

    #[test]
    fn test_precise_backfill_uses_cache_and_geocoder() {
        let store = MemoryStore::with_rows(&[
            (1, Some("Aberdeen, Scotland")),
            (2, Some("Aberdeen, Scotland")),
            (3, Some("Phoenix, AZ")),
            (4, Some("Nowhere")),
        ]);
        let mut geocoder = FakeGeocoder::default();
        geocoder.known.insert("Aberdeen, Scotland", Coordinate::new(57.1437, -2.0981));
        let (mut cache, _dir) = temp_cache();
        cache.put("phoenix, az", Coordinate::new(33.4484, -112.074));

        let report = run_precise_backfill(&store, &geocoder, &mut cache, &precise_opts()).unwrap();

        assert_eq!(report.total, 3);
        assert_eq!(report.geocoded, 1);
        assert_eq!(report.from_cache, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.skip_samples, vec!["Nowhere"]);
        assert_eq!(*geocoder.calls.borrow(), vec!["Aberdeen, Scotland", "Nowhere"]);

        assert_eq!(store.coordinate(1), Some((57.1437, -2.0981)));
        assert_eq!(store.coordinate(2), Some((57.1437, -2.0981)));
        assert_eq!(store.coordinate(3), Some((33.4484, -112.074)));
        assert!(store.coordinate(4).is_none());

        let reloaded = GeocodeCache::load_from(cache.path().to_path_buf());
        assert!(reloaded.get("Aberdeen, Scotland").is_some());
    }

    #[test]
    fn test_precise_backfill_start_from() {
        let store = MemoryStore::with_rows(&[(1, Some("Cork")), (2, Some("Lisburn"))]);
        let mut geocoder = FakeGeocoder::default();
        geocoder.known.insert("Cork", Coordinate::new(51.8985, -8.4756));
        geocoder.known.insert("Lisburn", Coordinate::new(54.5162, -6.058));
        let (mut cache, _dir) = temp_cache();
        let opts = PreciseOptions {
            start_from: 1,
            ..precise_opts()
        };

        let report = run_precise_backfill(&store, &geocoder, &mut cache, &opts).unwrap();

        assert_eq!(report.skipped, 1);
        assert_eq!(report.total, 1);
        assert_eq!(*geocoder.calls.borrow(), vec!["Lisburn"]);
        assert!(store.coordinate(1).is_none());
        assert!(store.coordinate(2).is_some());
    }

    #[test]
    fn test_precise_backfill_chunks_updates() {
        let rows: Vec<(i64, Option<&str>)> = (1..=5).map(|id| (id, Some("Cork"))).collect();
        let store = MemoryStore::with_rows(&rows);
        let mut geocoder = FakeGeocoder::default();
        geocoder.known.insert("Cork", Coordinate::new(51.8985, -8.4756));
        let (mut cache, _dir) = temp_cache();
        let opts = PreciseOptions {
            batch_size: 2,
            ..precise_opts()
        };

        run_precise_backfill(&store, &geocoder, &mut cache, &opts).unwrap();

        let sizes: Vec<usize> = store.update_calls.borrow().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
    }

    #[test]
    fn test_precise_backfill_survives_errors() {
        let mut store = MemoryStore::with_rows(&[(1, Some("Cork")), (2, Some("Flaky")), (3, Some("Lisburn"))]);
        store.poisoned.insert(3);
        let mut geocoder = FakeGeocoder::default();
        geocoder.known.insert("Cork", Coordinate::new(51.8985, -8.4756));
        geocoder.known.insert("Lisburn", Coordinate::new(54.5162, -6.058));
        geocoder.broken.insert("Flaky");
        let (mut cache, _dir) = temp_cache();

        let report = run_precise_backfill(&store, &geocoder, &mut cache, &precise_opts()).unwrap();

        assert_eq!(report.geocoded, 2);
        assert_eq!(report.failed, 1);
        assert_eq!(report.failed_rows, 1);
        assert!(store.coordinate(1).is_some());
        assert!(cache.get("lisburn").is_some());
    }

    #[test]
    fn test_precise_backfill_dry_run() {
        let store = MemoryStore::with_rows(&[(1, Some("Cork")), (2, Some("Cork")), (3, Some("Lisburn"))]);
        let geocoder = FakeGeocoder::default();
        let (mut cache, _dir) = temp_cache();
        let opts = PreciseOptions {
            dry_run: true,
            ..precise_opts()
        };

        let report = run_precise_backfill(&store, &geocoder, &mut cache, &opts).unwrap();

        assert_eq!(report.total, 2);
        assert!(geocoder.calls.borrow().is_empty());
        assert!(store.update_calls.borrow().is_empty());
    }
}
