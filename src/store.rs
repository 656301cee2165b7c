//! Sighting persistence: the `SightingStore` seam and its Supabase client.
//!
//! The store only ever sees rows that still lack coordinates, and only
//! ever writes `latitude`/`longitude`.

use std::fmt;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::location::Coordinate;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// PostgREST on Supabase returns at most this many rows per request.
pub const MAX_PAGE_SIZE: usize = 1000;

/// A sighting that still needs coordinates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SightingRow {
    pub id: i64,
    pub location: Option<String>,
}

/// One coordinate write, keyed by sighting id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CoordinateUpdate {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl CoordinateUpdate {
    /// Values are rounded to 6 decimal places (~0.1 m).
    pub fn new(id: i64, coordinate: Coordinate) -> Self {
        let c = coordinate.rounded();
        Self {
            id,
            latitude: c.lat,
            longitude: c.lon,
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    Network(String),
    Status { code: u16, body: String },
    InvalidResponse(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::Status { code, body } => write!(f, "Store returned HTTP {}: {}", code, body),
            Self::InvalidResponse(msg) => write!(f, "Invalid store response: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ureq::Error> for StoreError {
    fn from(e: ureq::Error) -> Self {
        match e {
            ureq::Error::Status(code, response) => StoreError::Status {
                code,
                body: response.into_string().unwrap_or_default(),
            },
            other => StoreError::Network(other.to_string()),
        }
    }
}

pub trait SightingStore {
    /// Rows with `latitude IS NULL` and `location IS NOT NULL`, ordered by id.
    fn fetch_missing_page(&self, offset: usize, limit: usize) -> Result<Vec<SightingRow>, StoreError>;

    /// Upsert with `id` as the conflict key.
    fn upsert_coordinates(&self, updates: &[CoordinateUpdate]) -> Result<(), StoreError>;

    /// Set one coordinate on every listed id.
    fn update_coordinates(&self, ids: &[i64], coordinate: Coordinate) -> Result<(), StoreError>;
}

/// Page through the store until a short or empty page comes back.
///
/// `page_size` is clamped to [`MAX_PAGE_SIZE`]: a larger request would come
/// back short and end paging early.
pub fn fetch_all_missing<S: SightingStore + ?Sized>(
    store: &S,
    page_size: usize,
) -> Result<Vec<SightingRow>, StoreError> {
    if page_size > MAX_PAGE_SIZE {
        warn!("Page size {} exceeds the server cap; using {}", page_size, MAX_PAGE_SIZE);
    }
    let page_size = page_size.clamp(1, MAX_PAGE_SIZE);
    let mut rows = Vec::new();
    let mut offset = 0;
    loop {
        let page = store.fetch_missing_page(offset, page_size)?;
        let n = page.len();
        rows.extend(page);
        offset += n;
        if n > 0 {
            info!("  Fetched {} records...", rows.len());
        }
        if n < page_size {
            break;
        }
    }
    Ok(rows)
}

/// Supabase (PostgREST) client for the sightings table.
pub struct SupabaseStore {
    agent: ureq::Agent,
    table_url: String,
    key: String,
}

impl SupabaseStore {
    pub fn new(base_url: &str, key: &str, table: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            table_url: table_url(base_url, table),
            key: key.to_string(),
        }
    }

    pub fn table_url(&self) -> &str {
        &self.table_url
    }

    fn request(&self, method: &str) -> ureq::Request {
        self.agent
            .request(method, &self.table_url)
            .set("apikey", &self.key)
            .set("Authorization", &format!("Bearer {}", self.key))
    }
}

impl SightingStore for SupabaseStore {
    fn fetch_missing_page(&self, offset: usize, limit: usize) -> Result<Vec<SightingRow>, StoreError> {
        let mut req = self.request("GET");
        for (k, v) in missing_page_query(offset, limit) {
            req = req.query(k, &v);
        }
        let response = req.call()?;
        response
            .into_json()
            .map_err(|e| StoreError::InvalidResponse(e.to_string()))
    }

    fn upsert_coordinates(&self, updates: &[CoordinateUpdate]) -> Result<(), StoreError> {
        if updates.is_empty() {
            return Ok(());
        }
        self.request("POST")
            .query("on_conflict", "id")
            .set("Prefer", "resolution=merge-duplicates,return=minimal")
            .send_json(updates)?;
        debug!("Upserted {} coordinates", updates.len());
        Ok(())
    }

    fn update_coordinates(&self, ids: &[i64], coordinate: Coordinate) -> Result<(), StoreError> {
        if ids.is_empty() {
            return Ok(());
        }
        let c = coordinate.rounded();
        self.request("PATCH")
            .query("id", &id_filter(ids))
            .set("Prefer", "return=minimal")
            .send_json(serde_json::json!({ "latitude": c.lat, "longitude": c.lon }))?;
        Ok(())
    }
}

fn table_url(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{}", base_url.trim_end_matches('/'), table)
}

fn missing_page_query(offset: usize, limit: usize) -> Vec<(&'static str, String)> {
    vec![
        ("select", "id,location".to_string()),
        ("latitude", "is.null".to_string()),
        ("location", "not.is.null".to_string()),
        ("order", "id.asc".to_string()),
        ("offset", offset.to_string()),
        ("limit", limit.to_string()),
    ]
}

/// PostgREST membership filter: `in.(1,2,3)`.
fn id_filter(ids: &[i64]) -> String {
    let list: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("in.({})", list.join(","))
}
