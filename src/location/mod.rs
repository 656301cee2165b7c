//! Location subsystem for the sighting geocoder.
//!
//! Offline staged resolution against built-in reference tables, plus an
//! optional precise pass through Nominatim with a local cache.

pub mod cache;
pub mod jitter;
pub mod nominatim;
pub mod normalize;
pub mod resolver;
pub mod tables;
pub mod types;

use once_cell::sync::Lazy;

pub use cache::GeocodeCache;
pub use nominatim::{Geocoder, NominatimGeocoder};
pub use resolver::LocationResolver;
pub use tables::ReferenceTables;
pub use types::{Coordinate, GeocodeError, LocationMatch, MatchStage, PrecisionTier, ResolvedCoordinate};

static SHARED: Lazy<LocationResolver> = Lazy::new(LocationResolver::new);

/// Resolve free text to a jittered `(latitude, longitude)` pair using the
/// built-in tables. `None` when nothing matches.
pub fn resolve(location_text: &str) -> Option<(f64, f64)> {
    SHARED.resolve(location_text).map(|r| (r.lat, r.lon))
}
