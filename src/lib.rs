//! Sighting geocoder: resolve free-text sighting locations to coordinates.
//!
//! The [`location`] module is the offline resolver. [`store`] and
//! [`backfill`] run it (or Nominatim) over a Supabase table.

pub mod backfill;
pub mod config;
pub mod location;
pub mod logging;
pub mod store;

pub use location::{resolve, LocationResolver, ResolvedCoordinate};
