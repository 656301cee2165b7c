//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Round both axes to 6 decimal places (storage convention).
    pub fn rounded(self) -> Self {
        Self {
            lat: round6(self.lat),
            lon: round6(self.lon),
        }
    }
}

fn round6(v: f64) -> f64 {
    (v * 1_000_000.0).round() / 1_000_000.0
}

/// Granularity of a match. Controls jitter magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrecisionTier {
    City,
    Region,
    Country,
}

impl fmt::Display for PrecisionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::City => write!(f, "city"),
            Self::Region => write!(f, "region"),
            Self::Country => write!(f, "country"),
        }
    }
}

/// Which stage of the matcher produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStage {
    CompoundCity,
    CompoundSubRegion,
    ExactCity,
    RegionCode,
    RegionName,
    CountryStructured,
    FuzzyCity,
    CountryFallback,
}

impl MatchStage {
    pub fn tier(self) -> PrecisionTier {
        match self {
            Self::CompoundCity | Self::ExactCity | Self::FuzzyCity => PrecisionTier::City,
            Self::CompoundSubRegion | Self::RegionCode | Self::RegionName => PrecisionTier::Region,
            Self::CountryStructured | Self::CountryFallback => PrecisionTier::Country,
        }
    }
}

impl fmt::Display for MatchStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::CompoundCity => "compound-city",
            Self::CompoundSubRegion => "compound-subregion",
            Self::ExactCity => "exact-city",
            Self::RegionCode => "region-code",
            Self::RegionName => "region-name",
            Self::CountryStructured => "country",
            Self::FuzzyCity => "fuzzy-city",
            Self::CountryFallback => "country-fallback",
        };
        write!(f, "{}", s)
    }
}

/// A deterministic table hit, before jitter is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationMatch {
    /// Centroid taken verbatim from the reference table.
    pub base: Coordinate,
    pub stage: MatchStage,
    /// The table key that matched (city name, region code, country name...).
    pub key: &'static str,
}

impl LocationMatch {
    pub fn tier(&self) -> PrecisionTier {
        self.stage.tier()
    }
}

/// Resolver output: a jittered coordinate tagged with how it was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedCoordinate {
    pub lat: f64,
    pub lon: f64,
    pub tier: PrecisionTier,
    pub stage: MatchStage,
    pub key: &'static str,
}

impl ResolvedCoordinate {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.lat, self.lon)
    }
}

/// Errors from online geocoding providers.
#[derive(Debug)]
pub enum GeocodeError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for GeocodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(msg) => write!(f, "Network error: {}", msg),
            Self::InvalidResponse(msg) => write!(f, "Invalid API response: {}", msg),
        }
    }
}

impl std::error::Error for GeocodeError {}
