//! Precise online geocoding via OpenStreetMap Nominatim.

use std::time::Duration;

use log::debug;
use serde::Deserialize;

use super::types::{Coordinate, GeocodeError};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/search";
pub const DEFAULT_USER_AGENT: &str = "SightingGeocoder/0.3 (sighting-backfill)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Anything that can turn a free-text location into a single coordinate.
///
/// `Ok(None)` means the provider answered but found nothing.
pub trait Geocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError>;
}

#[derive(Deserialize, Debug, Clone)]
pub struct NominatimResult {
    pub lat: String,
    pub lon: String,
    #[serde(default)]
    pub display_name: String,
}

/// Blocking Nominatim client. One request per call, top result only.
pub struct NominatimGeocoder {
    agent: ureq::Agent,
    endpoint: String,
    user_agent: String,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_NOMINATIM_URL, DEFAULT_USER_AGENT)
    }

    pub fn with_endpoint(endpoint: &str, user_agent: &str) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(REQUEST_TIMEOUT).build();
        Self {
            agent,
            endpoint: endpoint.to_string(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for NominatimGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Geocoder for NominatimGeocoder {
    fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let response = self
            .agent
            .get(&self.endpoint)
            .set("User-Agent", &self.user_agent)
            .query("q", query)
            .query("format", "json")
            .query("limit", "1")
            .call()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let results: Vec<NominatimResult> = response
            .into_json()
            .map_err(|e| GeocodeError::InvalidResponse(e.to_string()))?;

        let top = first_coordinate(&results)?;
        if let (Some(c), Some(r)) = (top, results.first()) {
            debug!("Nominatim '{}' → {:.4}, {:.4} ({})", query, c.lat, c.lon, r.display_name);
        }
        Ok(top)
    }
}

/// Coordinate of the first result, if any. Nominatim sends lat/lon as strings.
pub fn first_coordinate(results: &[NominatimResult]) -> Result<Option<Coordinate>, GeocodeError> {
    let Some(top) = results.first() else {
        return Ok(None);
    };
    let lat = parse_degrees(&top.lat, 90.0)?;
    let lon = parse_degrees(&top.lon, 180.0)?;
    Ok(Some(Coordinate::new(lat, lon)))
}

fn parse_degrees(raw: &str, limit: f64) -> Result<f64, GeocodeError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| GeocodeError::InvalidResponse(format!("bad coordinate '{}'", raw)))?;
    if !value.is_finite() || value.abs() > limit {
        return Err(GeocodeError::InvalidResponse(format!(
            "coordinate out of range: {}",
            value
        )));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Vec<NominatimResult> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_first_coordinate() {
        let results = parse(
            r#"[
                {"lat": "57.1437", "lon": "-2.0981", "display_name": "Aberdeen, Scotland", "importance": 0.7},
                {"lat": "45.4647", "lon": "-98.4865", "display_name": "Aberdeen, South Dakota"}
            ]"#,
        );
        let c = first_coordinate(&results).unwrap().unwrap();
        assert!((c.lat - 57.1437).abs() < 1e-9);
        assert!((c.lon - -2.0981).abs() < 1e-9);
    }

    #[test]
    fn test_empty_results_is_none() {
        assert!(first_coordinate(&parse("[]")).unwrap().is_none());
    }

    #[test]
    fn test_missing_display_name_defaults() {
        let results = parse(r#"[{"lat": "1.5", "lon": "2.5"}]"#);
        assert_eq!(results[0].display_name, "");
        assert!(first_coordinate(&results).unwrap().is_some());
    }

    #[test]
    fn test_bad_coordinate_rejected() {
        let results = parse(r#"[{"lat": "north", "lon": "2.5"}]"#);
        assert!(matches!(
            first_coordinate(&results),
            Err(GeocodeError::InvalidResponse(_))
        ));

        let results = parse(r#"[{"lat": "95.0", "lon": "2.5"}]"#);
        assert!(first_coordinate(&results).is_err());
    }

    #[test]
    fn test_custom_endpoint() {
        let g = NominatimGeocoder::with_endpoint("http://localhost:8080/search", "test/1.0");
        assert_eq!(g.endpoint(), "http://localhost:8080/search");
        assert_eq!(NominatimGeocoder::new().endpoint(), DEFAULT_NOMINATIM_URL);
    }
}
