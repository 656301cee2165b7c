//! Location resolver: the staged matching pipeline.
//!
//! Stages, first hit wins:
//!   compound hint → exact city → region code → region name →
//!   country (structured) → fuzzy city → country (whole text) → no match
//!
//! `locate` is deterministic and returns the table centroid; `resolve`
//! adds tier-scaled jitter on top.

use log::{debug, trace};
use rand::Rng;

use super::normalize::{normalize, paren_hint};
use super::tables::{lookup, ReferenceEntry, ReferenceTables};
use super::types::{LocationMatch, MatchStage, ResolvedCoordinate};

/// Inputs rejected outright (compared after trimming, case-sensitive).
const PLACEHOLDERS: &[&str] = &["", ",", ", ,", ", , ", "Unspecified", ", , Unspecified"];

/// Fuzzy matching compares this many leading characters, and only for
/// city candidates strictly longer than it.
const FUZZY_PREFIX_LEN: usize = 4;

/// The staged resolver. Holds only read-only reference data, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Copy)]
pub struct LocationResolver {
    tables: ReferenceTables,
}

/// A query split into its comma-delimited roles.
#[derive(Debug)]
struct ParsedQuery<'a> {
    /// The trimmed input.
    original: &'a str,
    segments: usize,
    city_raw: &'a str,
    /// `city_raw` after normalization.
    city: String,
    paren_hint: Option<&'a str>,
    region: Option<&'a str>,
    country: Option<&'a str>,
}

impl Default for LocationResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationResolver {
    /// Resolver over the built-in reference tables.
    pub fn new() -> Self {
        Self::with_tables(*ReferenceTables::builtin())
    }

    /// Resolver over caller-supplied tables.
    pub fn with_tables(tables: ReferenceTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Resolve with thread-local randomness for the jitter.
    pub fn resolve(&self, text: &str) -> Option<ResolvedCoordinate> {
        self.resolve_with(text, &mut rand::thread_rng())
    }

    /// Resolve with an injected random source for the jitter.
    pub fn resolve_with<R: Rng>(&self, text: &str, rng: &mut R) -> Option<ResolvedCoordinate> {
        self.locate(text).map(|m| m.jittered(rng))
    }

    /// Run the matching pipeline without jitter.
    pub fn locate(&self, text: &str) -> Option<LocationMatch> {
        let Some(query) = parse_query(text) else {
            trace!("Rejected placeholder location {:?}", text);
            return None;
        };

        let found = self
            .compound_hint(&query)
            .or_else(|| self.exact_city(&query))
            .or_else(|| self.region_code(&query))
            .or_else(|| self.region_name(&query))
            .or_else(|| self.country_structured(&query))
            .or_else(|| self.fuzzy_city(&query))
            .or_else(|| self.country_fallback(&query));

        match &found {
            Some(m) => debug!("'{}' → {} via {}", query.original, m.key, m.stage),
            None => debug!("'{}' → no match", query.original),
        }
        found
    }

    fn compound_hint(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        for family in self.tables.compound_families {
            let annotation = match q.paren_hint {
                Some(hint) if hint.contains(family.marker) => hint,
                _ if q.city_raw.contains(family.marker) => q.city_raw,
                _ => continue,
            };

            // An exact city still beats the coarser annotation.
            if let Some(city) = lookup(self.tables.cities, &q.city) {
                return Some(hit(city, MatchStage::CompoundCity));
            }
            return Some(hit(family.subregion_for(annotation), MatchStage::CompoundSubRegion));
        }
        None
    }

    fn exact_city(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        lookup(self.tables.cities, &q.city).map(|city| hit(city, MatchStage::ExactCity))
    }

    fn region_code(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        let code = q.region?.trim().to_uppercase();
        if code.chars().count() != 2 {
            return None;
        }
        if let Some(region) = lookup(self.tables.region_codes, &code) {
            return Some(hit(region, MatchStage::RegionCode));
        }
        // Without an explicit country segment the code may be a province.
        if q.segments == 2 {
            if let Some(region) = lookup(self.tables.alt_region_codes, &code) {
                return Some(hit(region, MatchStage::RegionCode));
            }
        }
        None
    }

    fn region_name(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        let name = q.region?.trim().to_lowercase();
        self.tables
            .region_by_name(&name)
            .map(|region| hit(region, MatchStage::RegionName))
    }

    fn country_structured(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        let search = format!(
            "{} {} {}",
            q.country.unwrap_or(""),
            q.paren_hint.unwrap_or(""),
            q.original
        );
        self.first_country_in(&search)
            .map(|country| hit(country, MatchStage::CountryStructured))
    }

    fn fuzzy_city(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        let city = q.city.to_lowercase();
        let prefix: Option<String> = (city.chars().count() > FUZZY_PREFIX_LEN)
            .then(|| city.chars().take(FUZZY_PREFIX_LEN).collect());

        self.tables
            .cities
            .iter()
            .find(|entry| {
                let key = entry.name.to_lowercase();
                key == city || prefix.as_deref().is_some_and(|p| key.starts_with(p))
            })
            .map(|city| hit(city, MatchStage::FuzzyCity))
    }

    fn country_fallback(&self, q: &ParsedQuery<'_>) -> Option<LocationMatch> {
        self.first_country_in(q.original)
            .map(|country| hit(country, MatchStage::CountryFallback))
    }

    /// First country, in declaration order, whose name occurs anywhere in
    /// `text` (case-insensitive). Not longest-match.
    fn first_country_in(&self, text: &str) -> Option<&'static ReferenceEntry> {
        let haystack = text.to_lowercase();
        self.tables
            .countries
            .iter()
            .find(|country| haystack.contains(&country.name.to_lowercase()))
    }
}

fn hit(entry: &'static ReferenceEntry, stage: MatchStage) -> LocationMatch {
    LocationMatch {
        base: entry.coordinate(),
        stage,
        key: entry.name,
    }
}

/// True for inputs the resolver rejects before matching.
pub fn is_placeholder(s: &str) -> bool {
    is_placeholder_trimmed(s.trim())
}

fn is_placeholder_trimmed(s: &str) -> bool {
    PLACEHOLDERS.contains(&s) || !s.chars().any(char::is_alphanumeric)
}

fn parse_query(text: &str) -> Option<ParsedQuery<'_>> {
    let original = text.trim();
    if is_placeholder_trimmed(original) {
        return None;
    }

    let parts: Vec<&str> = original.split(',').map(str::trim).collect();
    let city_raw = parts[0];

    Some(ParsedQuery {
        original,
        segments: parts.len(),
        city_raw,
        city: normalize(city_raw),
        paren_hint: paren_hint(city_raw),
        region: parts.get(1).copied(),
        country: parts.get(2).copied(),
    })
}
