//! Jitter injector.
//!
//! Spreads records that share a centroid so they do not collapse onto a
//! single map point. The offset is cosmetic, not a precision estimate.

use rand::Rng;

use super::types::{Coordinate, LocationMatch, PrecisionTier, ResolvedCoordinate};

impl PrecisionTier {
    /// Half-width of the uniform offset applied on each axis, in degrees.
    pub fn half_width(self) -> f64 {
        match self {
            Self::City => 0.02,
            Self::Region => 0.5,
            Self::Country => 1.0,
        }
    }
}

/// Offset `base` by an independent uniform draw in `[-h, h]` per axis.
pub fn jitter<R: Rng>(base: Coordinate, tier: PrecisionTier, rng: &mut R) -> Coordinate {
    let h = tier.half_width();
    Coordinate {
        lat: base.lat + rng.gen_range(-h..=h),
        lon: base.lon + rng.gen_range(-h..=h),
    }
}

impl LocationMatch {
    /// Apply tier-scaled jitter to this match's centroid.
    pub fn jittered<R: Rng>(&self, rng: &mut R) -> ResolvedCoordinate {
        let tier = self.tier();
        let p = jitter(self.base, tier, rng);
        ResolvedCoordinate {
            lat: p.lat,
            lon: p.lon,
            tier,
            stage: self.stage,
            key: self.key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::types::MatchStage;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_half_width_monotonic() {
        assert!(PrecisionTier::City.half_width() < PrecisionTier::Region.half_width());
        assert!(PrecisionTier::Region.half_width() < PrecisionTier::Country.half_width());
    }

    #[test]
    fn test_jitter_bounded_per_tier() {
        let mut rng = StdRng::seed_from_u64(626);
        let base = Coordinate::new(51.1657, 10.4515);
        for tier in [PrecisionTier::City, PrecisionTier::Region, PrecisionTier::Country] {
            let h = tier.half_width();
            for _ in 0..500 {
                let p = jitter(base, tier, &mut rng);
                assert!((p.lat - base.lat).abs() <= h + 1e-12);
                assert!((p.lon - base.lon).abs() <= h + 1e-12);
            }
        }
    }

    #[test]
    fn test_jitter_axes_independent() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = Coordinate::new(0.0, 0.0);
        let moved = (0..50).any(|_| {
            let p = jitter(base, PrecisionTier::Country, &mut rng);
            (p.lat - p.lon).abs() > 1e-6
        });
        assert!(moved);
    }

    #[test]
    fn test_jitter_seeded_reproducible() {
        let base = Coordinate::new(40.7128, -74.0060);
        let a = jitter(base, PrecisionTier::City, &mut StdRng::seed_from_u64(9));
        let b = jitter(base, PrecisionTier::City, &mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_jittered_keeps_match_tags() {
        let m = LocationMatch {
            base: Coordinate::new(31.9686, -99.9018),
            stage: MatchStage::RegionCode,
            key: "TX",
        };
        let r = m.jittered(&mut StdRng::seed_from_u64(3));
        assert_eq!(r.tier, PrecisionTier::Region);
        assert_eq!(r.stage, MatchStage::RegionCode);
        assert_eq!(r.key, "TX");
        assert!((r.lat - m.base.lat).abs() <= 0.5);
        assert!((r.lon - m.base.lon).abs() <= 0.5);
    }
}
