//! Severity classification of an annual total.

use rrr_footprint_models::SeverityTier;

/// Lower bound (inclusive, tons/year) of [`SeverityTier::Moderate`].
pub const MODERATE_FROM_TONS: f64 = 50.0;
/// Lower bound (inclusive, tons/year) of [`SeverityTier::High`].
pub const HIGH_FROM_TONS: f64 = 100.0;
/// Lower bound (inclusive, tons/year) of [`SeverityTier::VeryHigh`].
pub const VERY_HIGH_FROM_TONS: f64 = 200.0;

/// Classifies an annual total in metric tons.
///
/// Each tier includes its lower bound, so exactly 50.0 tons is
/// [`SeverityTier::Moderate`].
#[must_use]
pub fn classify(total_tons_per_year: f64) -> SeverityTier {
    if total_tons_per_year >= VERY_HIGH_FROM_TONS {
        SeverityTier::VeryHigh
    } else if total_tons_per_year >= HIGH_FROM_TONS {
        SeverityTier::High
    } else if total_tons_per_year >= MODERATE_FROM_TONS {
        SeverityTier::Moderate
    } else {
        SeverityTier::Low
    }
}

/// Returns the inclusive lower bound of `tier` in tons per year.
#[must_use]
pub const fn lower_bound_tons(tier: SeverityTier) -> f64 {
    match tier {
        SeverityTier::Low => 0.0,
        SeverityTier::Moderate => MODERATE_FROM_TONS,
        SeverityTier::High => HIGH_FROM_TONS,
        SeverityTier::VeryHigh => VERY_HIGH_FROM_TONS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_lower_inclusive() {
        assert_eq!(classify(0.0), SeverityTier::Low);
        assert_eq!(classify(49.999_999), SeverityTier::Low);
        assert_eq!(classify(50.0), SeverityTier::Moderate);
        assert_eq!(classify(99.999_999), SeverityTier::Moderate);
        assert_eq!(classify(100.0), SeverityTier::High);
        assert_eq!(classify(199.999_999), SeverityTier::High);
        assert_eq!(classify(200.0), SeverityTier::VeryHigh);
        assert_eq!(classify(10_000.0), SeverityTier::VeryHigh);
    }

    #[test]
    fn lower_bounds_classify_to_their_own_tier() {
        for tier in [
            SeverityTier::Low,
            SeverityTier::Moderate,
            SeverityTier::High,
            SeverityTier::VeryHigh,
        ] {
            assert_eq!(classify(lower_bound_tons(tier)), tier);
        }
    }
}
