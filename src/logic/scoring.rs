/// Maximum penalty applied at the edges of the optimal band.
const IN_RANGE_MAX_PENALTY: f64 = 25.0;

/// Calculate a 0-100 suitability score for `value` against the optimal band `[min, max]`.
///
/// Inside the band the score peaks at 100 on the midpoint and falls linearly to 75 at
/// either edge. Outside the band it falls from 100 in proportion to the distance past the
/// violated bound, relative to that bound, and bottoms out at 0. A non-positive bound
/// cannot serve as that reference, so any value past it scores 0.
pub fn condition_score(value: f64, min: f64, max: f64) -> f64 {
    if value < min {
        if min <= 0.0 {
            return 0.0;
        }
        (100.0 - ((min - value) / min) * 100.0).max(0.0)
    } else if value > max {
        if max <= 0.0 {
            return 0.0;
        }
        (100.0 - ((value - max) / max) * 100.0).max(0.0)
    } else {
        let middle = (min + max) / 2.0;
        let half_range = (max - min) / 2.0;
        if half_range <= 0.0 {
            return 100.0;
        }
        100.0 - ((value - middle).abs() / half_range) * IN_RANGE_MAX_PENALTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn midpoint_scores_100() {
        assert!((condition_score(27.5, 20.0, 35.0) - 100.0).abs() < EPS);
        assert!((condition_score(6.5, 6.0, 7.0) - 100.0).abs() < EPS);
        assert!((condition_score(75.0, 60.0, 90.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn range_edges_score_75() {
        assert!((condition_score(20.0, 20.0, 35.0) - 75.0).abs() < EPS);
        assert!((condition_score(35.0, 20.0, 35.0) - 75.0).abs() < EPS);
    }

    #[test]
    fn band_edges_step_to_outside_scores() {
        let (min, max) = (12.0, 24.0);

        // The in-band penalty tops out at 25 while the out-of-band penalty starts from
        // zero, so crossing a bound moves the score from 75 to just under 100.
        assert!((condition_score(min, min, max) - 75.0).abs() < EPS);
        assert!((condition_score(max, min, max) - 75.0).abs() < EPS);
        assert!(condition_score(min - 1e-6, min, max) > 99.99);
        assert!(condition_score(max + 1e-6, min, max) > 99.99);

        // Each side is continuous on its own.
        let inside = condition_score(min + 1e-6, min, max);
        assert!((inside - 75.0).abs() < 1e-3);
        let outside = condition_score(max + 1e-3, min, max);
        let farther = condition_score(max + 2e-3, min, max);
        assert!((outside - farther).abs() < 1e-2);
    }

    #[test]
    fn non_positive_values_floor_at_zero() {
        assert_eq!(condition_score(0.0, 15.0, 30.0), 0.0);
        assert_eq!(condition_score(-10.0, 15.0, 30.0), 0.0);
        assert_eq!(condition_score(-3.0, 5.5, 7.5), 0.0);
    }

    #[test]
    fn below_min_degrades_linearly() {
        // Half of min below the bound loses half the score
        assert!((condition_score(10.0, 20.0, 35.0) - 50.0).abs() < EPS);
        assert!((condition_score(15.0, 20.0, 35.0) - 75.0).abs() < EPS);
    }

    #[test]
    fn above_max_degrades_linearly() {
        // wheat temp 35 vs max 24: 100 - 11/24*100
        let expected = 100.0 - (11.0 / 24.0) * 100.0;
        assert!((condition_score(35.0, 12.0, 24.0) - expected).abs() < EPS);
        // Twice the max or more is 0
        assert_eq!(condition_score(48.0, 12.0, 24.0), 0.0);
        assert_eq!(condition_score(100.0, 12.0, 24.0), 0.0);
    }

    #[test]
    fn zero_or_negative_bounds_score_zero_outside_band() {
        assert_eq!(condition_score(-1.0, 0.0, 10.0), 0.0);
        assert_eq!(condition_score(-20.0, -10.0, 5.0), 0.0);
        assert_eq!(condition_score(1.0, -10.0, 0.0), 0.0);
        assert!((condition_score(-2.5, -10.0, 5.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn scores_stay_in_bounds() {
        for value in [-50.0, -1.0, 0.0, 3.0, 12.0, 18.0, 24.0, 30.0, 60.0, 1000.0] {
            let score = condition_score(value, 12.0, 24.0);
            assert!((0.0..=100.0).contains(&score), "{} -> {}", value, score);
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(condition_score(f64::NAN, 12.0, 24.0).is_nan());
    }
}
