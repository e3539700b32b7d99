//! Relative-Tolerance Frequency Comparison

/// Default relative tolerance: 5% of the predicted frequency
pub const DEFAULT_TOLERANCE: f64 = 0.05;

/// Near-equality test between a measured and a predicted frequency.
///
/// True iff `predicted != 0` and `|measured − predicted| / predicted`
/// is below `tolerance`. The denominator is the *predicted* value, signed;
/// a zero prediction never matches anything. Both are deliberate: the
/// acceptance window scales with the predicted magnitude, and swapping
/// operands would change behavior near the tolerance edge.
pub fn is_close(measured: f64, predicted: f64, tolerance: f64) -> bool {
    predicted != 0.0 && (measured - predicted).abs() / predicted < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn just_inside_tolerance() {
        // relative error 0.04
        assert!(is_close(52.0, 50.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn just_outside_tolerance() {
        // relative error 0.06
        assert!(!is_close(53.0, 50.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn zero_prediction_never_matches() {
        assert!(!is_close(50.0, 0.0, DEFAULT_TOLERANCE));
        assert!(!is_close(0.0, 0.0, DEFAULT_TOLERANCE));
    }

    #[test]
    fn tolerance_is_relative_to_the_predicted_value() {
        // 60 Hz off a 1500 Hz prediction is 4%, inside; the same 60 Hz
        // off a 500 Hz prediction is 12%, outside.
        assert!(is_close(1560.0, 1500.0, DEFAULT_TOLERANCE));
        assert!(!is_close(560.0, 500.0, DEFAULT_TOLERANCE));
    }

    proptest! {
        #[test]
        fn exact_prediction_always_matches(p in 1.0f64..10_000.0) {
            prop_assert!(is_close(p, p, DEFAULT_TOLERANCE));
        }

        #[test]
        fn zero_predicted_matches_nothing(m in -10_000.0f64..10_000.0) {
            prop_assert!(!is_close(m, 0.0, DEFAULT_TOLERANCE));
        }
    }
}
