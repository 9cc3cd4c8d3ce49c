//! Sufficiency classification of delivered calories.

use crate::models::{round3, Sufficiency, SufficiencyVerdict};
use crate::planner::constants::{INSUFFICIENT_BELOW, MODERATE_BELOW};

/// Classify delivered calories against the original, un-rationed target
/// for the full planning window.
///
/// The denominator must be the pre-rationing target so the verdict
/// reflects real nutritional shortfall, not the already-reduced goal.
pub fn classify_intake(delivered_kcal: f64, original_target_kcal: f64) -> SufficiencyVerdict {
    let intake_ratio = if original_target_kcal > 0.0 {
        delivered_kcal / original_target_kcal
    } else {
        0.0
    };

    let status = if intake_ratio < INSUFFICIENT_BELOW {
        Sufficiency::Insufficient
    } else if intake_ratio < MODERATE_BELOW {
        Sufficiency::Moderate
    } else {
        Sufficiency::Sufficient
    };

    SufficiencyVerdict {
        status,
        intake_ratio: round3(intake_ratio),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds() {
        assert_eq!(
            classify_intake(840.0, 1000.0).status,
            Sufficiency::Insufficient
        );
        assert_eq!(classify_intake(850.0, 1000.0).status, Sufficiency::Moderate);
        assert_eq!(classify_intake(949.0, 1000.0).status, Sufficiency::Moderate);
        assert_eq!(
            classify_intake(950.0, 1000.0).status,
            Sufficiency::Sufficient
        );
        assert_eq!(
            classify_intake(1200.0, 1000.0).status,
            Sufficiency::Sufficient
        );
    }

    #[test]
    fn test_zero_target_is_insufficient() {
        let verdict = classify_intake(500.0, 0.0);
        assert_eq!(verdict.intake_ratio, 0.0);
        assert_eq!(verdict.status, Sufficiency::Insufficient);
    }

    #[test]
    fn test_ratio_rounded_to_three_places() {
        let verdict = classify_intake(1.0, 3.0);
        assert_eq!(verdict.intake_ratio, 0.333);
    }
}
