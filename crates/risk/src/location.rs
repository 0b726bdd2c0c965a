//! Location risk policy: suburb crime percentile plus the two SEIFA
//! decile indices, blended with fixed weights.

use collateral_core::types::{RiskFlag, RiskLabel, RiskResult};

use crate::classify::classify;
use crate::composite::round1;
use crate::narrative::build_location_narrative;

pub const RISK_NAME: &str = "Location";

const CRIME_WEIGHT: f64 = 0.4;
const IRSD_WEIGHT: f64 = 0.3;
const IRSAD_WEIGHT: f64 = 0.3;

// Decile 1 (most disadvantaged) to 10, mapped linearly onto 10-100.
const DECILE_SCORES: [f64; 10] = [
    10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0,
];

/// Fixed percentile bands; a higher percentile means a safer suburb.
pub fn crime_score_from_percentile(percentile: f64) -> f64 {
    if percentile >= 90.0 {
        100.0
    } else if percentile >= 75.0 {
        80.0
    } else if percentile >= 50.0 {
        60.0
    } else if percentile >= 25.0 {
        40.0
    } else {
        20.0
    }
}

/// Table lookup for a 1-10 SEIFA decile. Out-of-range deciles are treated
/// as absent data rather than clamped.
pub fn decile_score(decile: u8) -> Option<f64> {
    if (1..=10).contains(&decile) {
        Some(DECILE_SCORES[decile as usize - 1])
    } else {
        None
    }
}

/// Assess suburb-level location risk from the three indicators. Any absent
/// indicator drops out of the blend with its weight redistributed
/// proportionally over the remaining ones; all-absent degrades to Unknown.
pub fn assess_location(
    crime_percentile: Option<f64>,
    irsd_decile: Option<u8>,
    irsad_decile: Option<u8>,
) -> RiskResult {
    let crime_score = crime_percentile.map(crime_score_from_percentile);
    let irsd_score = irsd_decile.and_then(decile_score);
    let irsad_score = irsad_decile.and_then(decile_score);

    let contributions = [
        (crime_score, CRIME_WEIGHT),
        (irsd_score, IRSD_WEIGHT),
        (irsad_score, IRSAD_WEIGHT),
    ];

    let mut total_score = 0.0;
    let mut total_weight = 0.0;
    let mut missing_any = false;
    for (sub_score, weight) in contributions {
        match sub_score {
            Some(value) => {
                total_score += value * weight;
                total_weight += weight;
            }
            None => missing_any = true,
        }
    }

    if total_weight == 0.0 {
        return RiskResult::unknown(RISK_NAME, RiskFlag::InsufficientData).with_rationale(
            build_location_narrative(None, None, None, RiskLabel::Unknown),
        );
    }

    let score = round1(total_score / total_weight);
    let (label, _) = classify(score);

    let mut result = RiskResult::new(RISK_NAME, score, label).with_rationale(
        build_location_narrative(crime_percentile, irsd_decile, irsad_decile, label),
    );
    if missing_any {
        result = result.with_flag(RiskFlag::PartialDataUsed);
        result.requires_manual_review = true;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use collateral_core::types::{RiskFlag, RiskLabel};

    #[test]
    fn crime_bands_are_exact() {
        assert_eq!(crime_score_from_percentile(92.0), 100.0);
        assert_eq!(crime_score_from_percentile(90.0), 100.0);
        assert_eq!(crime_score_from_percentile(75.0), 80.0);
        assert_eq!(crime_score_from_percentile(50.0), 60.0);
        assert_eq!(crime_score_from_percentile(25.0), 40.0);
        assert_eq!(crime_score_from_percentile(24.9), 20.0);
    }

    #[test]
    fn decile_maps_linearly() {
        assert_eq!(decile_score(1), Some(10.0));
        assert_eq!(decile_score(10), Some(100.0));
        assert_eq!(decile_score(0), None);
        assert_eq!(decile_score(11), None);
    }

    #[test]
    fn full_inputs_blend_with_fixed_weights() {
        // 0.4 * 100 + 0.3 * 90 + 0.3 * 90 = 94.0
        let result = assess_location(Some(92.0), Some(9), Some(9));
        assert_eq!(result.score, Some(94.0));
        assert_eq!(result.label, RiskLabel::LowRisk);
        assert!(result.flags.is_empty());
        assert!(!result.requires_manual_review);
    }

    #[test]
    fn missing_crime_weight_is_renormalised() {
        // 0.3/0.3 renormalised to 0.5/0.5, not weighted against a phantom
        // 0.4 crime share.
        let result = assess_location(None, Some(8), Some(8));
        assert_eq!(result.score, Some(80.0));
        assert!(result.flags.contains(&RiskFlag::PartialDataUsed));
        assert!(result.requires_manual_review);
    }

    #[test]
    fn all_absent_degrades_to_unknown() {
        let result = assess_location(None, None, None);
        assert!(result.score.is_none());
        assert_eq!(result.label, RiskLabel::Unknown);
        assert!(result.flags.contains(&RiskFlag::InsufficientData));
        assert!(result.requires_manual_review);
    }

    #[test]
    fn assessment_is_idempotent() {
        let a = assess_location(Some(61.0), Some(4), None);
        let b = assess_location(Some(61.0), Some(4), None);
        assert_eq!(a, b);
    }
}
