//! Canonical risk classification.
//!
//! The scoring bands are the single threshold scheme used for both
//! component-level and composite-level classification: >= 70 low,
//! >= 50 moderate, below that elevated.

use collateral_core::types::RiskLabel;

pub const LOW_RISK_CUTOFF: f64 = 70.0;
pub const MODERATE_RISK_CUTOFF: f64 = 50.0;

/// Map a 0-100 score to its qualitative label and presentation indicator.
pub fn classify(score: f64) -> (RiskLabel, &'static str) {
    let label = if score >= LOW_RISK_CUTOFF {
        RiskLabel::LowRisk
    } else if score >= MODERATE_RISK_CUTOFF {
        RiskLabel::ModerateRisk
    } else {
        RiskLabel::ElevatedRisk
    };
    (label, label.indicator())
}

#[cfg(test)]
mod tests {
    use super::classify;
    use collateral_core::types::RiskLabel;

    #[test]
    fn boundaries_are_inclusive_at_cutoffs() {
        assert_eq!(classify(70.0).0, RiskLabel::LowRisk);
        assert_eq!(classify(69.9).0, RiskLabel::ModerateRisk);
        assert_eq!(classify(50.0).0, RiskLabel::ModerateRisk);
        assert_eq!(classify(49.9).0, RiskLabel::ElevatedRisk);
    }

    #[test]
    fn extremes_classify() {
        assert_eq!(classify(100.0).0, RiskLabel::LowRisk);
        assert_eq!(classify(0.0).0, RiskLabel::ElevatedRisk);
    }

    #[test]
    fn indicator_tracks_label() {
        let (label, indicator) = classify(83.0);
        assert_eq!(indicator, label.indicator());
    }
}
