//! Marketability risk policy: direct benchmark-table lookup on the
//! valuer-supplied marketability level.

use collateral_core::types::{RiskFlag, RiskLabel, RiskResult};

use crate::narrative::build_marketability_narrative;

pub const RISK_NAME: &str = "Marketability";

// Benchmark table: level -> (score, label). Labels come from the table
// itself, not the classifier, so POOR stays High Risk.
const BENCHMARKS: [(&str, f64, RiskLabel); 5] = [
    ("VERY GOOD", 90.0, RiskLabel::LowRisk),
    ("GOOD", 80.0, RiskLabel::LowRisk),
    ("AVERAGE", 60.0, RiskLabel::ModerateRisk),
    ("FAIR", 40.0, RiskLabel::ElevatedRisk),
    ("POOR", 20.0, RiskLabel::HighRisk),
];

/// Assess marketability from the enumerated level (case-insensitive;
/// underscores from form values are accepted as spaces).
pub fn assess_marketability(level: &str) -> RiskResult {
    let normalized = level.trim().to_uppercase().replace('_', " ");

    if normalized.is_empty() {
        return RiskResult::unknown(RISK_NAME, RiskFlag::MissingMarketability)
            .with_rationale(build_marketability_narrative(None, RiskLabel::Unknown));
    }

    match BENCHMARKS
        .iter()
        .find(|(entry, _, _)| *entry == normalized)
    {
        Some((entry, score, label)) => RiskResult::new(RISK_NAME, *score, *label)
            .with_rationale(build_marketability_narrative(Some(*entry), *label)),
        None => RiskResult::unknown(RISK_NAME, RiskFlag::InvalidMarketabilityValue)
            .with_rationale(build_marketability_narrative(Some(&normalized), RiskLabel::Unknown)),
    }
}
