//! LGA socio-economic risk policy, driven by the LGA-level IRSAD decile.

use collateral_core::types::{RiskFlag, RiskLabel, RiskResult};
use collateral_refdata::{normalise_lga_name, ReferenceData};

use crate::classify::classify;
use crate::narrative::build_lga_narrative;

pub const RISK_NAME: &str = "LGA Socio-Economic";

fn decile_to_score(decile: u8) -> f64 {
    if decile >= 8 {
        90.0
    } else if decile >= 5 {
        60.0
    } else {
        30.0
    }
}

/// Assess LGA risk from a free-text LGA name. Missing input and lookup
/// misses degrade to Unknown with distinguishing flags.
pub fn assess_lga(lga_name: &str, refdata: &ReferenceData) -> RiskResult {
    let key = normalise_lga_name(lga_name);
    if key.is_empty() {
        return RiskResult::unknown(RISK_NAME, RiskFlag::MissingLga)
            .with_rationale(build_lga_narrative(None, RiskLabel::Unknown));
    }

    let Some(row) = refdata.find_lga(&key) else {
        return RiskResult::unknown(RISK_NAME, RiskFlag::LgaNotFound)
            .with_rationale(build_lga_narrative(Some(lga_name), RiskLabel::Unknown));
    };

    let score = decile_to_score(row.irsad_decile);
    let (label, _) = classify(score);
    RiskResult::new(RISK_NAME, score, label)
        .with_rationale(build_lga_narrative(Some(&row.lga_name), label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use collateral_core::types::RiskLabel;
    use collateral_refdata::tables::LgaRow;
    use std::collections::HashMap;

    fn refdata_with(lga_name: &str, decile: u8) -> ReferenceData {
        let mut lga = HashMap::new();
        lga.insert(
            normalise_lga_name(lga_name),
            LgaRow {
                lga_name: lga_name.to_string(),
                irsad_decile: decile,
            },
        );
        ReferenceData::new(HashMap::new(), HashMap::new(), lga)
    }

    #[test]
    fn empty_name_is_missing_lga() {
        let refdata = ReferenceData::default();
        let result = assess_lga("", &refdata);
        assert!(result.score.is_none());
        assert!(result.flags.contains(&RiskFlag::MissingLga));
        assert!(result.requires_manual_review);
    }

    #[test]
    fn unmatched_key_is_not_found() {
        let refdata = refdata_with("The Hills Shire", 9);
        let result = assess_lga("Far Away Shire", &refdata);
        assert!(result.score.is_none());
        assert!(result.flags.contains(&RiskFlag::LgaNotFound));
        assert!(result.requires_manual_review);
    }

    #[test]
    fn administrative_words_do_not_break_the_join() {
        let refdata = refdata_with("The Hills Shire", 9);
        let result = assess_lga("The Hills Shire Council", &refdata);
        assert_eq!(result.score, Some(90.0));
        assert_eq!(result.label, RiskLabel::LowRisk);
        assert!(!result.requires_manual_review);
    }

    #[test]
    fn decile_tiers() {
        let high = assess_lga("Alpha", &refdata_with("Alpha", 8));
        assert_eq!(high.score, Some(90.0));
        let mid = assess_lga("Beta", &refdata_with("Beta", 5));
        assert_eq!(mid.score, Some(60.0));
        assert_eq!(mid.label, RiskLabel::ModerateRisk);
        let low = assess_lga("Gamma", &refdata_with("Gamma", 4));
        assert_eq!(low.score, Some(30.0));
        assert_eq!(low.label, RiskLabel::ElevatedRisk);
    }
}
