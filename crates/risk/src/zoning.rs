//! Zoning risk policy: fixed scoring tables for residential and
//! non-residential planning codes, plus the policy registry that drives
//! manual-review prompts downstream.

use collateral_core::types::{PolicyEntry, PolicySeverity, RiskFlag, RiskLabel, RiskResult};

use crate::classify::classify;
use crate::narrative::build_zoning_narrative;

pub const RISK_NAME: &str = "Zoning";

/// Neutral score recorded when no zoning code was supplied at all.
const MISSING_ZONING_SCORE: f64 = 50.0;
const UNCLASSIFIED_ZONING_SCORE: f64 = 20.0;
const RESTRICTIVE_SCORE_CUTOFF: f64 = 20.0;

const RESIDENTIAL_ZONING: [(&str, f64); 5] = [
    ("R1", 65.0),
    ("R2", 80.0),
    ("R3", 55.0),
    ("R4", 30.0),
    ("R5", 50.0),
];

// Rural, business, industrial, special-purpose, recreation, environmental
// and waterway codes. Higher score = better collateral liquidity.
const NON_RESIDENTIAL_ZONING: [(&str, f64); 30] = [
    ("RU1", 10.0),
    ("RU2", 15.0),
    ("RU3", 5.0),
    ("RU4", 20.0),
    ("RU5", 60.0),
    ("RU6", 25.0),
    ("B1", 40.0),
    ("B2", 35.0),
    ("B3", 15.0),
    ("B4", 30.0),
    ("B5", 10.0),
    ("B6", 10.0),
    ("B7", 5.0),
    ("B8", 20.0),
    ("IN1", 5.0),
    ("IN2", 10.0),
    ("IN3", 0.0),
    ("IN4", 0.0),
    ("SP1", 5.0),
    ("SP2", 0.0),
    ("SP3", 20.0),
    ("RE1", 5.0),
    ("RE2", 15.0),
    ("E1", 0.0),
    ("E2", 5.0),
    ("E3", 15.0),
    ("E4", 45.0),
    ("W1", 0.0),
    ("W2", 5.0),
    ("W3", 0.0),
];

/// Policy registry key: the outcome of zoning classification, not the raw
/// code, so new policies can be added without touching the assessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoningPolicyKey {
    HighDensityResidential,
    NonResidential,
    Unclassified,
}

pub fn zoning_policy(key: ZoningPolicyKey) -> PolicyEntry {
    match key {
        ZoningPolicyKey::HighDensityResidential => PolicyEntry {
            title: "High Density Residential Policy Notice".to_string(),
            policy_basis: vec![
                "High-density apartments may be subject to additional credit \
                 restrictions, including minimum dwelling size and external \
                 sales evidence requirements."
                    .to_string(),
                "Market liquidity constraints for high-density stock require \
                 enhanced serviceability assessment."
                    .to_string(),
                "Certain applications may require senior credit approval.".to_string(),
            ],
            severity: PolicySeverity::Warning,
            requires_manual_review: true,
        },
        ZoningPolicyKey::NonResidential => PolicyEntry {
            title: "Non-Residential Zoning Review".to_string(),
            policy_basis: vec![
                "The property is zoned outside the standard residential \
                 categories accepted under retail lending policy."
                    .to_string(),
                "Collateral liquidity and permissible use must be confirmed \
                 before the security can be relied upon."
                    .to_string(),
            ],
            severity: PolicySeverity::Warning,
            requires_manual_review: true,
        },
        ZoningPolicyKey::Unclassified => PolicyEntry {
            title: "Unclassified Zoning Code".to_string(),
            policy_basis: vec![
                "The supplied zoning code is not present in the residential or \
                 non-residential scoring tables."
                    .to_string(),
                "No detailed policy rule was supplied by the upstream \
                 assessment; professional judgement is required to determine \
                 risk acceptability."
                    .to_string(),
            ],
            severity: PolicySeverity::Critical,
            requires_manual_review: true,
        },
    }
}

fn table_lookup(table: &[(&str, f64)], code: &str) -> Option<f64> {
    table
        .iter()
        .find(|(entry, _)| *entry == code)
        .map(|(_, score)| *score)
}

/// Assess zoning risk from a planning code (standard code or a custom
/// 3-character "Other" entry).
pub fn assess_zoning(zoning_code: &str) -> RiskResult {
    let code = zoning_code.trim().to_uppercase();

    if code.is_empty() {
        let mut result = RiskResult::new(RISK_NAME, MISSING_ZONING_SCORE, RiskLabel::Unknown)
            .with_flag(RiskFlag::ZoningMissing)
            .with_rationale(build_zoning_narrative(None, RiskLabel::Unknown));
        result.requires_manual_review = true;
        return result;
    }

    if let Some(score) = table_lookup(&RESIDENTIAL_ZONING, &code) {
        let (label, _) = classify(score);
        let mut result = RiskResult::new(RISK_NAME, score, label)
            .with_rationale(build_zoning_narrative(Some(&code), label));
        if code == "R4" {
            let policy = zoning_policy(ZoningPolicyKey::HighDensityResidential);
            result = result.with_flag(RiskFlag::HighDensityResidential);
            result.requires_manual_review = policy.requires_manual_review;
            result.policy = Some(policy);
        }
        return result;
    }

    if let Some(score) = table_lookup(&NON_RESIDENTIAL_ZONING, &code) {
        let (label, _) = classify(score);
        let policy = zoning_policy(ZoningPolicyKey::NonResidential);
        let mut result = RiskResult::new(RISK_NAME, score, label)
            .with_flag(RiskFlag::NonResidentialZoning)
            .with_rationale(build_zoning_narrative(Some(&code), label));
        if score <= RESTRICTIVE_SCORE_CUTOFF {
            result = result.with_flag(RiskFlag::RestrictiveZoning);
        }
        result.requires_manual_review = policy.requires_manual_review;
        result.policy = Some(policy);
        return result;
    }

    let (label, _) = classify(UNCLASSIFIED_ZONING_SCORE);
    let policy = zoning_policy(ZoningPolicyKey::Unclassified);
    let mut result = RiskResult::new(RISK_NAME, UNCLASSIFIED_ZONING_SCORE, label)
        .with_flag(RiskFlag::UnclassifiedZoning)
        .with_rationale(build_zoning_narrative(Some(&code), label));
    result.requires_manual_review = policy.requires_manual_review;
    result.policy = Some(policy);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use collateral_core::types::{PolicySeverity, RiskFlag, RiskLabel};

    #[test]
    fn r4_carries_high_density_policy() {
        let result = assess_zoning("R4");
        assert_eq!(result.score, Some(30.0));
        assert_eq!(result.label, RiskLabel::ElevatedRisk);
        assert!(result.flags.contains(&RiskFlag::HighDensityResidential));
        assert!(result.requires_manual_review);
        let policy = result.policy.expect("policy entry");
        assert_eq!(policy.severity, PolicySeverity::Warning);
        assert!(!policy.policy_basis.is_empty());
    }

    #[test]
    fn other_residential_codes_carry_no_policy() {
        let result = assess_zoning("r2");
        assert_eq!(result.score, Some(80.0));
        assert_eq!(result.label, RiskLabel::LowRisk);
        assert!(result.flags.is_empty());
        assert!(!result.requires_manual_review);
        assert!(result.policy.is_none());
    }

    #[test]
    fn non_residential_requires_review() {
        let result = assess_zoning("B1");
        assert_eq!(result.score, Some(40.0));
        assert!(result.flags.contains(&RiskFlag::NonResidentialZoning));
        assert!(!result.flags.contains(&RiskFlag::RestrictiveZoning));
        assert!(result.requires_manual_review);
    }

    #[test]
    fn restrictive_flag_at_low_scores() {
        let result = assess_zoning("IN3");
        assert_eq!(result.score, Some(0.0));
        assert!(result.flags.contains(&RiskFlag::RestrictiveZoning));
        assert_eq!(result.label, RiskLabel::ElevatedRisk);
    }

    #[test]
    fn unrecognized_code_is_unclassified() {
        let result = assess_zoning("ZZ9");
        assert_eq!(result.score, Some(20.0));
        assert_eq!(result.label, RiskLabel::ElevatedRisk);
        assert!(result.flags.contains(&RiskFlag::UnclassifiedZoning));
        assert!(result.requires_manual_review);
        assert_eq!(
            result.policy.unwrap().severity,
            PolicySeverity::Critical
        );
    }

    #[test]
    fn empty_code_is_neutral_unknown() {
        let result = assess_zoning("   ");
        assert_eq!(result.score, Some(50.0));
        assert_eq!(result.label, RiskLabel::Unknown);
        assert!(result.flags.contains(&RiskFlag::ZoningMissing));
        assert!(result.requires_manual_review);
    }
}
