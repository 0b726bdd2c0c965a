//! Land-risk wording assessors: planning and legal constraints extracted
//! from valuation-report wording.
//!
//! Matching is risk-first: the most severe level is checked before the
//! milder ones, so cautious wording wins over reassuring wording in the
//! same sentence.

use collateral_core::types::{RiskFlag, RiskResult};

use crate::classify::classify;

pub const ZONING_EFFECT_RISK_NAME: &str = "Zoning Effect";
pub const OVERLAYS_RISK_NAME: &str = "Overlays";
pub const VALUATION_ALERTS_RISK_NAME: &str = "Valuation Risk Alerts";

const NEUTRAL_SCORE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordingLevel {
    Low,
    Medium,
    MediumHigh,
    High,
    VeryHigh,
    Unknown,
}

impl WordingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WordingLevel::Low => "low",
            WordingLevel::Medium => "medium",
            WordingLevel::MediumHigh => "medium_high",
            WordingLevel::High => "high",
            WordingLevel::VeryHigh => "very_high",
            WordingLevel::Unknown => "unknown",
        }
    }
}

const ZONING_EFFECT_KEYWORDS: [(WordingLevel, &[&str]); 5] = [
    (
        WordingLevel::VeryHigh,
        &[
            "use is not permitted",
            "use prohibited",
            "not permitted",
            "zoning prohibits",
            "does not comply with zoning",
            "does not comply",
        ],
    ),
    (
        WordingLevel::High,
        &[
            "non-conforming",
            "non conforming",
            "existing use rights",
            "legal non-conformity",
            "zoning may restrict development",
            "significantly limits development",
            "adversely affect use",
        ],
    ),
    (
        WordingLevel::MediumHigh,
        &[
            "development potential may be limited",
            "development may be constrained",
            "planning controls restrict development",
        ],
    ),
    (
        WordingLevel::Medium,
        &[
            "permitted subject to approval",
            "subject to approval",
            "subject to council consent",
            "subject to development approval",
            "subject to planning consent",
            "zoning allows existing use only",
            "existing use only",
            "redevelopment discouraged",
        ],
    ),
    (
        WordingLevel::Low,
        &[
            "permits single residential property",
            "residential use is permitted",
            "zoned for residential",
            "zoned for residential purposes",
            "use is permissible",
            "existing use is permitted",
            "consistent with zoning",
            "appropriate zoning",
        ],
    ),
];

const OVERLAY_KEYWORDS: [(WordingLevel, &[&str]); 4] = [
    (
        WordingLevel::VeryHigh,
        &[
            "unknown",
            "no formal searches undertaken",
            "overlay status not confirmed",
            "has not been investigated",
            "no planning certificate obtained",
            "further investigation required",
        ],
    ),
    (
        WordingLevel::High,
        &[
            "heritage overlay applies",
            "heritage listed",
            "environmental protection overlay applies",
            "environmental overlay affects the site",
            "overlays may materially restrict development",
            "significant planning limitation",
            "additional approvals required due to overlays",
        ],
    ),
    (
        WordingLevel::Medium,
        &[
            "flood overlay applies",
            "flood-prone land",
            "subject to flood controls",
            "bushfire overlay applies",
            "bushfire prone land",
            "bal requirements apply",
            "overlays apply but are not considered onerous",
            "overlay requirements are manageable",
            "overlays are common to the locality",
        ],
    ),
    (
        WordingLevel::Low,
        &[
            "no overlays affect the subject property",
            "no known planning overlays apply",
            "no adverse overlays identified",
            "no material overlays impacting use or development",
        ],
    ),
];

fn zoning_effect_score(level: WordingLevel) -> f64 {
    match level {
        WordingLevel::Low => 100.0,
        WordingLevel::Medium => 70.0,
        WordingLevel::MediumHigh => 50.0,
        WordingLevel::High => 40.0,
        WordingLevel::VeryHigh => 20.0,
        WordingLevel::Unknown => NEUTRAL_SCORE,
    }
}

fn overlay_score(level: WordingLevel) -> f64 {
    match level {
        WordingLevel::Low => 100.0,
        WordingLevel::Medium => 70.0,
        WordingLevel::High => 40.0,
        WordingLevel::VeryHigh => 20.0,
        // MediumHigh is not an overlay level; neutral if it ever appears.
        WordingLevel::MediumHigh | WordingLevel::Unknown => NEUTRAL_SCORE,
    }
}

fn classify_wording(
    text: &str,
    keywords: &[(WordingLevel, &[&str])],
) -> WordingLevel {
    let lowered = text.trim().to_lowercase();
    if lowered.is_empty() {
        return WordingLevel::Unknown;
    }
    for (level, phrases) in keywords {
        for phrase in *phrases {
            if lowered.contains(phrase) {
                return *level;
            }
        }
    }
    WordingLevel::Unknown
}

pub fn classify_zoning_effect(zoning_text: &str) -> WordingLevel {
    classify_wording(zoning_text, &ZONING_EFFECT_KEYWORDS)
}

pub fn classify_overlay_effect(overlay_text: &str) -> WordingLevel {
    classify_wording(overlay_text, &OVERLAY_KEYWORDS)
}

/// Score the zoning wording of a valuation report.
pub fn assess_zoning_effect(zoning_text: &str) -> RiskResult {
    let level = classify_zoning_effect(zoning_text);
    let score = zoning_effect_score(level);
    let (label, _) = classify(score);
    let mut result = RiskResult::new(ZONING_EFFECT_RISK_NAME, score, label).with_rationale(
        format!("Zoning effect wording classified as {}", level.as_str()),
    );
    if level == WordingLevel::Unknown {
        result = result.with_flag(RiskFlag::ZoningEffectUncertain);
        result.requires_manual_review = true;
    }
    result
}

/// Score the overlay disclosures of a valuation report.
pub fn assess_overlays(overlay_text: &str) -> RiskResult {
    let level = classify_overlay_effect(overlay_text);
    let score = overlay_score(level);
    let (label, _) = classify(score);
    let mut result = RiskResult::new(OVERLAYS_RISK_NAME, score, label).with_rationale(format!(
        "Overlay wording classified as {}",
        level.as_str()
    ));
    if level == WordingLevel::Unknown {
        result = result.with_flag(RiskFlag::OverlayUncertain);
        result.requires_manual_review = true;
    } else if level == WordingLevel::VeryHigh {
        result.requires_manual_review = true;
    }
    result
}

/// Score a valuer-flagged risk alert ("Yes" / "No").
pub fn assess_valuation_alert(response: &str) -> RiskResult {
    let normalized = response.trim().to_lowercase();
    match normalized.as_str() {
        "no" => {
            let (label, _) = classify(100.0);
            RiskResult::new(VALUATION_ALERTS_RISK_NAME, 100.0, label)
                .with_rationale("No valuation risk alerts raised".to_string())
        }
        "yes" => {
            let (label, _) = classify(20.0);
            let mut result = RiskResult::new(VALUATION_ALERTS_RISK_NAME, 20.0, label)
                .with_flag(RiskFlag::ValuationAlert)
                .with_rationale("Valuer flagged a critical risk alert".to_string());
            result.requires_manual_review = true;
            result
        }
        _ => {
            let (label, _) = classify(NEUTRAL_SCORE);
            let mut result = RiskResult::new(VALUATION_ALERTS_RISK_NAME, NEUTRAL_SCORE, label)
                .with_rationale("Valuation risk alert response not recognised".to_string());
            result.requires_manual_review = true;
            result
        }
    }
}
