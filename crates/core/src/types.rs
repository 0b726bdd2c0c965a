use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Qualitative risk tier attached to every component and composite result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLabel {
    #[serde(rename = "Low Risk")]
    LowRisk,
    #[serde(rename = "Moderate Risk")]
    ModerateRisk,
    #[serde(rename = "Elevated Risk")]
    ElevatedRisk,
    #[serde(rename = "High Risk")]
    HighRisk,
    Unknown,
}

impl RiskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::LowRisk => "Low Risk",
            RiskLabel::ModerateRisk => "Moderate Risk",
            RiskLabel::ElevatedRisk => "Elevated Risk",
            RiskLabel::HighRisk => "High Risk",
            RiskLabel::Unknown => "Unknown",
        }
    }

    /// Presentation indicator (color hex) paired one-to-one with the label.
    pub fn indicator(&self) -> &'static str {
        match self {
            RiskLabel::LowRisk => "#2ECC71",
            RiskLabel::ModerateRisk => "#F1C40F",
            RiskLabel::ElevatedRisk => "#E74C3C",
            RiskLabel::HighRisk => "#C0392B",
            RiskLabel::Unknown => "#95A5A6",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Machine-readable condition codes raised by the assessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFlag {
    InsufficientData,
    PartialDataUsed,
    ZoningMissing,
    HighDensityResidential,
    NonResidentialZoning,
    RestrictiveZoning,
    UnclassifiedZoning,
    MissingLga,
    LgaNotFound,
    MissingMarketability,
    InvalidMarketabilityValue,
    ZoningEffectUncertain,
    OverlayUncertain,
    ValuationAlert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicySeverity {
    Warning,
    Critical,
}

/// Policy metadata attached to a zoning classification outcome. Carried as
/// data so the review UI can render the justification prompt without
/// re-deriving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyEntry {
    pub title: String,
    pub policy_basis: Vec<String>,
    pub severity: PolicySeverity,
    pub requires_manual_review: bool,
}

/// Provenance annotation left on a result after a manual override. The
/// system-generated score is preserved here, never deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideMeta {
    pub original_score: f64,
    pub justification: String,
    pub trigger: String,
}

/// Standardized output of every component risk assessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub risk_name: String,
    pub score: Option<f64>,
    pub label: RiskLabel,
    pub flags: BTreeSet<RiskFlag>,
    pub requires_manual_review: bool,
    pub rationale: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_meta: Option<OverrideMeta>,
}

impl RiskResult {
    pub fn new(risk_name: impl Into<String>, score: f64, label: RiskLabel) -> Self {
        Self {
            risk_name: risk_name.into(),
            score: Some(score),
            label,
            flags: BTreeSet::new(),
            requires_manual_review: false,
            rationale: String::new(),
            policy: None,
            override_meta: None,
        }
    }

    /// Data-quality degradation: no score, Unknown label, review required.
    pub fn unknown(risk_name: impl Into<String>, flag: RiskFlag) -> Self {
        let mut flags = BTreeSet::new();
        flags.insert(flag);
        Self {
            risk_name: risk_name.into(),
            score: None,
            label: RiskLabel::Unknown,
            flags,
            requires_manual_review: true,
            rationale: String::new(),
            policy: None,
            override_meta: None,
        }
    }

    pub fn with_flag(mut self, flag: RiskFlag) -> Self {
        self.flags.insert(flag);
        self
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }
}

/// Weighted composite of the component results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeResult {
    pub score: f64,
    pub label: RiskLabel,
}

/// Analyst-supplied replacement for one component's score. Only valid when
/// the justification is non-empty; validated by the reconciler before any
/// state changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverrideRecord {
    pub component: String,
    pub original_score: f64,
    pub adjusted_score: f64,
    pub justification: String,
    pub trigger: String,
}
