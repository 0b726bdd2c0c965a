//! Per-interaction session: one base assessment plus the active manual
//! overrides.
//!
//! The base assessment is immutable; the overridden view is rebuilt from it
//! on every change, and `apply_override` validates before any state is
//! touched so a rejected override can never leave a half-applied session.

use std::collections::BTreeMap;

use collateral_core::error::{Error, Result};
use collateral_core::types::{CompositeResult, OverrideRecord};

use crate::engine::Assessment;
use crate::reconcile::{apply_override, validate_override};

pub struct AssessmentSession {
    base: Assessment,
    overrides: BTreeMap<String, OverrideRecord>,
    current: Assessment,
}

impl AssessmentSession {
    pub fn new(assessment: Assessment) -> Self {
        Self {
            current: assessment.clone(),
            base: assessment,
            overrides: BTreeMap::new(),
        }
    }

    /// The system-generated assessment, untouched by overrides.
    pub fn base(&self) -> &Assessment {
        &self.base
    }

    /// The assessment as currently presented, overrides applied.
    pub fn current(&self) -> &Assessment {
        &self.current
    }

    pub fn overrides(&self) -> impl Iterator<Item = &OverrideRecord> {
        self.overrides.values()
    }

    /// Apply (or supersede) an override for one component. Read, validate,
    /// write as a single step; on rejection the session is unchanged.
    pub fn apply_override(&mut self, record: OverrideRecord) -> Result<&CompositeResult> {
        validate_override(&record)?;
        if !self.base.components.contains_key(&record.component) {
            return Err(Error::UnknownComponent(record.component));
        }

        let mut staged = self.overrides.clone();
        staged.insert(record.component.clone(), record);
        let rebuilt = self.rebuild(&staged)?;

        self.overrides = staged;
        self.current = rebuilt;
        Ok(&self.current.composite)
    }

    /// Discard one component's override; the composite reverts to the
    /// weighted base result once no overrides remain.
    pub fn discard_override(&mut self, component: &str) -> Result<&CompositeResult> {
        let mut staged = self.overrides.clone();
        staged.remove(component);
        let rebuilt = self.rebuild(&staged)?;
        self.overrides = staged;
        self.current = rebuilt;
        Ok(&self.current.composite)
    }

    fn rebuild(&self, overrides: &BTreeMap<String, OverrideRecord>) -> Result<Assessment> {
        if overrides.is_empty() {
            return Ok(self.base.clone());
        }
        let mut components = self.base.components.clone();
        let mut composite = self.base.composite.clone();
        for record in overrides.values() {
            composite = apply_override(&mut components, record)?;
        }
        Ok(Assessment {
            summary: self.base.summary.clone(),
            components,
            composite,
            lookup_misses: self.base.lookup_misses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::engine::{Assessment, PropertySummary};
    use collateral_core::error::Error;
    use collateral_core::types::{CompositeResult, RiskLabel, RiskResult};
    use std::collections::BTreeMap;

    fn base_assessment() -> Assessment {
        let mut components = BTreeMap::new();
        for (name, score) in [
            ("Location", 94.0),
            ("Zoning", 30.0),
            ("LGA Socio-Economic", 90.0),
            ("Marketability", 80.0),
        ] {
            let (label, _) = classify(score);
            components.insert(name.to_string(), RiskResult::new(name, score, label));
        }
        Assessment {
            summary: PropertySummary {
                address: "1 Example Street".to_string(),
                suburb: "Kirribilli".to_string(),
                state: "NSW".to_string(),
                postcode: "2061".to_string(),
                zoning: "R4".to_string(),
                lga: "North Sydney".to_string(),
                marketability: "GOOD".to_string(),
            },
            components,
            composite: CompositeResult {
                score: 73.5,
                label: RiskLabel::LowRisk,
            },
            lookup_misses: 0,
        }
    }

    fn record(component: &str, adjusted: f64) -> OverrideRecord {
        OverrideRecord {
            component: component.to_string(),
            original_score: 30.0,
            adjusted_score: adjusted,
            justification: "External sales evidence reviewed".to_string(),
            trigger: "Policy Warning".to_string(),
        }
    }

    #[test]
    fn rejected_override_leaves_session_unchanged() {
        let mut session = AssessmentSession::new(base_assessment());
        let mut bad = record("Zoning", 60.0);
        bad.justification = String::new();
        assert!(session.apply_override(bad).is_err());
        assert_eq!(session.current().composite.score, 73.5);
        assert_eq!(session.overrides().count(), 0);
    }

    #[test]
    fn override_for_unknown_component_is_rejected() {
        let mut session = AssessmentSession::new(base_assessment());
        let err = session.apply_override(record("Improvements", 60.0)).unwrap_err();
        assert!(matches!(err, Error::UnknownComponent(_)));
    }

    #[test]
    fn applied_override_recomputes_mean_composite() {
        let mut session = AssessmentSession::new(base_assessment());
        let composite = session.apply_override(record("Zoning", 60.0)).unwrap();
        // (94 + 60 + 90 + 80) / 4 = 81.0
        assert_eq!(composite.score, 81.0);

        let zoning = &session.current().components["Zoning"];
        assert_eq!(zoning.score, Some(60.0));
        assert_eq!(
            zoning.override_meta.as_ref().unwrap().original_score,
            30.0
        );
        // Base assessment stays untouched.
        assert_eq!(session.base().components["Zoning"].score, Some(30.0));
    }

    #[test]
    fn superseding_override_replaces_the_previous_one() {
        let mut session = AssessmentSession::new(base_assessment());
        session.apply_override(record("Zoning", 60.0)).unwrap();
        session.apply_override(record("Zoning", 40.0)).unwrap();
        assert_eq!(session.overrides().count(), 1);
        assert_eq!(session.current().components["Zoning"].score, Some(40.0));
        assert_eq!(
            session.current().components["Zoning"]
                .override_meta
                .as_ref()
                .unwrap()
                .original_score,
            30.0
        );
    }

    #[test]
    fn discarding_last_override_reverts_to_weighted_base() {
        let mut session = AssessmentSession::new(base_assessment());
        session.apply_override(record("Zoning", 60.0)).unwrap();
        let composite = session.discard_override("Zoning").unwrap();
        assert_eq!(composite.score, 73.5);
        assert!(session.current().components["Zoning"]
            .override_meta
            .is_none());
    }
}
