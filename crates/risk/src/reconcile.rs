//! Manual override reconciliation.
//!
//! An analyst replaces one component's system-generated score; the
//! component is re-labelled under the canonical bands and the composite is
//! recomputed as a simple arithmetic mean of the current component scores.
//! The mean is a deliberately different algorithm from the weighted
//! initial aggregation (see DESIGN.md).

use std::collections::BTreeMap;

use collateral_core::error::{Error, Result};
use collateral_core::types::{CompositeResult, OverrideMeta, OverrideRecord, RiskResult};
use tracing::info;

use crate::classify::classify;
use crate::composite::round1;

/// Validate an override record without touching any state.
pub fn validate_override(record: &OverrideRecord) -> Result<()> {
    if record.justification.trim().is_empty() {
        return Err(Error::Override(
            "override justification is required".to_string(),
        ));
    }
    if !(0.0..=100.0).contains(&record.adjusted_score) {
        return Err(Error::Override(format!(
            "adjusted score {} outside 0-100",
            record.adjusted_score
        )));
    }
    Ok(())
}

/// Apply one override to the component map and recompute the composite.
/// Rejection leaves the map untouched; the original assessor score is kept
/// on the result as override provenance.
pub fn apply_override(
    results: &mut BTreeMap<String, RiskResult>,
    record: &OverrideRecord,
) -> Result<CompositeResult> {
    validate_override(record)?;

    let result = results
        .get_mut(&record.component)
        .ok_or_else(|| Error::UnknownComponent(record.component.clone()))?;

    // Superseding an earlier override keeps the system-generated score.
    let original_score = result
        .override_meta
        .as_ref()
        .map(|meta| meta.original_score)
        .or(result.score)
        .unwrap_or(record.original_score);

    let (label, _) = classify(record.adjusted_score);
    result.score = Some(record.adjusted_score);
    result.label = label;
    result.override_meta = Some(OverrideMeta {
        original_score,
        justification: record.justification.clone(),
        trigger: record.trigger.clone(),
    });

    info!(
        component = %record.component,
        original_score,
        adjusted_score = record.adjusted_score,
        trigger = %record.trigger,
        "manual override applied"
    );

    mean_composite(results)
}

/// Post-override composite: simple mean over the components that carry a
/// score.
pub fn mean_composite(results: &BTreeMap<String, RiskResult>) -> Result<CompositeResult> {
    let scores: Vec<f64> = results.values().filter_map(|result| result.score).collect();
    if scores.is_empty() {
        return Err(Error::Aggregation(
            "no result carries a usable score".to_string(),
        ));
    }
    let score = round1(scores.iter().sum::<f64>() / scores.len() as f64);
    let (label, _) = classify(score);
    Ok(CompositeResult { score, label })
}
