//! Weighted composite aggregation across component risk results.
//!
//! Scoreless results are excluded entirely from numerator and
//! denominator. Degenerate weight configurations are caller bugs and
//! surface as errors rather than a defaulted score.

use std::collections::HashMap;

use collateral_core::error::{Error, Result};
use collateral_core::types::{CompositeResult, RiskResult};
use tracing::debug;

use crate::classify::classify;

/// Diagnostic breakdown of one aggregation pass.
#[derive(Debug, Clone)]
pub struct AggregateBreakdown {
    pub inputs: Vec<(String, f64, f64)>,
    pub total_weight: f64,
    pub raw_score: f64,
    pub composite: CompositeResult,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate the scored results into one composite. `weights` maps
/// component name to weight; `None` means equal weights over the scored
/// results, and a weight of zero or less excludes the component.
pub fn aggregate(
    results: &[RiskResult],
    weights: Option<&HashMap<String, f64>>,
) -> Result<CompositeResult> {
    Ok(aggregate_debug(results, weights)?.composite)
}

/// As [`aggregate`], additionally surfacing the per-input contributions.
pub fn aggregate_debug(
    results: &[RiskResult],
    weights: Option<&HashMap<String, f64>>,
) -> Result<AggregateBreakdown> {
    if results.is_empty() {
        return Err(Error::Aggregation("no risk results provided".to_string()));
    }

    let scored: Vec<(&str, f64)> = results
        .iter()
        .filter_map(|result| result.score.map(|score| (result.risk_name.as_str(), score)))
        .collect();

    if scored.is_empty() {
        return Err(Error::Aggregation(
            "no result carries a usable score".to_string(),
        ));
    }

    let equal_weight = 1.0 / scored.len() as f64;
    let mut inputs = Vec::new();
    let mut total_score = 0.0;
    let mut total_weight = 0.0;

    for (name, score) in &scored {
        let weight = match weights {
            Some(map) => map.get(*name).copied().unwrap_or(0.0),
            None => equal_weight,
        };
        if weight <= 0.0 {
            continue;
        }
        total_score += score * weight;
        total_weight += weight;
        inputs.push((name.to_string(), *score, weight));
    }

    if total_weight == 0.0 {
        return Err(Error::Aggregation(
            "total effective weight is zero; check weight configuration".to_string(),
        ));
    }

    let score = round1(total_score / total_weight);
    let (label, _) = classify(score);
    debug!(score, %label, total_weight, "composite aggregated");

    Ok(AggregateBreakdown {
        inputs,
        total_weight,
        raw_score: total_score,
        composite: CompositeResult { score, label },
    })
}
