//! Assessment engine: wires the reference tables and the four component
//! policies into one composite neighbourhood assessment.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use collateral_core::error::Result;
use collateral_core::types::{CompositeResult, RiskFlag, RiskResult};
use collateral_refdata::{normalise_suburb_name, ReferenceData};

use crate::composite::aggregate;
use crate::lga::assess_lga;
use crate::location::assess_location;
use crate::marketability::assess_marketability;
use crate::zoning::assess_zoning;

/// User-supplied property details for one assessment run. The core API is
/// stateless: everything an assessment needs arrives here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertyInput {
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub zoning: String,
    pub lga: String,
    pub marketability: String,
}

/// Echo of the property details carried alongside the results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySummary {
    pub address: String,
    pub suburb: String,
    pub state: String,
    pub postcode: String,
    pub zoning: String,
    pub lga: String,
    pub marketability: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub summary: PropertySummary,
    pub components: BTreeMap<String, RiskResult>,
    pub composite: CompositeResult,
    /// Reference-data lookups that found no row during this run.
    pub lookup_misses: u32,
}

impl Assessment {
    /// Components flagged for manual sign-off, in stable order.
    pub fn manual_review_components(&self) -> Vec<&RiskResult> {
        self.components
            .values()
            .filter(|result| result.requires_manual_review)
            .collect()
    }
}

/// Synchronous assessment engine over immutable reference data.
pub struct AssessmentEngine {
    refdata: ReferenceData,
    composite_weights: Option<HashMap<String, f64>>,
}

impl AssessmentEngine {
    pub fn new(refdata: ReferenceData) -> Self {
        Self {
            refdata,
            composite_weights: None,
        }
    }

    /// Use explicit composite weights (component name -> weight) instead of
    /// equal weights. An empty map is treated as "not configured".
    pub fn with_composite_weights(mut self, weights: HashMap<String, f64>) -> Self {
        if !weights.is_empty() {
            self.composite_weights = Some(weights);
        }
        self
    }

    pub fn refdata(&self) -> &ReferenceData {
        &self.refdata
    }

    /// Run the four component assessors and aggregate them. Data-quality
    /// problems degrade to Unknown components; only a composite with zero
    /// usable evidence is an error.
    pub fn assess(&self, input: &PropertyInput) -> Result<Assessment> {
        let suburb_key = normalise_suburb_name(&input.suburb);
        let mut lookup_misses = 0u32;
        if self.refdata.find_crime(&suburb_key).is_none() {
            lookup_misses += 1;
        }
        if self.refdata.find_seifa(&suburb_key).is_none() {
            lookup_misses += 1;
        }
        let location_inputs = self.refdata.location_inputs(&suburb_key);
        debug!(
            suburb_key = %suburb_key,
            crime = ?location_inputs.crime_percentile,
            irsd = ?location_inputs.irsd_decile,
            irsad = ?location_inputs.irsad_decile,
            "location inputs resolved"
        );

        let location = assess_location(
            location_inputs.crime_percentile,
            location_inputs.irsd_decile,
            location_inputs.irsad_decile,
        );
        let zoning = assess_zoning(&input.zoning);
        let lga = assess_lga(&input.lga, &self.refdata);
        if lga.flags.contains(&RiskFlag::LgaNotFound) {
            lookup_misses += 1;
        }
        let marketability = assess_marketability(&input.marketability);

        let results = [location, zoning, lga, marketability];
        let composite = aggregate(&results, self.composite_weights.as_ref())?;

        info!(
            suburb = %input.suburb,
            score = composite.score,
            label = %composite.label,
            lookup_misses,
            "neighbourhood assessment complete"
        );

        let components = results
            .into_iter()
            .map(|result| (result.risk_name.clone(), result))
            .collect();

        Ok(Assessment {
            summary: PropertySummary {
                address: input.address.clone(),
                suburb: input.suburb.clone(),
                state: input.state.clone(),
                postcode: input.postcode.clone(),
                zoning: input.zoning.trim().to_uppercase(),
                lga: input.lga.clone(),
                marketability: input.marketability.clone(),
            },
            components,
            composite,
            lookup_misses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use collateral_core::types::RiskLabel;
    use collateral_refdata::tables::{CrimeRow, LgaRow, SeifaRow};
    use std::collections::HashMap;

    fn sample_refdata() -> ReferenceData {
        let mut crime = HashMap::new();
        crime.insert(
            "KIRRIBILLI".to_string(),
            CrimeRow {
                suburb: "Kirribilli".to_string(),
                crime_12m: 40.0,
                crime_percentile: 92.0,
            },
        );
        let mut seifa = HashMap::new();
        seifa.insert(
            "KIRRIBILLI".to_string(),
            SeifaRow {
                suburb: "Kirribilli".to_string(),
                irsd_decile: Some(10),
                irsad_decile: Some(10),
            },
        );
        let mut lga = HashMap::new();
        lga.insert(
            "NORTH SYDNEY".to_string(),
            LgaRow {
                lga_name: "North Sydney".to_string(),
                irsad_decile: 9,
            },
        );
        ReferenceData::new(crime, seifa, lga)
    }

    fn sample_input() -> PropertyInput {
        PropertyInput {
            address: "1 Example Street".to_string(),
            suburb: "Kirribilli (NSW)".to_string(),
            state: "NSW".to_string(),
            postcode: "2061".to_string(),
            zoning: "R2".to_string(),
            lga: "North Sydney Council".to_string(),
            marketability: "GOOD".to_string(),
        }
    }

    #[test]
    fn end_to_end_low_risk_scenario() {
        let engine = AssessmentEngine::new(sample_refdata());
        let assessment = engine.assess(&sample_input()).unwrap();

        // Location: 0.4*100 + 0.3*100 + 0.3*100 = 100.0
        assert_eq!(assessment.components["Location"].score, Some(100.0));
        assert_eq!(assessment.components["Zoning"].score, Some(80.0));
        assert_eq!(
            assessment.components["LGA Socio-Economic"].score,
            Some(90.0)
        );
        assert_eq!(assessment.components["Marketability"].score, Some(80.0));

        // Equal weights: (100 + 80 + 90 + 80) / 4 = 87.5
        assert_eq!(assessment.composite.score, 87.5);
        assert_eq!(assessment.composite.label, RiskLabel::LowRisk);
        assert!(assessment.manual_review_components().is_empty());
    }

    #[test]
    fn unknown_suburb_still_produces_an_assessment() {
        let engine = AssessmentEngine::new(sample_refdata());
        let mut input = sample_input();
        input.suburb = "Nowhere".to_string();
        let assessment = engine.assess(&input).unwrap();

        assert!(assessment.components["Location"].score.is_none());
        // Composite still aggregates the scored components.
        // (80 + 90 + 80) / 3 = 83.3
        assert_eq!(assessment.composite.score, 83.3);
        assert_eq!(assessment.manual_review_components().len(), 1);
    }

    #[test]
    fn configured_weights_flow_into_the_composite() {
        let mut weights = HashMap::new();
        weights.insert("Location".to_string(), 0.7);
        weights.insert("Zoning".to_string(), 0.1);
        weights.insert("LGA Socio-Economic".to_string(), 0.1);
        weights.insert("Marketability".to_string(), 0.1);
        let engine = AssessmentEngine::new(sample_refdata()).with_composite_weights(weights);
        let assessment = engine.assess(&sample_input()).unwrap();
        // 0.7*100 + 0.1*80 + 0.1*90 + 0.1*80 = 95.0
        assert_eq!(assessment.composite.score, 95.0);
    }

    #[test]
    fn lookup_misses_are_counted_per_failed_lookup() {
        let engine = AssessmentEngine::new(sample_refdata());
        assert_eq!(engine.assess(&sample_input()).unwrap().lookup_misses, 0);

        // Unknown suburb misses both the crime and the SEIFA table.
        let mut input = sample_input();
        input.suburb = "Nowhere".to_string();
        assert_eq!(engine.assess(&input).unwrap().lookup_misses, 2);

        let mut input = sample_input();
        input.lga = "Atlantis".to_string();
        assert_eq!(engine.assess(&input).unwrap().lookup_misses, 1);

        // An absent LGA is never looked up, so it is not a miss.
        let mut input = sample_input();
        input.lga = String::new();
        assert_eq!(engine.assess(&input).unwrap().lookup_misses, 0);
    }

    #[test]
    fn assessment_is_deterministic() {
        let engine = AssessmentEngine::new(sample_refdata());
        let a = engine.assess(&sample_input()).unwrap();
        let b = engine.assess(&sample_input()).unwrap();
        assert_eq!(a.composite, b.composite);
        assert_eq!(a.components, b.components);
    }
}
