//! Rationale builders: short natural-language fragments per indicator plus
//! an overall sentence, joined into one plain-text rationale.

use collateral_core::types::RiskLabel;

pub fn build_location_narrative(
    crime_percentile: Option<f64>,
    irsd_decile: Option<u8>,
    irsad_decile: Option<u8>,
    label: RiskLabel,
) -> String {
    let mut lines = Vec::new();

    if let Some(percentile) = crime_percentile {
        let tier = if percentile >= 75.0 {
            "low risk"
        } else if percentile >= 50.0 {
            "average risk"
        } else {
            "elevated risk"
        };
        lines.push(format!("Crime: p{percentile:.0} ({tier})"));
    }

    if let Some(decile) = irsd_decile {
        let tier = if decile >= 8 {
            "low disadvantage"
        } else if decile >= 4 {
            "moderate disadvantage"
        } else {
            "high disadvantage"
        };
        lines.push(format!("IRSD: decile {decile} ({tier})"));
    }

    if let Some(decile) = irsad_decile {
        let tier = if decile >= 8 {
            "above-average profile"
        } else if decile >= 4 {
            "mixed profile"
        } else {
            "below-average profile"
        };
        lines.push(format!("IRSAD: decile {decile} ({tier})"));
    }

    lines.push(overall("location", label));
    lines.join("; ")
}

pub fn build_zoning_narrative(zoning_code: Option<&str>, label: RiskLabel) -> String {
    let mut lines = Vec::new();
    match zoning_code {
        Some(code) => lines.push(format!("Zoning: {code}")),
        None => lines.push("Zoning: not specified".to_string()),
    }
    lines.push(overall("zoning", label));
    lines.join("; ")
}

pub fn build_lga_narrative(lga_name: Option<&str>, label: RiskLabel) -> String {
    let mut lines = Vec::new();
    match lga_name {
        Some(name) => lines.push(format!("LGA: {name}")),
        None => lines.push("LGA: not specified".to_string()),
    }
    lines.push(overall("LGA", label));
    lines.join("; ")
}

pub fn build_marketability_narrative(level: Option<&str>, label: RiskLabel) -> String {
    let mut lines = Vec::new();
    match level {
        Some(level) => lines.push(format!("Marketability: {level}")),
        None => lines.push("Marketability: not specified".to_string()),
    }
    lines.push(overall("marketability", label));
    lines.join("; ")
}

fn overall(component: &str, label: RiskLabel) -> String {
    format!(
        "Overall: {component} risk assessed as {}",
        label.as_str().to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use collateral_core::types::RiskLabel;

    #[test]
    fn location_narrative_skips_absent_indicators() {
        let text = build_location_narrative(None, Some(8), None, RiskLabel::LowRisk);
        assert!(!text.contains("Crime"));
        assert!(text.contains("IRSD: decile 8 (low disadvantage)"));
        assert!(text.contains("location risk assessed as low risk"));
    }

    #[test]
    fn zoning_narrative_names_the_code() {
        let text = build_zoning_narrative(Some("R4"), RiskLabel::ElevatedRisk);
        assert!(text.contains("Zoning: R4"));
        assert!(text.contains("elevated risk"));
    }
}
