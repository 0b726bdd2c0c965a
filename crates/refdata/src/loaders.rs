//! CSV ingestion for the three reference datasets.
//!
//! Datasets are read once at process start and never mutated afterwards.
//! Row keys are normalized here so every later lookup is an exact match.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use tracing::info;

use collateral_core::config::DataConfig;

use crate::normalise::{normalise_lga_name, normalise_suburb_name};
use crate::tables::{CrimeRow, LgaRow, ReferenceData, SeifaRow};

#[derive(Debug, Deserialize)]
struct CrimeRecord {
    #[serde(rename = "Suburb")]
    suburb: String,
    crime_12m: f64,
}

#[derive(Debug, Deserialize)]
struct SeifaRecord {
    suburb_name: String,
    #[serde(rename = "IRSD_decile")]
    irsd_decile: Option<u8>,
    #[serde(rename = "IRSAD_decile")]
    irsad_decile: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct LgaRecord {
    lga_name: String,
    #[serde(rename = "IRSAD_decile")]
    irsad_decile: u8,
}

pub fn load_reference_data(cfg: &DataConfig) -> Result<ReferenceData> {
    let crime = load_crime(
        File::open(&cfg.crime_csv).with_context(|| format!("open {}", cfg.crime_csv))?,
    )
    .with_context(|| format!("parse {}", cfg.crime_csv))?;
    let seifa = load_seifa(
        File::open(&cfg.seifa_csv).with_context(|| format!("open {}", cfg.seifa_csv))?,
    )
    .with_context(|| format!("parse {}", cfg.seifa_csv))?;
    let lga = load_lga(File::open(&cfg.lga_csv).with_context(|| format!("open {}", cfg.lga_csv))?)
        .with_context(|| format!("parse {}", cfg.lga_csv))?;

    let data = ReferenceData::new(crime, seifa, lga);
    info!(
        crime_rows = data.crime_len(),
        seifa_rows = data.seifa_len(),
        lga_rows = data.lga_len(),
        "reference data loaded"
    );
    Ok(data)
}

/// Crime dataset with the percentile derived from the 12-month counts.
/// The lowest-crime suburb ranks safest, i.e. gets the highest percentile.
pub fn load_crime(reader: impl Read) -> Result<HashMap<String, CrimeRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for result in csv_reader.deserialize::<CrimeRecord>() {
        records.push(result?);
    }

    let n = records.len();
    let mut rows = HashMap::with_capacity(n);
    for record in &records {
        let at_or_above = records
            .iter()
            .filter(|other| other.crime_12m >= record.crime_12m)
            .count();
        let percentile = if n == 0 {
            0.0
        } else {
            at_or_above as f64 / n as f64 * 100.0
        };
        rows.insert(
            normalise_suburb_name(&record.suburb),
            CrimeRow {
                suburb: record.suburb.clone(),
                crime_12m: record.crime_12m,
                crime_percentile: percentile,
            },
        );
    }
    Ok(rows)
}

pub fn load_seifa(reader: impl Read) -> Result<HashMap<String, SeifaRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = HashMap::new();
    for result in csv_reader.deserialize::<SeifaRecord>() {
        let record = result?;
        rows.insert(
            normalise_suburb_name(&record.suburb_name),
            SeifaRow {
                suburb: record.suburb_name,
                irsd_decile: record.irsd_decile,
                irsad_decile: record.irsad_decile,
            },
        );
    }
    Ok(rows)
}

pub fn load_lga(reader: impl Read) -> Result<HashMap<String, LgaRow>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = HashMap::new();
    for result in csv_reader.deserialize::<LgaRecord>() {
        let record = result?;
        rows.insert(
            normalise_lga_name(&record.lga_name),
            LgaRow {
                lga_name: record.lga_name,
                irsad_decile: record.irsad_decile,
            },
        );
    }
    Ok(rows)
}
