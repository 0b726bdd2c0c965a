//! In-memory reference tables keyed by normalized name.
//!
//! Lookup never errors: a missing key or an empty table is `None`, and the
//! caller decides whether that triggers manual review.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct CrimeRow {
    pub suburb: String,
    pub crime_12m: f64,
    /// 0–100, higher = safer. Derived at load time from the ascending
    /// ordering of 12-month crime counts.
    pub crime_percentile: f64,
}

#[derive(Debug, Clone)]
pub struct SeifaRow {
    pub suburb: String,
    pub irsd_decile: Option<u8>,
    pub irsad_decile: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct LgaRow {
    pub lga_name: String,
    pub irsad_decile: u8,
}

/// Raw indicators for one location assessment, already resolved through
/// the tables. Absent rows stay `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationInputs {
    pub crime_percentile: Option<f64>,
    pub irsd_decile: Option<u8>,
    pub irsad_decile: Option<u8>,
}

/// All three datasets, loaded once and immutable for the process lifetime.
#[derive(Debug, Default)]
pub struct ReferenceData {
    crime: HashMap<String, CrimeRow>,
    seifa: HashMap<String, SeifaRow>,
    lga: HashMap<String, LgaRow>,
}

impl ReferenceData {
    pub fn new(
        crime: HashMap<String, CrimeRow>,
        seifa: HashMap<String, SeifaRow>,
        lga: HashMap<String, LgaRow>,
    ) -> Self {
        Self { crime, seifa, lga }
    }

    pub fn find_crime(&self, suburb_key: &str) -> Option<&CrimeRow> {
        self.crime.get(suburb_key)
    }

    pub fn find_seifa(&self, suburb_key: &str) -> Option<&SeifaRow> {
        self.seifa.get(suburb_key)
    }

    pub fn find_lga(&self, lga_key: &str) -> Option<&LgaRow> {
        self.lga.get(lga_key)
    }

    /// Collect the raw inputs for a location assessment by suburb key.
    pub fn location_inputs(&self, suburb_key: &str) -> LocationInputs {
        let crime = self.find_crime(suburb_key);
        let seifa = self.find_seifa(suburb_key);
        LocationInputs {
            crime_percentile: crime.map(|row| row.crime_percentile),
            irsd_decile: seifa.and_then(|row| row.irsd_decile),
            irsad_decile: seifa.and_then(|row| row.irsad_decile),
        }
    }

    pub fn crime_len(&self) -> usize {
        self.crime.len()
    }

    pub fn seifa_len(&self) -> usize {
        self.seifa.len()
    }

    pub fn lga_len(&self) -> usize {
        self.lga.len()
    }
}
