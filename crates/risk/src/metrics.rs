//! Engine counters, registered on the shared metrics registry. Without the
//! `metrics` feature every call is a no-op.

#[cfg(feature = "metrics")]
use anyhow::Result;
#[cfg(feature = "metrics")]
use collateral_core::metrics::Metrics;
#[cfg(feature = "metrics")]
use prometheus::IntCounter;

#[cfg(feature = "metrics")]
pub struct EngineMetrics {
    metrics: Metrics,
    assessments_total: IntCounter,
    lookup_misses_total: IntCounter,
    overrides_total: IntCounter,
}

#[cfg(feature = "metrics")]
impl EngineMetrics {
    pub fn new() -> Result<Self> {
        let metrics = Metrics::new();
        let assessments_total = metrics.int_counter(
            "colrisk_assessments_total",
            "Total neighbourhood assessments run",
        )?;
        let lookup_misses_total = metrics.int_counter(
            "colrisk_lookup_misses_total",
            "Total reference-data lookups that found no row",
        )?;
        let overrides_total = metrics.int_counter(
            "colrisk_overrides_total",
            "Total manual overrides applied",
        )?;
        Ok(Self {
            metrics,
            assessments_total,
            lookup_misses_total,
            overrides_total,
        })
    }

    pub fn inc_assessments(&self) {
        self.assessments_total.inc();
    }

    pub fn inc_lookup_misses_by(&self, misses: u64) {
        self.lookup_misses_total.inc_by(misses);
    }

    pub fn inc_overrides(&self) {
        self.overrides_total.inc();
    }

    pub fn gather(&self) -> String {
        self.metrics.gather()
    }
}

#[cfg(not(feature = "metrics"))]
pub struct EngineMetrics;

#[cfg(not(feature = "metrics"))]
impl EngineMetrics {
    pub fn new() -> anyhow::Result<Self> {
        Ok(EngineMetrics)
    }

    pub fn inc_assessments(&self) {}

    pub fn inc_lookup_misses_by(&self, _misses: u64) {}

    pub fn inc_overrides(&self) {}

    pub fn gather(&self) -> String {
        String::new()
    }
}
