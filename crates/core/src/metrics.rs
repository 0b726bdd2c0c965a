//! Process metrics registry. Compiled to a no-op unless the `metrics`
//! feature is enabled.

#[cfg(feature = "metrics")]
use anyhow::Result;

#[cfg(feature = "metrics")]
pub struct Metrics {
    registry: prometheus::Registry,
}

#[cfg(feature = "metrics")]
impl Metrics {
    pub fn new() -> Self {
        Self {
            registry: prometheus::Registry::new(),
        }
    }

    /// Create a monotonic counter and register it in one step.
    pub fn int_counter(&self, name: &str, help: &str) -> Result<prometheus::IntCounter> {
        let counter = prometheus::IntCounter::with_opts(prometheus::Opts::new(name, help))?;
        self.registry.register(Box::new(counter.clone()))?;
        Ok(counter)
    }

    /// Render the registry in the Prometheus text exposition format.
    pub fn gather(&self) -> String {
        use prometheus::Encoder;

        let encoder = prometheus::TextEncoder::new();
        let families = self.registry.gather();
        let mut buf = Vec::new();
        let _ = encoder.encode(&families, &mut buf);
        String::from_utf8_lossy(&buf).to_string()
    }
}

#[cfg(feature = "metrics")]
impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(not(feature = "metrics"))]
pub struct Metrics;

#[cfg(not(feature = "metrics"))]
impl Metrics {
    pub fn new() -> Self {
        Metrics
    }

    pub fn gather(&self) -> String {
        String::new()
    }
}

#[cfg(not(feature = "metrics"))]
impl Default for Metrics {
    fn default() -> Self {
        Metrics
    }
}
