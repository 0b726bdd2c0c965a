pub mod config;
pub mod error;
pub mod metrics;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use types::{
    CompositeResult, OverrideMeta, OverrideRecord, PolicyEntry, PolicySeverity, RiskFlag,
    RiskLabel, RiskResult,
};
