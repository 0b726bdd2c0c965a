pub mod classify;
pub mod composite;
pub mod engine;
pub mod land;
pub mod lga;
pub mod location;
pub mod marketability;
pub mod metrics;
pub mod narrative;
pub mod reconcile;
pub mod session;
pub mod zoning;

pub use classify::classify;
pub use composite::{aggregate, aggregate_debug, AggregateBreakdown};
pub use engine::{Assessment, AssessmentEngine, PropertyInput, PropertySummary};
pub use reconcile::apply_override;
pub use session::AssessmentSession;
