//! Pure computations the decoders derive from record payloads.
//!
//! - [`stats`]: seven-slot attribute aggregation for actors
//! - [`bounds`]: size tiers from object bounding boxes

pub mod bounds;
pub mod stats;

pub use bounds::BoundsSize;
pub use stats::{EffectContribution, actor_snapshot, aggregate_special};
