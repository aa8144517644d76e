//! @ai:module:intent Demand statistics used by the structured report
//! @ai:module:layer application
//! @ai:module:public_api DemandAggregator, DemandAggregatorTrait, GroupStats, round2

pub mod aggregator;

pub use aggregator::{round2, DemandAggregator, DemandAggregatorTrait, GroupStats};
