//! @ai:module:intent Domain records consumed by the export builders
//! @ai:module:layer domain
//! @ai:module:public_api DemandRecord, InsightsRecord, DishDemand, OutletLeaderboard, DateRange

#[cfg(test)]
pub(crate) mod fixtures;
pub mod types;

pub use types::{
    DateRange, DemandRecord, DishDemand, InsightsRecord, OutletLeaderboard, DEMAND_COLUMNS,
};
