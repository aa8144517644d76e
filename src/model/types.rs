//! @ai:module:intent Typed records for demand data and precomputed insights
//! @ai:module:layer domain
//! @ai:module:public_api DemandRecord, InsightsRecord, DishDemand, OutletLeaderboard, DateRange
//! @ai:module:stateless true

use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Column names of the demand dataset, in export order.
pub const DEMAND_COLUMNS: [&str; 4] = ["outlet", "dish", "date", "predicted_demand"];

/// @ai:intent One row of the demand dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemandRecord {
    pub outlet: String,
    pub dish: String,
    pub date: NaiveDate,
    pub predicted_demand: u64,
}

impl DemandRecord {
    /// @ai:intent Create a demand record
    /// @ai:effects pure
    pub fn new(
        outlet: impl Into<String>,
        dish: impl Into<String>,
        date: NaiveDate,
        predicted_demand: u64,
    ) -> Self {
        Self {
            outlet: outlet.into(),
            dish: dish.into(),
            date,
            predicted_demand,
        }
    }
}

/// @ai:intent A dish paired with its aggregate demand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DishDemand {
    pub dish: String,
    pub demand: u64,
}

impl DishDemand {
    /// @ai:effects pure
    pub fn new(dish: impl Into<String>, demand: u64) -> Self {
        Self {
            dish: dish.into(),
            demand,
        }
    }
}

/// @ai:intent Ordered outlet -> dish mapping that keeps insertion order
///
/// Serializes as a JSON object whose keys follow insertion order, and
/// deserializes back in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutletLeaderboard {
    entries: Vec<(String, DishDemand)>,
}

impl OutletLeaderboard {
    /// @ai:effects pure
    pub fn new() -> Self {
        Self::default()
    }

    /// @ai:intent Append an outlet entry, replacing the value of an existing outlet in place
    /// @ai:effects mutates self
    pub fn insert(&mut self, outlet: impl Into<String>, entry: DishDemand) {
        let outlet = outlet.into();
        match self.entries.iter_mut().find(|(name, _)| *name == outlet) {
            Some((_, existing)) => *existing = entry,
            None => self.entries.push((outlet, entry)),
        }
    }

    /// @ai:intent Look up the entry recorded for an outlet
    /// @ai:effects pure
    pub fn get(&self, outlet: &str) -> Option<&DishDemand> {
        self.entries
            .iter()
            .find(|(name, _)| name == outlet)
            .map(|(_, entry)| entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DishDemand)> {
        self.entries
            .iter()
            .map(|(outlet, entry)| (outlet.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, DishDemand)> for OutletLeaderboard {
    fn from_iter<I: IntoIterator<Item = (S, DishDemand)>>(iter: I) -> Self {
        let mut board = Self::new();
        for (outlet, entry) in iter {
            board.insert(outlet, entry);
        }
        board
    }
}

impl Serialize for OutletLeaderboard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (outlet, entry) in &self.entries {
            map.serialize_entry(outlet, entry)?;
        }
        map.end()
    }
}

struct LeaderboardVisitor;

impl<'de> Visitor<'de> for LeaderboardVisitor {
    type Value = OutletLeaderboard;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of outlet names to dish demand entries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut board = OutletLeaderboard::new();
        while let Some((outlet, entry)) = access.next_entry::<String, DishDemand>()? {
            board.insert(outlet, entry);
        }
        Ok(board)
    }
}

impl<'de> Deserialize<'de> for OutletLeaderboard {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LeaderboardVisitor)
    }
}

/// @ai:intent Inclusive analysis period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// @ai:intent Number of calendar days covered, counting both ends
    /// @ai:effects pure
    pub fn total_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// @ai:intent Precomputed analytics summary consumed by every report builder
///
/// Field names match the keys emitted by the insights engine, so a missing
/// key fails deserialization instead of being defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsRecord {
    pub top_dish: String,
    pub top_dish_demand: u64,
    pub top_outlet: String,
    pub top_outlet_demand: u64,
    pub most_unbalanced_dish: String,
    pub unbalance_coefficient: f64,
    pub best_dish_per_outlet: OutletLeaderboard,
    pub worst_dish_per_outlet: OutletLeaderboard,
    pub peak_day: NaiveDate,
    pub peak_day_demand: u64,
    pub avg_demand_per_dish: f64,
    pub most_consistent_dish: String,
    pub total_dishes: usize,
    pub total_outlets: usize,
    pub date_range: DateRange,
}
