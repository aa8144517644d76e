//! @ai:module:intent Group-by aggregation of predicted demand
//! @ai:module:layer application
//! @ai:module:public_api DemandAggregator, DemandAggregatorTrait, GroupStats
//! @ai:module:stateless true

use crate::model::DemandRecord;
use std::collections::HashMap;

/// @ai:intent Sum, mean and sample standard deviation of demand for one group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStats {
    pub key: String,
    pub total: u64,
    pub mean: f64,
    pub std_dev: f64,
}

/// @ai:intent Trait for demand aggregation
pub trait DemandAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate demand per outlet, in first-appearance order
    fn by_outlet(&self, records: &[DemandRecord]) -> Vec<GroupStats>;

    /// @ai:intent Aggregate demand per dish, in first-appearance order
    fn by_dish(&self, records: &[DemandRecord]) -> Vec<GroupStats>;
}

/// @ai:intent Aggregates demand records into per-group statistics
pub struct DemandAggregator;

impl DemandAggregator {
    /// @ai:intent Create a new demand aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Group records by key and compute stats for every group
    /// @ai:post groups appear in the order their key first occurs in records
    /// @ai:effects pure
    fn aggregate<F>(records: &[DemandRecord], key_of: F) -> Vec<GroupStats>
    where
        F: Fn(&DemandRecord) -> &str,
    {
        let mut order: Vec<&str> = Vec::new();
        let mut groups: HashMap<&str, Vec<u64>> = HashMap::new();

        for record in records {
            let key = key_of(record);
            groups
                .entry(key)
                .or_insert_with(|| {
                    order.push(key);
                    Vec::new()
                })
                .push(record.predicted_demand);
        }

        order
            .into_iter()
            .map(|key| {
                let values = &groups[key];
                GroupStats {
                    key: key.to_string(),
                    total: values.iter().sum(),
                    mean: mean(values),
                    std_dev: sample_std_dev(values),
                }
            })
            .collect()
    }
}

impl Default for DemandAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl DemandAggregatorTrait for DemandAggregator {
    fn by_outlet(&self, records: &[DemandRecord]) -> Vec<GroupStats> {
        Self::aggregate(records, |r| r.outlet.as_str())
    }

    fn by_dish(&self, records: &[DemandRecord]) -> Vec<GroupStats> {
        Self::aggregate(records, |r| r.dish.as_str())
    }
}

/// @ai:intent Arithmetic mean of demand values
/// @ai:effects pure
fn mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// @ai:intent Sample (n-1) standard deviation
/// @ai:post returns 0.0 when fewer than two values are present
/// @ai:effects pure
fn sample_std_dev(values: &[u64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let diff = v as f64 - m;
            diff * diff
        })
        .sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// @ai:intent Round to two decimal places
/// @ai:post exact halves go to the even neighbour (125.125 -> 125.12)
/// @ai:effects pure
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{date, sample_dataset};

    #[test]
    fn test_by_outlet_first_appearance_order() {
        let stats = DemandAggregator::new().by_outlet(&sample_dataset());

        let keys: Vec<_> = stats.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["Madhapur", "Jubilee Hills"]);

        assert_eq!(stats[0].total, 2500);
        assert!((stats[0].mean - 833.333).abs() < 0.001);
    }

    #[test]
    fn test_by_dish_totals() {
        let stats = DemandAggregator::new().by_dish(&sample_dataset());

        let totals: Vec<_> = stats.iter().map(|s| (s.key.as_str(), s.total)).collect();
        assert_eq!(
            totals,
            vec![("Biryani", 3000), ("Dosa", 450), ("Haleem", 450)]
        );
    }

    #[test]
    fn test_sample_std_dev_uses_n_minus_one() {
        // 2, 4, 4, 4, 5, 5, 7, 9: population sd is 2, sample sd is sqrt(32/7)
        let values = [2, 4, 4, 4, 5, 5, 7, 9];
        let expected = (32.0_f64 / 7.0).sqrt();
        assert!((sample_std_dev(&values) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_single_value_std_dev_is_zero() {
        assert_eq!(sample_std_dev(&[42]), 0.0);
        assert_eq!(sample_std_dev(&[]), 0.0);
    }

    #[test]
    fn test_empty_records_yield_no_groups() {
        let aggregator = DemandAggregator::new();
        assert!(aggregator.by_outlet(&[]).is_empty());
        assert!(aggregator.by_dish(&[]).is_empty());
    }

    #[test]
    fn test_group_std_dev() {
        let records = vec![
            DemandRecord::new("A", "Biryani", date(2024, 1, 1), 100),
            DemandRecord::new("A", "Biryani", date(2024, 1, 2), 150),
        ];
        let stats = DemandAggregator::new().by_dish(&records);
        assert_eq!(stats[0].mean, 125.0);
        assert_eq!(round2(stats[0].std_dev), 35.36);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(833.3333), 833.33);
        assert_eq!(round2(2.005_1), 2.01);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_go_to_even() {
        assert_eq!(round2(125.125), 125.12);
        assert_eq!(round2(125.375), 125.38);
        assert_eq!(round2(0.5), 0.5);
    }

    #[test]
    fn test_mean_on_exact_half_rounds_to_even() {
        // seven rows of 125 and one of 126: mean is exactly 125.125
        let mut records: Vec<_> = (1..=7)
            .map(|day| DemandRecord::new("A", "Biryani", date(2024, 1, day), 125))
            .collect();
        records.push(DemandRecord::new("A", "Biryani", date(2024, 1, 8), 126));

        let stats = DemandAggregator::new().by_dish(&records);
        assert_eq!(stats[0].mean, 125.125);
        assert_eq!(round2(stats[0].mean), 125.12);
    }
}
