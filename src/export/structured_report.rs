//! @ai:module:intent Structured JSON report with aggregated outlet and dish statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api StructuredReportBuilder, StructuredReport
//! @ai:module:depends_on stats, model

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::export::types::{ExportBuilder, ExportInput};
use crate::model::{DemandRecord, InsightsRecord, OutletLeaderboard};
use crate::stats::{round2, DemandAggregator, DemandAggregatorTrait, GroupStats};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const REPORT_TYPE: &str = "demand_analytics_insights";

/// @ai:intent Complete structured report document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredReport {
    pub report_metadata: ReportMetadata,
    pub executive_summary: ExecutiveSummary,
    /// Keyed by outlet name, alphabetical
    pub outlet_performance: BTreeMap<String, OutletPerformance>,
    pub top_dishes: Vec<RankedDish>,
    pub performance_insights: PerformanceInsights,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: NaiveDateTime,
    pub report_type: String,
    pub data_period: DataPeriod,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPeriod {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedTotal {
    pub name: String,
    pub total_demand: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDish {
    pub name: String,
    pub coefficient_of_variation: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub total_demand: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveSummary {
    pub top_dish: NamedTotal,
    pub leading_outlet: NamedTotal,
    pub most_variable_dish: VariableDish,
    pub peak_day: PeakDay,
    pub most_consistent_dish: String,
    pub average_demand_per_dish: f64,
    pub total_dishes_analyzed: usize,
    pub total_outlets: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletPerformance {
    pub total_demand: u64,
    pub average_demand: f64,
    pub demand_std_dev: f64,
    pub champion_dish: String,
    pub champion_dish_demand: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedDish {
    pub rank: usize,
    pub dish_name: String,
    pub total_demand: u64,
    pub average_demand: f64,
    pub demand_std_dev: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInsights {
    pub outlet_champions: OutletLeaderboard,
    pub underperformers: OutletLeaderboard,
}

/// @ai:intent Aggregates the dataset and assembles the structured report
pub struct StructuredReportBuilder {
    aggregator: DemandAggregator,
    top_dishes_limit: usize,
}

impl StructuredReportBuilder {
    /// @ai:intent Create a builder honoring the configured ranking size
    /// @ai:effects pure
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            aggregator: DemandAggregator::new(),
            top_dishes_limit: config.top_dishes_limit,
        }
    }

    /// @ai:intent Assemble the report document
    /// @ai:pre every outlet in the dataset has a champion entry in insights
    /// @ai:effects pure
    pub fn assemble(
        &self,
        insights: &InsightsRecord,
        dataset: &[DemandRecord],
        generated_at: NaiveDateTime,
    ) -> Result<StructuredReport> {
        let outlet_performance = self
            .aggregator
            .by_outlet(dataset)
            .into_iter()
            .map(|stats| Self::outlet_entry(stats, &insights.best_dish_per_outlet))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(StructuredReport {
            report_metadata: ReportMetadata {
                generated_at,
                report_type: REPORT_TYPE.to_string(),
                data_period: DataPeriod {
                    start_date: insights.date_range.start,
                    end_date: insights.date_range.end,
                    total_days: insights.date_range.total_days(),
                },
            },
            executive_summary: Self::executive_summary(insights),
            outlet_performance,
            top_dishes: self.rank_dishes(dataset),
            performance_insights: PerformanceInsights {
                outlet_champions: insights.best_dish_per_outlet.clone(),
                underperformers: insights.worst_dish_per_outlet.clone(),
            },
        })
    }

    /// @ai:intent Render the report as pretty-printed JSON
    /// @ai:effects pure
    pub fn render(
        &self,
        insights: &InsightsRecord,
        dataset: &[DemandRecord],
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        let report = self.assemble(insights, dataset, generated_at)?;
        Ok(serde_json::to_string_pretty(&report)?)
    }

    fn executive_summary(insights: &InsightsRecord) -> ExecutiveSummary {
        ExecutiveSummary {
            top_dish: NamedTotal {
                name: insights.top_dish.clone(),
                total_demand: insights.top_dish_demand,
            },
            leading_outlet: NamedTotal {
                name: insights.top_outlet.clone(),
                total_demand: insights.top_outlet_demand,
            },
            most_variable_dish: VariableDish {
                name: insights.most_unbalanced_dish.clone(),
                coefficient_of_variation: insights.unbalance_coefficient,
            },
            peak_day: PeakDay {
                date: insights.peak_day,
                total_demand: insights.peak_day_demand,
            },
            most_consistent_dish: insights.most_consistent_dish.clone(),
            average_demand_per_dish: insights.avg_demand_per_dish,
            total_dishes_analyzed: insights.total_dishes,
            total_outlets: insights.total_outlets,
        }
    }

    fn outlet_entry(
        stats: GroupStats,
        champions: &OutletLeaderboard,
    ) -> Result<(String, OutletPerformance)> {
        let champion = champions
            .get(&stats.key)
            .ok_or_else(|| ExportError::MissingChampion {
                outlet: stats.key.clone(),
            })?;

        let entry = OutletPerformance {
            total_demand: stats.total,
            average_demand: round2(stats.mean),
            demand_std_dev: round2(stats.std_dev),
            champion_dish: champion.dish.clone(),
            champion_dish_demand: champion.demand,
        };
        Ok((stats.key, entry))
    }

    /// @ai:intent Rank dishes by total demand, descending
    /// @ai:post ties keep the order in which dishes first appear in the dataset
    /// @ai:effects pure
    fn rank_dishes(&self, dataset: &[DemandRecord]) -> Vec<RankedDish> {
        let mut dishes = self.aggregator.by_dish(dataset);
        dishes.sort_by(|a, b| b.total.cmp(&a.total));

        dishes
            .into_iter()
            .take(self.top_dishes_limit)
            .enumerate()
            .map(|(i, stats)| RankedDish {
                rank: i + 1,
                dish_name: stats.key,
                total_demand: stats.total,
                average_demand: round2(stats.mean),
                demand_std_dev: round2(stats.std_dev),
            })
            .collect()
    }
}

impl Default for StructuredReportBuilder {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

impl ExportBuilder for StructuredReportBuilder {
    fn build(&self, input: &ExportInput<'_>) -> Result<String> {
        tracing::debug!(rows = input.dataset.len(), "building structured report");
        self.render(input.insights, input.dataset, input.generated_at)
    }
}
