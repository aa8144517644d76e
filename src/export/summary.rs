//! @ai:module:intent Executive summary export as a two-column CSV
//! @ai:module:layer infrastructure
//! @ai:module:public_api SummaryExporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::export::display::format_decimal;
use crate::export::tabular::finish;
use crate::export::types::{ExportBuilder, ExportInput};
use crate::model::InsightsRecord;
use csv::{Terminator, WriterBuilder};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// @ai:intent Serializes the fixed set of headline metrics
pub struct SummaryExporter;

impl SummaryExporter {
    /// @ai:intent Create a new summary exporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent List the fourteen headline metrics in report order
    /// @ai:effects pure
    pub fn metrics(insights: &InsightsRecord) -> Vec<(&'static str, String)> {
        vec![
            ("Top Performing Dish", insights.top_dish.clone()),
            ("Top Dish Demand", insights.top_dish_demand.to_string()),
            ("Leading Outlet", insights.top_outlet.clone()),
            ("Leading Outlet Demand", insights.top_outlet_demand.to_string()),
            ("Most Variable Dish", insights.most_unbalanced_dish.clone()),
            (
                "Variability Coefficient",
                format_decimal(insights.unbalance_coefficient),
            ),
            ("Peak Day", insights.peak_day.format(DATE_FORMAT).to_string()),
            ("Peak Day Demand", insights.peak_day_demand.to_string()),
            ("Most Consistent Dish", insights.most_consistent_dish.clone()),
            (
                "Average Demand per Dish",
                format_decimal(insights.avg_demand_per_dish),
            ),
            ("Total Dishes Analyzed", insights.total_dishes.to_string()),
            ("Total Outlets", insights.total_outlets.to_string()),
            (
                "Analysis Start Date",
                insights.date_range.start.format(DATE_FORMAT).to_string(),
            ),
            (
                "Analysis End Date",
                insights.date_range.end.format(DATE_FORMAT).to_string(),
            ),
        ]
    }

    /// @ai:intent Write the metrics as a Metric,Value table
    /// @ai:effects pure
    pub fn export(insights: &InsightsRecord) -> Result<String> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(["Metric", "Value"])?;
        for (metric, value) in Self::metrics(insights) {
            writer.write_record([metric, value.as_str()])?;
        }

        finish(writer)
    }
}

impl Default for SummaryExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBuilder for SummaryExporter {
    fn build(&self, input: &ExportInput<'_>) -> Result<String> {
        tracing::debug!("exporting executive summary");
        Self::export(input.insights)
    }
}
