//! @ai:module:intent Human-readable plain-text insights report
//! @ai:module:layer infrastructure
//! @ai:module:public_api TextReportBuilder
//! @ai:module:depends_on model, display
//! @ai:module:stateless true

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::display::{format_decimal, group_thousands, strip_markup};
use crate::export::types::{ExportBuilder, ExportInput};
use crate::model::{InsightsRecord, OutletLeaderboard};
use chrono::NaiveDateTime;
use std::fmt::{self, Write as FmtWrite};

const BANNER_WIDTH: usize = 66;
const RULE_WIDTH: usize = 67;
const OUTLET_COLUMN_WIDTH: usize = 15;

/// @ai:intent Renders the narrative report with banner, sections and performance matrix
pub struct TextReportBuilder {
    brand_name: String,
    footer: String,
}

impl TextReportBuilder {
    /// @ai:intent Create a builder using the configured branding
    /// @ai:effects pure
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            brand_name: config.brand_name.clone(),
            footer: config.footer.clone(),
        }
    }

    /// @ai:intent Render the complete report
    /// @ai:post no emphasis markers from insight or recommendation texts survive
    /// @ai:effects pure
    pub fn render(
        &self,
        insights: &InsightsRecord,
        insight_texts: &[String],
        recommendations: &[String],
        generated_at: NaiveDateTime,
    ) -> Result<String> {
        let mut output = String::new();

        self.write_banner(&mut output, generated_at)?;
        Self::write_executive_summary(&mut output, insights)?;
        Self::write_operational_metrics(&mut output, insights)?;
        Self::write_outlet_champions(&mut output, &insights.best_dish_per_outlet)?;
        Self::write_section_header(&mut output, "💡 KEY BUSINESS INSIGHTS")?;
        Self::write_numbered(&mut output, insight_texts)?;
        // the insights block already ends on a blank line
        Self::write_section_title(&mut output, "🚀 ACTIONABLE RECOMMENDATIONS")?;
        Self::write_numbered(&mut output, recommendations)?;
        Self::write_performance_matrix(&mut output, insights)?;
        self.write_footer(&mut output)?;

        Ok(output)
    }

    fn write_banner(&self, output: &mut String, generated_at: NaiveDateTime) -> fmt::Result {
        let border = "═".repeat(BANNER_WIDTH);
        let generated = format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S"));

        writeln!(output)?;
        writeln!(output, "╔{}╗", border)?;
        for line in [self.brand_name.as_str(), "DEMAND ANALYTICS REPORT", generated.as_str()] {
            writeln!(output, "║{:^width$}║", line, width = BANNER_WIDTH)?;
        }
        writeln!(output, "╚{}╝", border)?;
        Ok(())
    }

    fn write_section_header(output: &mut String, title: &str) -> fmt::Result {
        writeln!(output)?;
        Self::write_section_title(output, title)
    }

    fn write_section_title(output: &mut String, title: &str) -> fmt::Result {
        writeln!(output, "{}", title)?;
        writeln!(output, "{}", "═".repeat(RULE_WIDTH))
    }

    fn write_executive_summary(output: &mut String, insights: &InsightsRecord) -> fmt::Result {
        Self::write_section_header(output, "📊 EXECUTIVE SUMMARY")?;
        writeln!(output)?;

        writeln!(output, "🏆 TOP PERFORMING DISH: {}", insights.top_dish)?;
        writeln!(
            output,
            "   Total Demand: {} units",
            group_thousands(insights.top_dish_demand)
        )?;
        writeln!(output)?;

        writeln!(output, "🏢 LEADING OUTLET: {}", insights.top_outlet)?;
        writeln!(
            output,
            "   Total Demand: {} units",
            group_thousands(insights.top_outlet_demand)
        )?;
        writeln!(output)?;

        writeln!(output, "⚖️ MOST VARIABLE DISH: {}", insights.most_unbalanced_dish)?;
        writeln!(
            output,
            "   Coefficient of Variation: {}",
            format_decimal(insights.unbalance_coefficient)
        )?;
        writeln!(output)?;

        writeln!(
            output,
            "📅 PEAK PERFORMANCE DAY: {}",
            insights.peak_day.format("%A, %B %d, %Y")
        )?;
        writeln!(
            output,
            "   Peak Day Demand: {} units",
            group_thousands(insights.peak_day_demand)
        )
    }

    fn write_operational_metrics(output: &mut String, insights: &InsightsRecord) -> fmt::Result {
        Self::write_section_header(output, "📈 OPERATIONAL METRICS")?;
        writeln!(output)?;

        writeln!(output, "• Total Dishes Analyzed: {}", insights.total_dishes)?;
        writeln!(output, "• Total Outlets: {}", insights.total_outlets)?;
        writeln!(
            output,
            "• Average Demand per Dish: {} units",
            format_decimal(insights.avg_demand_per_dish)
        )?;
        writeln!(output, "• Most Consistent Performer: {}", insights.most_consistent_dish)?;
        writeln!(
            output,
            "• Analysis Period: {} to {}",
            insights.date_range.start, insights.date_range.end
        )
    }

    fn write_outlet_champions(output: &mut String, champions: &OutletLeaderboard) -> fmt::Result {
        Self::write_section_header(output, "🎯 OUTLET CHAMPIONS")?;

        for (outlet, entry) in champions.iter() {
            writeln!(
                output,
                "• {}: {} ({} demand)",
                outlet,
                entry.dish,
                group_thousands(entry.demand)
            )?;
        }
        Ok(())
    }

    /// @ai:intent Write markup-free entries numbered from 1, each followed by a blank line
    fn write_numbered(output: &mut String, entries: &[String]) -> fmt::Result {
        writeln!(output)?;

        for (i, entry) in entries.iter().enumerate() {
            writeln!(output, "{}. {}", i + 1, strip_markup(entry))?;
            writeln!(output)?;
        }
        Ok(())
    }

    fn write_performance_matrix(output: &mut String, insights: &InsightsRecord) -> fmt::Result {
        Self::write_section_header(output, "📋 PERFORMANCE MATRIX")?;
        writeln!(output)?;

        writeln!(output, "BEST PERFORMERS BY OUTLET:")?;
        Self::write_matrix_rows(output, &insights.best_dish_per_outlet)?;
        writeln!(output)?;

        writeln!(output, "WORST PERFORMERS BY OUTLET:")?;
        Self::write_matrix_rows(output, &insights.worst_dish_per_outlet)
    }

    fn write_matrix_rows(output: &mut String, board: &OutletLeaderboard) -> fmt::Result {
        for (outlet, entry) in board.iter() {
            writeln!(
                output,
                "  {:<width$} → {} ({})",
                outlet,
                entry.dish,
                group_thousands(entry.demand),
                width = OUTLET_COLUMN_WIDTH
            )?;
        }
        Ok(())
    }

    fn write_footer(&self, output: &mut String) -> fmt::Result {
        let rule = "═".repeat(RULE_WIDTH);
        writeln!(output)?;
        writeln!(output)?;
        writeln!(output, "{}", rule)?;
        writeln!(output, "{}", self.footer)?;
        writeln!(output, "{}", rule)
    }
}

impl Default for TextReportBuilder {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

impl ExportBuilder for TextReportBuilder {
    fn build(&self, input: &ExportInput<'_>) -> Result<String> {
        tracing::debug!(
            insights = input.insight_texts.len(),
            recommendations = input.recommendations.len(),
            "rendering text report"
        );
        self.render(
            input.insights,
            input.insight_texts,
            input.recommendations,
            input.generated_at,
        )
    }
}
