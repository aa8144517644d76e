//! @ai:module:intent Route an export request to the matching builder
//! @ai:module:layer application
//! @ai:module:public_api ExportDispatcher
//! @ai:module:depends_on tabular, summary, text_report, structured_report

use crate::config::ExportConfig;
use crate::error::Result;
use crate::export::format::ExportFormat;
use crate::export::structured_report::StructuredReportBuilder;
use crate::export::summary::SummaryExporter;
use crate::export::tabular::TabularExporter;
use crate::export::text_report::TextReportBuilder;
use crate::export::types::{ExportBuilder, ExportInput, ExportPayload};
use chrono::NaiveDateTime;

/// @ai:intent Combined export generator
pub struct ExportDispatcher {
    file_prefix: String,
    tabular: TabularExporter,
    summary: SummaryExporter,
    text: TextReportBuilder,
    structured: StructuredReportBuilder,
}

impl ExportDispatcher {
    /// @ai:intent Create a dispatcher whose builders share one configuration
    /// @ai:effects pure
    pub fn new(config: &ExportConfig) -> Self {
        Self {
            file_prefix: config.file_prefix.clone(),
            tabular: TabularExporter::new(),
            summary: SummaryExporter::new(),
            text: TextReportBuilder::new(config),
            structured: StructuredReportBuilder::new(config),
        }
    }

    /// @ai:intent Generate the payload for a format
    /// @ai:effects pure
    pub fn generate(&self, format: ExportFormat, input: &ExportInput<'_>) -> Result<ExportPayload> {
        let builder: &dyn ExportBuilder = match format {
            ExportFormat::FullDataset => &self.tabular,
            ExportFormat::ExecutiveSummary => &self.summary,
            ExportFormat::TextReport => &self.text,
            ExportFormat::StructuredReport => &self.structured,
        };

        let content = builder.build(input)?;
        let filename = self.filename(format, input.generated_at);

        tracing::info!(
            format = format.name(),
            bytes = content.len(),
            "Generated export {}",
            filename
        );

        Ok(ExportPayload {
            content,
            filename,
            mime_type: format.mime_type(),
        })
    }

    /// @ai:intent Parse a selector string and generate its payload
    /// @ai:post unknown selectors fail with ExportError::InvalidFormat and produce nothing
    /// @ai:effects pure
    pub fn generate_from_selector(
        &self,
        selector: &str,
        input: &ExportInput<'_>,
    ) -> Result<ExportPayload> {
        let format = selector.parse::<ExportFormat>().map_err(|e| {
            tracing::warn!("Rejected export selector {:?}", selector);
            e
        })?;
        self.generate(format, input)
    }

    /// @ai:intent Build `{prefix}_{kind}_{YYYYMMDD_HHMMSS}.{ext}`
    /// @ai:effects pure
    pub fn filename(&self, format: ExportFormat, generated_at: NaiveDateTime) -> String {
        format!(
            "{}_{}_{}.{}",
            self.file_prefix,
            format.kind(),
            generated_at.format("%Y%m%d_%H%M%S"),
            format.extension()
        )
    }
}

impl Default for ExportDispatcher {
    fn default() -> Self {
        Self::new(&ExportConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExportError;
    use crate::model::fixtures::{
        generated_at, sample_dataset, sample_insights, sample_recommendations, sample_texts,
    };
    use pretty_assertions::assert_eq;

    #[test]
    fn test_filenames_and_mime_types() {
        let dataset = sample_dataset();
        let insights = sample_insights();
        let input = ExportInput::new(&dataset, &insights).at(generated_at());
        let dispatcher = ExportDispatcher::default();

        let expected = [
            (ExportFormat::FullDataset, "kkcg_demand_data_20240201_093015.csv", "text/csv"),
            (
                ExportFormat::ExecutiveSummary,
                "kkcg_executive_summary_20240201_093015.csv",
                "text/csv",
            ),
            (
                ExportFormat::TextReport,
                "kkcg_insights_report_20240201_093015.txt",
                "text/plain",
            ),
            (
                ExportFormat::StructuredReport,
                "kkcg_structured_data_20240201_093015.json",
                "application/json",
            ),
        ];

        for (format, filename, mime) in expected {
            let payload = dispatcher.generate(format, &input).unwrap();
            assert_eq!(payload.filename, filename);
            assert_eq!(payload.mime_type, mime);
            assert!(!payload.content.is_empty());
        }
    }

    #[test]
    fn test_full_dataset_row_count() {
        let dataset = sample_dataset();
        let insights = sample_insights();
        let input = ExportInput::new(&dataset, &insights).at(generated_at());

        let payload = ExportDispatcher::default()
            .generate_from_selector("full-dataset", &input)
            .unwrap();
        assert_eq!(payload.content.lines().count() - 1, dataset.len());
    }

    #[test]
    fn test_dashboard_codes_route_to_builders() {
        let dataset = sample_dataset();
        let insights = sample_insights();
        let texts = sample_texts();
        let recommendations = sample_recommendations();
        let input = ExportInput::new(&dataset, &insights)
            .with_insight_texts(&texts)
            .with_recommendations(&recommendations)
            .at(generated_at());
        let dispatcher = ExportDispatcher::default();

        let summary = dispatcher.generate_from_selector("csv_summary", &input).unwrap();
        assert!(summary.content.starts_with("Metric,Value\n"));

        let text = dispatcher.generate_from_selector("txt_insights", &input).unwrap();
        assert!(text.content.contains("1. 🏆 Biryani is the star performer"));

        let json = dispatcher.generate_from_selector("json_insights", &input).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json.content).unwrap();
        assert_eq!(value["top_dishes"][0]["dish_name"], "Biryani");
    }

    #[test]
    fn test_unknown_selector_fails() {
        let dataset = sample_dataset();
        let insights = sample_insights();
        let input = ExportInput::new(&dataset, &insights);

        let result = ExportDispatcher::default().generate_from_selector("xml_insights", &input);
        match result {
            Err(ExportError::InvalidFormat(selector)) => assert_eq!(selector, "xml_insights"),
            other => panic!("expected InvalidFormat, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_prefix() {
        let config = ExportConfig {
            file_prefix: "acme".to_string(),
            ..Default::default()
        };
        let dispatcher = ExportDispatcher::new(&config);
        assert_eq!(
            dispatcher.filename(ExportFormat::TextReport, generated_at()),
            "acme_insights_report_20240201_093015.txt"
        );
    }

    #[test]
    fn test_empty_dataset_exports() {
        let insights = sample_insights();
        let input = ExportInput::new(&[], &insights).at(generated_at());
        let dispatcher = ExportDispatcher::default();

        for format in ExportFormat::ALL {
            assert!(dispatcher.generate(format, &input).is_ok());
        }
    }

    #[test]
    fn test_payload_download_link() {
        let dataset = sample_dataset();
        let insights = sample_insights();
        let input = ExportInput::new(&dataset, &insights).at(generated_at());

        let payload = ExportDispatcher::default()
            .generate(ExportFormat::FullDataset, &input)
            .unwrap();
        let link = payload.download_link();
        assert!(link.starts_with("<a href=\"data:text/csv;base64,"));
        assert!(link.ends_with("Download kkcg_demand_data_20240201_093015.csv</a>"));
        assert!(payload.data_uri().starts_with("data:text/csv;base64,"));
    }
}
