//! @ai:module:intent Closed set of export formats and their file metadata
//! @ai:module:layer domain
//! @ai:module:public_api ExportFormat, export_formats
//! @ai:module:stateless true

use crate::error::ExportError;
use std::fmt;
use std::str::FromStr;

/// @ai:intent Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    FullDataset,
    ExecutiveSummary,
    TextReport,
    StructuredReport,
}

impl ExportFormat {
    /// Every format, in the order the dashboard lists them.
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::FullDataset,
        ExportFormat::ExecutiveSummary,
        ExportFormat::TextReport,
        ExportFormat::StructuredReport,
    ];

    /// @ai:intent Selector code used by the dashboard format picker
    /// @ai:effects pure
    pub fn code(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset => "csv_full",
            ExportFormat::ExecutiveSummary => "csv_summary",
            ExportFormat::TextReport => "txt_insights",
            ExportFormat::StructuredReport => "json_insights",
        }
    }

    /// @ai:intent Descriptive selector name
    /// @ai:effects pure
    pub fn name(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset => "full-dataset",
            ExportFormat::ExecutiveSummary => "executive-summary",
            ExportFormat::TextReport => "text-report",
            ExportFormat::StructuredReport => "structured-report",
        }
    }

    /// @ai:intent Human label shown in the format picker
    /// @ai:effects pure
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset => "CSV - Full Dataset",
            ExportFormat::ExecutiveSummary => "CSV - Executive Summary",
            ExportFormat::TextReport => "TXT - Insights Report",
            ExportFormat::StructuredReport => "JSON - Structured Data",
        }
    }

    /// @ai:effects pure
    pub fn description(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset => "Complete raw data for analysis",
            ExportFormat::ExecutiveSummary => "Key metrics and KPIs",
            ExportFormat::TextReport => "Formatted business report",
            ExportFormat::StructuredReport => "Machine-readable insights",
        }
    }

    /// @ai:intent Filename segment identifying the artifact kind
    /// @ai:effects pure
    pub fn kind(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset => "demand_data",
            ExportFormat::ExecutiveSummary => "executive_summary",
            ExportFormat::TextReport => "insights_report",
            ExportFormat::StructuredReport => "structured_data",
        }
    }

    /// @ai:effects pure
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset | ExportFormat::ExecutiveSummary => "csv",
            ExportFormat::TextReport => "txt",
            ExportFormat::StructuredReport => "json",
        }
    }

    /// @ai:effects pure
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::FullDataset | ExportFormat::ExecutiveSummary => "text/csv",
            ExportFormat::TextReport => "text/plain",
            ExportFormat::StructuredReport => "application/json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    /// @ai:intent Parse a selector code or descriptive name
    /// @ai:post unknown selectors yield ExportError::InvalidFormat carrying the input
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExportFormat::ALL
            .into_iter()
            .find(|format| format.code() == s || format.name() == s)
            .ok_or_else(|| ExportError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// @ai:intent Ordered (label, format) catalog for a format picker
/// @ai:effects pure
pub fn export_formats() -> Vec<(&'static str, ExportFormat)> {
    ExportFormat::ALL
        .into_iter()
        .map(|format| (format.label(), format))
        .collect()
}
