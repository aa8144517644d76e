//! @ai:module:intent Export builders, format dispatch and payload encoding
//! @ai:module:layer infrastructure
//! @ai:module:public_api ExportDispatcher, ExportFormat, ExportInput, ExportPayload, TabularExporter, SummaryExporter, TextReportBuilder, StructuredReportBuilder

pub mod dispatcher;
pub mod display;
pub mod encoder;
pub mod format;
pub mod structured_report;
pub mod summary;
pub mod tabular;
pub mod text_report;
pub mod types;

pub use dispatcher::ExportDispatcher;
pub use encoder::{create_download_link, data_uri};
pub use format::{export_formats, ExportFormat};
pub use structured_report::{StructuredReport, StructuredReportBuilder};
pub use summary::SummaryExporter;
pub use tabular::TabularExporter;
pub use text_report::TextReportBuilder;
pub use types::{ExportBuilder, ExportInput, ExportPayload};
