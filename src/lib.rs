//! @ai:module:intent Demand analytics export library
//! @ai:module:layer application
//! @ai:module:public_api config, error, export, model, stats
//!
//! Turns a demand dataset and its precomputed insights into downloadable
//! artifacts: the raw CSV, an executive summary CSV, a plain-text report and
//! a structured JSON report.
//!
//! ```rust,no_run
//! use kkcg_export::{ExportConfig, ExportDispatcher, ExportFormat, ExportInput};
//! # fn run(dataset: Vec<kkcg_export::DemandRecord>, insights: kkcg_export::InsightsRecord) -> kkcg_export::Result<()> {
//! let dispatcher = ExportDispatcher::new(&ExportConfig::default());
//! let input = ExportInput::new(&dataset, &insights);
//! let payload = dispatcher.generate(ExportFormat::StructuredReport, &input)?;
//! println!("{} ({})", payload.filename, payload.mime_type);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod stats;

pub use config::ExportConfig;
pub use error::{ExportError, Result};
pub use export::{
    create_download_link, data_uri, export_formats, ExportDispatcher, ExportFormat, ExportInput,
    ExportPayload,
};
pub use model::{DateRange, DemandRecord, DishDemand, InsightsRecord, OutletLeaderboard};
pub use stats::{DemandAggregator, DemandAggregatorTrait, GroupStats};
