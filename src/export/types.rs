//! @ai:module:intent Inputs and outputs shared by every export builder
//! @ai:module:layer domain
//! @ai:module:public_api ExportInput, ExportPayload, ExportBuilder

use crate::error::Result;
use crate::export::encoder;
use crate::model::{DemandRecord, InsightsRecord};
use chrono::{Local, NaiveDateTime};

/// @ai:intent Borrowed bundle of everything a builder may read
#[derive(Debug, Clone, Copy)]
pub struct ExportInput<'a> {
    pub dataset: &'a [DemandRecord],
    pub insights: &'a InsightsRecord,
    pub insight_texts: &'a [String],
    pub recommendations: &'a [String],
    /// Timestamp stamped into report bodies and filenames
    pub generated_at: NaiveDateTime,
}

impl<'a> ExportInput<'a> {
    /// @ai:intent Create an input stamped with the current local time
    /// @ai:effects time:read
    pub fn new(dataset: &'a [DemandRecord], insights: &'a InsightsRecord) -> Self {
        Self {
            dataset,
            insights,
            insight_texts: &[],
            recommendations: &[],
            generated_at: Local::now().naive_local(),
        }
    }

    /// @ai:effects pure
    pub fn with_insight_texts(mut self, texts: &'a [String]) -> Self {
        self.insight_texts = texts;
        self
    }

    /// @ai:effects pure
    pub fn with_recommendations(mut self, recommendations: &'a [String]) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// @ai:intent Pin the generation timestamp
    /// @ai:effects pure
    pub fn at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = generated_at;
        self
    }
}

/// @ai:intent A finished export artifact ready for download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    pub content: String,
    pub filename: String,
    pub mime_type: &'static str,
}

impl ExportPayload {
    /// @ai:intent Encode the payload as a base64 data URI
    /// @ai:effects pure
    pub fn data_uri(&self) -> String {
        encoder::data_uri(&self.content, self.mime_type)
    }

    /// @ai:intent Build an HTML anchor that downloads this payload
    /// @ai:effects pure
    pub fn download_link(&self) -> String {
        encoder::create_download_link(&self.content, &self.filename, self.mime_type)
    }
}

/// @ai:intent Trait implemented by every format builder
pub trait ExportBuilder: Send + Sync {
    /// @ai:intent Render the payload body for the given input
    fn build(&self, input: &ExportInput<'_>) -> Result<String>;
}
