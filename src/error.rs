//! @ai:module:intent Define error types for export generation
//! @ai:module:layer domain
//! @ai:module:public_api ExportError, Result
//! @ai:module:stateless true

use thiserror::Error;

/// @ai:intent Unified error type for all export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Unknown export format: {0}")]
    InvalidFormat(String),

    #[error("No champion dish recorded for outlet {outlet}")]
    MissingChampion { outlet: String },

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report formatting error: {0}")]
    Format(#[from] std::fmt::Error),

    #[error("Export produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_format_names_selector() {
        let err = ExportError::InvalidFormat("xml_insights".to_string());
        assert_eq!(err.to_string(), "Unknown export format: xml_insights");
    }

    #[test]
    fn test_missing_champion_names_outlet() {
        let err = ExportError::MissingChampion {
            outlet: "Madhapur".to_string(),
        };
        assert!(err.to_string().contains("Madhapur"));
    }
}
