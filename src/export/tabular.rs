//! @ai:module:intent Raw dataset export as CSV
//! @ai:module:layer infrastructure
//! @ai:module:public_api TabularExporter
//! @ai:module:stateless true

use crate::error::{ExportError, Result};
use crate::export::types::{ExportBuilder, ExportInput};
use crate::model::{DemandRecord, DEMAND_COLUMNS};
use csv::{Terminator, Writer, WriterBuilder};
use std::io;

/// @ai:intent Serializes the full demand dataset, one row per record
pub struct TabularExporter;

impl TabularExporter {
    /// @ai:intent Create a new tabular exporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Write records as CSV with a header row and no index column
    /// @ai:post an empty slice yields the header line only
    /// @ai:effects pure
    pub fn export(records: &[DemandRecord]) -> Result<String> {
        // The header is written by hand so it survives an empty dataset.
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(DEMAND_COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }

        finish(writer)
    }
}

/// @ai:intent Flush an in-memory CSV writer and return its text
/// @ai:effects pure
pub(crate) fn finish(mut writer: Writer<Vec<u8>>) -> Result<String> {
    writer.flush()?;
    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(io::Error::new(e.error().kind(), e.to_string())))?;
    Ok(String::from_utf8(bytes)?)
}

impl Default for TabularExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBuilder for TabularExporter {
    fn build(&self, input: &ExportInput<'_>) -> Result<String> {
        tracing::debug!(rows = input.dataset.len(), "exporting full dataset");
        Self::export(input.dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::{date, sample_dataset};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_export_preserves_row_order() {
        let records = vec![
            DemandRecord::new("OutletA", "Biryani", date(2024, 1, 1), 100),
            DemandRecord::new("OutletA", "Biryani", date(2024, 1, 2), 150),
            DemandRecord::new("OutletB", "Dosa", date(2024, 1, 1), 80),
        ];

        let csv = TabularExporter::export(&records).unwrap();
        assert_eq!(
            csv,
            "outlet,dish,date,predicted_demand\n\
             OutletA,Biryani,2024-01-01,100\n\
             OutletA,Biryani,2024-01-02,150\n\
             OutletB,Dosa,2024-01-01,80\n"
        );
    }

    #[test]
    fn test_empty_dataset_is_header_only() {
        let csv = TabularExporter::export(&[]).unwrap();
        assert_eq!(csv, "outlet,dish,date,predicted_demand\n");
    }

    #[test]
    fn test_row_count_matches_dataset() {
        let records = sample_dataset();
        let csv = TabularExporter::export(&records).unwrap();
        assert_eq!(csv.lines().count() - 1, records.len());
    }

    #[test]
    fn test_fields_with_commas_are_quoted() {
        let records = vec![DemandRecord::new(
            "Hitech City, Block A",
            "Idli",
            date(2024, 1, 1),
            42,
        )];

        let csv = TabularExporter::export(&records).unwrap();
        assert!(csv.contains("\"Hitech City, Block A\",Idli,2024-01-01,42"));

        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let parsed: Vec<DemandRecord> = reader.deserialize().collect::<std::result::Result<_, _>>().unwrap();
        assert_eq!(parsed, records);
    }
}
