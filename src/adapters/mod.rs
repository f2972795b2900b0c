// Adapters layer: renderers that turn normalized products into output artifacts.

pub mod csv_writer;
pub mod json_writer;
pub mod xlsx_writer;

use crate::domain::model::{NormalizedRecord, OutputFormat};
use crate::utils::error::Result;

pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

#[derive(Debug, Clone)]
pub struct SerializeOptions {
    pub sheet_name: String,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
        }
    }
}

/// Renders `records` in `format`. Writing the bytes is left to the caller's storage.
pub fn serialize(
    records: &[NormalizedRecord],
    format: OutputFormat,
    options: &SerializeOptions,
) -> Result<Vec<u8>> {
    tracing::debug!("Rendering {} records as {}", records.len(), format);
    match format {
        OutputFormat::Xlsx => xlsx_writer::render(records, &options.sheet_name),
        OutputFormat::Json => json_writer::render(records),
        OutputFormat::Csv => csv_writer::render(records),
    }
}
