use crate::adapters::{serialize, SerializeOptions};
use crate::core::normalize::{normalize, parse_document};
use crate::domain::model::{NormalizedRecord, OutputTarget, SourceRecord, TransformResult};
use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
use crate::utils::error::Result;

/// Reads the product export, flattens it and writes every configured artifact.
pub struct ProductPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> ProductPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ProductPipeline<S, C> {
    fn extract(&self) -> Result<Vec<SourceRecord>> {
        let path = self.config.input_path();
        tracing::debug!("Reading products from: {}", path);

        let bytes = self.storage.read_file(path)?;
        let records = parse_document(&bytes, self.config.rows_key())?;

        tracing::debug!("Parsed {} rows ({} bytes)", records.len(), bytes.len());
        Ok(records)
    }

    fn transform(&self, data: Vec<SourceRecord>) -> Result<TransformResult> {
        let zone = self.config.display_zone()?;
        tracing::debug!("Formatting timestamps in zone: {}", zone);

        Ok(TransformResult {
            records: normalize(&data, zone),
        })
    }

    fn load(&self, records: &[NormalizedRecord]) -> Result<Vec<OutputTarget>> {
        let options = SerializeOptions {
            sheet_name: self.config.sheet_name().to_string(),
        };

        let mut written = Vec::new();
        for target in self.config.output_targets() {
            let bytes = serialize(records, target.format, &options)?;
            self.storage.write_file(&target.path, &bytes)?;

            tracing::info!("{} file saved to: {}", target.format.label(), target.path);
            written.push(target);
        }

        Ok(written)
    }
}
