use crate::core::timestamp::DisplayZone;
use crate::domain::model::{NormalizedRecord, OutputTarget, SourceRecord, TransformResult};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn rows_key(&self) -> &str;
    fn output_targets(&self) -> Vec<OutputTarget>;
    fn sheet_name(&self) -> &str;
    fn display_zone(&self) -> Result<DisplayZone>;
}

pub trait Pipeline {
    fn extract(&self) -> Result<Vec<SourceRecord>>;
    fn transform(&self, data: Vec<SourceRecord>) -> Result<TransformResult>;
    /// Writes every configured artifact and returns the paths written, in order.
    fn load(&self, records: &[NormalizedRecord]) -> Result<Vec<OutputTarget>>;
}
