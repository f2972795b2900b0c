use crate::domain::model::NormalizedRecord;
use crate::utils::error::Result;

/// Pretty-printed JSON array, two-space indent, non-ASCII left unescaped.
pub fn render(records: &[NormalizedRecord]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(records)?)
}

/// Reads back a document produced by [`render`].
pub fn parse(bytes: &[u8]) -> Result<Vec<NormalizedRecord>> {
    Ok(serde_json::from_slice(bytes)?)
}
