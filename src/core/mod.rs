pub mod etl;
pub mod normalize;
pub mod pipeline;
pub mod summary;
pub mod timestamp;

pub use crate::domain::model::{NormalizedRecord, SourceRecord, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
