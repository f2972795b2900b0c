pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::ExportConfig};
pub use crate::core::{
    etl::{EtlEngine, RunReport},
    normalize::{normalize, parse_document},
    pipeline::ProductPipeline,
    timestamp::{format_timestamp, DisplayZone},
};
pub use domain::model::{FieldValue, NormalizedRecord, OutputFormat, OutputTarget, SourceRecord};
pub use utils::error::{EtlError, Result};
