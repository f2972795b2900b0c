pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

/// Command line arguments. Anything given here overrides the configuration file.
#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "product-export")]
#[command(about = "Flatten a product catalog JSON export into Excel and JSON files")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input JSON document with a top-level "rows" array
    #[arg(short, long)]
    pub input: Option<String>,

    /// Key holding the product rows in the input document
    #[arg(long)]
    pub rows_key: Option<String>,

    /// Directory the output files are written to
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Output formats to write
    #[arg(long, value_delimiter = ',')]
    pub formats: Vec<OutputFormat>,

    #[arg(long)]
    pub xlsx_file: Option<String>,

    #[arg(long)]
    pub json_file: Option<String>,

    #[arg(long)]
    pub csv_file: Option<String>,

    /// Worksheet name for the Excel output
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// Time zone for createdTime: "local" or an IANA name such as Asia/Shanghai
    #[arg(long)]
    pub timezone: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Log process CPU and memory usage per stage
    #[arg(long)]
    pub monitor: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
