use crate::adapters::DEFAULT_SHEET_NAME;
use crate::core::normalize::DEFAULT_ROWS_KEY;
use crate::core::timestamp::DisplayZone;
use crate::domain::model::{OutputFormat, OutputTarget};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

pub const DEFAULT_INPUT_PATH: &str = "response_new.json";

/// Export settings, loaded from TOML and then overridden from the command line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub transform: TransformConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: String,
    pub rows_key: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_PATH.to_string(),
            rows_key: DEFAULT_ROWS_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: String,
    pub formats: Vec<OutputFormat>,
    pub sheet_name: String,
    pub filenames: FilenameConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            formats: vec![OutputFormat::Xlsx, OutputFormat::Json],
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            filenames: FilenameConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilenameConfig {
    pub xlsx: Option<String>,
    pub json: Option<String>,
    pub csv: Option<String>,
}

impl FilenameConfig {
    pub fn get(&self, format: OutputFormat) -> &str {
        let configured = match format {
            OutputFormat::Xlsx => &self.xlsx,
            OutputFormat::Json => &self.json,
            OutputFormat::Csv => &self.csv,
        };
        configured.as_deref().unwrap_or(format.default_filename())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// "local" or an IANA zone name
    pub timezone: String,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            timezone: "local".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EtlError::ConfigError {
            message: format!("cannot read '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(input) = &cli.input {
            self.input.path = input.clone();
        }
        if let Some(rows_key) = &cli.rows_key {
            self.input.rows_key = rows_key.clone();
        }
        if let Some(dir) = &cli.output_dir {
            self.output.directory = dir.clone();
        }
        if !cli.formats.is_empty() {
            self.output.formats = cli.formats.clone();
        }
        if let Some(name) = &cli.sheet_name {
            self.output.sheet_name = name.clone();
        }
        if let Some(name) = &cli.xlsx_file {
            self.output.filenames.xlsx = Some(name.clone());
        }
        if let Some(name) = &cli.json_file {
            self.output.filenames.json = Some(name.clone());
        }
        if let Some(name) = &cli.csv_file {
            self.output.filenames.csv = Some(name.clone());
        }
        if let Some(tz) = &cli.timezone {
            self.transform.timezone = tz.clone();
        }
    }
}

impl Validate for ExportConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input.path", &self.input.path)?;
        validation::validate_non_empty_string("input.rows_key", &self.input.rows_key)?;
        validation::validate_path("output.directory", &self.output.directory)?;

        if self.output.formats.is_empty() {
            return Err(EtlError::MissingConfigError {
                field: "output.formats".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for format in &self.output.formats {
            if !seen.insert(*format) {
                return Err(EtlError::InvalidConfigValueError {
                    field: "output.formats".to_string(),
                    value: format.to_string(),
                    reason: "Format listed more than once".to_string(),
                });
            }
            let field = format!("output.filenames.{}", format);
            let filename = self.output.filenames.get(*format);
            validation::validate_path(&field, filename)?;
            validation::validate_file_extension(&field, filename, format.extension())?;
        }

        if self.output.formats.contains(&OutputFormat::Xlsx) {
            validation::validate_sheet_name("output.sheet_name", &self.output.sheet_name)?;
        }

        self.display_zone()?;
        Ok(())
    }
}

impl ConfigProvider for ExportConfig {
    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn rows_key(&self) -> &str {
        &self.input.rows_key
    }

    fn output_targets(&self) -> Vec<OutputTarget> {
        self.output
            .formats
            .iter()
            .map(|format| OutputTarget {
                format: *format,
                path: Path::new(&self.output.directory)
                    .join(self.output.filenames.get(*format))
                    .to_string_lossy()
                    .into_owned(),
            })
            .collect()
    }

    fn sheet_name(&self) -> &str {
        &self.output.sheet_name
    }

    fn display_zone(&self) -> Result<DisplayZone> {
        self.transform
            .timezone
            .parse::<DisplayZone>()
            .map_err(|reason| EtlError::InvalidConfigValueError {
                field: "transform.timezone".to_string(),
                value: self.transform.timezone.clone(),
                reason,
            })
    }
}
