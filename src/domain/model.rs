use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// One raw catalog entry from the input document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub data: HashMap<String, Value>,
}

impl SourceRecord {
    /// Builds a record from a `rows` entry. Entries that are not objects carry no fields.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(obj) => Self {
                data: obj.into_iter().collect(),
            },
            _ => Self::default(),
        }
    }

    /// Looks up a field, treating `null` the same as a missing key.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|v| !v.is_null())
    }
}

/// A projected value that keeps numbers numeric, digit for digit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(Number),
}

impl FieldValue {
    pub fn empty() -> Self {
        FieldValue::Text(String::new())
    }
}

// Goes through `Value` so arbitrary precision numbers survive the round trip.
impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(FieldValue::Text(s)),
            Value::Number(n) => Ok(FieldValue::Number(n)),
            other => Err(de::Error::invalid_type(
                de::Unexpected::Other(&other.to_string()),
                &"a string or a number",
            )),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

/// Column names of the flattened schema, in output order.
pub const COLUMNS: [&str; 7] = [
    "productName",
    "productKey",
    "productId",
    "productVendorId",
    "categoryName",
    "categoryValue",
    "createdTime",
];

/// Fixed-schema product row produced by normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NormalizedRecord {
    pub product_name: String,
    pub product_key: String,
    pub product_id: FieldValue,
    pub product_vendor_id: FieldValue,
    pub category_name: String,
    pub category_value: FieldValue,
    pub created_time: String,
}

/// Borrowed view of a single cell, used by the tabular writers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell<'a> {
    Text(&'a str),
    Number(&'a Number),
}

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: u64 = 1 << 53;

/// The number as an `f64` when that loses nothing but float rounding.
///
/// Integers beyond 2^53 return `None` so callers can keep their digits as text.
pub fn exact_f64(n: &Number) -> Option<f64> {
    if let Some(i) = n.as_i64() {
        return (i.unsigned_abs() <= MAX_EXACT_INTEGER).then_some(i as f64);
    }
    if let Some(u) = n.as_u64() {
        return (u <= MAX_EXACT_INTEGER).then_some(u as f64);
    }
    if n.to_string().contains(['.', 'e', 'E']) {
        n.as_f64().filter(|f| f.is_finite())
    } else {
        None
    }
}

impl<'a> From<&'a FieldValue> for Cell<'a> {
    fn from(value: &'a FieldValue) -> Self {
        match value {
            FieldValue::Text(s) => Cell::Text(s),
            FieldValue::Number(n) => Cell::Number(n),
        }
    }
}

impl NormalizedRecord {
    /// Cells in [`COLUMNS`] order.
    pub fn cells(&self) -> [Cell<'_>; 7] {
        [
            Cell::Text(&self.product_name),
            Cell::Text(&self.product_key),
            Cell::from(&self.product_id),
            Cell::from(&self.product_vendor_id),
            Cell::Text(&self.category_name),
            Cell::from(&self.category_value),
            Cell::Text(&self.created_time),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Xlsx,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "xlsx",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }

    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Human readable name used in progress output.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "Excel",
            OutputFormat::Json => "JSON",
            OutputFormat::Csv => "CSV",
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            OutputFormat::Xlsx => "products.xlsx",
            OutputFormat::Json => "products_formatted.json",
            OutputFormat::Csv => "products.csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xlsx" | "excel" => Ok(OutputFormat::Xlsx),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!(
                "unknown output format '{}', expected one of: xlsx, json, csv",
                other
            )),
        }
    }
}

/// Where one artifact goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub format: OutputFormat,
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub records: Vec<NormalizedRecord>,
}
