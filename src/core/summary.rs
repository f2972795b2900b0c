//! Run summary printed by the binary.

use std::io::Write;

use crate::domain::model::{NormalizedRecord, OutputTarget};
use crate::utils::error::Result;

/// Count line and a pretty-printed sample of the first record.
pub fn write_overview<W: Write>(out: &mut W, records: &[NormalizedRecord]) -> Result<()> {
    writeln!(out, "Processed {} products", records.len())?;
    writeln!(out, "\nSample product data:")?;
    if let Some(sample) = records.first() {
        writeln!(out, "{}", serde_json::to_string_pretty(sample)?)?;
    }
    Ok(())
}

/// One line per written artifact, then the closing total.
pub fn write_outputs<W: Write>(
    out: &mut W,
    outputs: &[OutputTarget],
    record_count: usize,
) -> Result<()> {
    for target in outputs {
        writeln!(out, "{} file saved to: {}", target.format.label(), target.path)?;
    }
    writeln!(out, "\nTotal products processed: {}", record_count)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::OutputFormat;

    #[test]
    fn test_overview_with_sample() {
        let records = vec![NormalizedRecord {
            product_name: "Widget".to_string(),
            product_id: 7_i64.into(),
            ..Default::default()
        }];
        let mut out = Vec::new();
        write_overview(&mut out, &records).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Processed 1 products\n\nSample product data:\n{\n"));
        assert!(text.contains("  \"productName\": \"Widget\",\n"));
        assert!(text.ends_with("}\n"));
    }

    #[test]
    fn test_overview_without_records() {
        let mut out = Vec::new();
        write_overview(&mut out, &[]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Processed 0 products\n\nSample product data:\n"
        );
    }

    #[test]
    fn test_outputs_and_total() {
        let outputs = vec![
            OutputTarget {
                format: OutputFormat::Xlsx,
                path: "products.xlsx".to_string(),
            },
            OutputTarget {
                format: OutputFormat::Json,
                path: "products_formatted.json".to_string(),
            },
        ];
        let mut out = Vec::new();
        write_outputs(&mut out, &outputs, 2).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Excel file saved to: products.xlsx\n\
             JSON file saved to: products_formatted.json\n\
             \n\
             Total products processed: 2\n"
        );
    }
}
