use crate::domain::model::{Cell, NormalizedRecord, COLUMNS};
use crate::utils::error::{EtlError, Result};

/// Header row plus one row per record. The header is written even when empty.
pub fn render(records: &[NormalizedRecord]) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record.cells().iter().map(cell_text))?;
    }

    writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))
}

fn cell_text(cell: &Cell<'_>) -> String {
    match cell {
        Cell::Text(s) => s.to_string(),
        Cell::Number(n) => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_only_when_empty() {
        let out = String::from_utf8(render(&[]).unwrap()).unwrap();
        assert_eq!(
            out,
            "productName,productKey,productId,productVendorId,categoryName,categoryValue,createdTime\n"
        );
    }

    #[test]
    fn test_rows_follow_column_order() {
        let record = NormalizedRecord {
            product_name: "Widget, large".to_string(),
            product_id: 7_i64.into(),
            category_value: "on".into(),
            ..Default::default()
        };
        let out = String::from_utf8(render(&[record]).unwrap()).unwrap();
        let second_line = out.lines().nth(1).unwrap();
        assert_eq!(second_line, "\"Widget, large\",,7,,,on,");
    }
}
