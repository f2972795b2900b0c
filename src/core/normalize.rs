use crate::core::timestamp::{format_raw_timestamp, DisplayZone};
use crate::domain::model::{FieldValue, NormalizedRecord, SourceRecord};
use crate::utils::error::{EtlError, Result};
use serde_json::Value;

pub const DEFAULT_ROWS_KEY: &str = "rows";

/// Parses the input document and pulls the records out of `rows_key`.
///
/// A missing or `null` rows entry is an empty catalog. Anything that is not a
/// JSON object at the top level, or a rows entry that is not an array, is a
/// parse error.
pub fn parse_document(bytes: &[u8], rows_key: &str) -> Result<Vec<SourceRecord>> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| EtlError::parse(format!("invalid JSON: {}", e)))?;

    let mut top = match document {
        Value::Object(top) => top,
        other => {
            return Err(EtlError::parse(format!(
                "expected a JSON object at the top level, found {}",
                json_kind(&other)
            )))
        }
    };

    match top.remove(rows_key) {
        None | Some(Value::Null) => {
            tracing::debug!("No '{}' entry in input, treating as empty", rows_key);
            Ok(Vec::new())
        }
        Some(Value::Array(rows)) => Ok(rows.into_iter().map(SourceRecord::from_value).collect()),
        Some(other) => Err(EtlError::parse(format!(
            "expected '{}' to be an array, found {}",
            rows_key,
            json_kind(&other)
        ))),
    }
}

/// Flattens every record. Output has the same length and order as the input.
pub fn normalize(records: &[SourceRecord], zone: DisplayZone) -> Vec<NormalizedRecord> {
    records.iter().map(|r| normalize_record(r, zone)).collect()
}

pub fn normalize_record(record: &SourceRecord, zone: DisplayZone) -> NormalizedRecord {
    NormalizedRecord {
        product_name: text_field(record, "productName"),
        product_key: text_field(record, "productKey"),
        product_id: value_field(record, "id"),
        product_vendor_id: value_field(record, "vendorId"),
        category_name: text_field(record, "categoryName"),
        category_value: value_field(record, "itemValue"),
        created_time: format_raw_timestamp(record.field("tsCreateTime"), zone),
    }
}

fn text_field(record: &SourceRecord, key: &str) -> String {
    match record.field(key) {
        None => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn value_field(record: &SourceRecord, key: &str) -> FieldValue {
    match record.field(key) {
        None => FieldValue::empty(),
        Some(Value::String(s)) => FieldValue::Text(s.clone()),
        Some(Value::Number(n)) => FieldValue::Number(n.clone()),
        Some(other) => FieldValue::Text(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const UTC: DisplayZone = DisplayZone::Named(chrono_tz::UTC);

    fn records(value: Value) -> Vec<SourceRecord> {
        parse_document(value.to_string().as_bytes(), DEFAULT_ROWS_KEY).unwrap()
    }

    #[test]
    fn test_widget_scenario() {
        let input = records(json!({
            "rows": [{"productName": "Widget", "id": 7, "tsCreateTime": 1_700_000_000_000_i64}]
        }));
        let out = normalize(&input, UTC);

        assert_eq!(out.len(), 1);
        let widget = &out[0];
        assert_eq!(widget.product_name, "Widget");
        assert_eq!(widget.product_key, "");
        assert_eq!(widget.product_id, FieldValue::from(7_i64));
        assert_eq!(widget.product_vendor_id, FieldValue::empty());
        assert_eq!(widget.category_name, "");
        assert_eq!(widget.category_value, FieldValue::empty());
        assert_eq!(widget.created_time, "2023-11-14 22:13:20");
    }

    #[test]
    fn test_all_fields_mapped() {
        let input = records(json!({"rows": [{
            "productName": "Sensor",
            "productKey": "p1Ab",
            "id": "42",
            "vendorId": 1001,
            "categoryName": "温度",
            "itemValue": 3.5,
            "tsCreateTime": 1_700_000_000_000_i64,
            "unrelated": true
        }]}));
        let out = normalize(&input, UTC);

        assert_eq!(out[0].product_key, "p1Ab");
        assert_eq!(out[0].product_id, FieldValue::from("42"));
        assert_eq!(out[0].product_vendor_id, FieldValue::from(1001_i64));
        assert_eq!(out[0].category_name, "温度");
        assert_eq!(
            out[0].category_value,
            FieldValue::Number(serde_json::Number::from_f64(3.5).unwrap())
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let out = normalize(&records(json!({"rows": [{}, {"id": null}, 5]})), UTC);

        assert_eq!(out.len(), 3);
        for record in &out {
            assert_eq!(record, &NormalizedRecord::default());
            assert_eq!(record.created_time, "");
        }
    }

    #[test]
    fn test_length_and_order_preserved() {
        let rows: Vec<Value> = (0..50).map(|i| json!({"id": i, "productName": format!("p{}", i)})).collect();
        let out = normalize(&records(json!({ "rows": rows })), UTC);

        assert_eq!(out.len(), 50);
        for (i, record) in out.iter().enumerate() {
            assert_eq!(record.product_id, FieldValue::from(i as i64));
            assert_eq!(record.product_name, format!("p{}", i));
        }
    }

    #[test]
    fn test_non_string_text_fields_use_json_text() {
        let out = normalize(&records(json!({"rows": [{"productName": 12, "productKey": false}]})), UTC);
        assert_eq!(out[0].product_name, "12");
        assert_eq!(out[0].product_key, "false");
    }

    #[test]
    fn test_fractional_and_negative_timestamps() {
        let parsed = parse_document(
            br#"{"rows":[{"tsCreateTime":0.5},{"tsCreateTime":-1000},{"tsCreateTime":0}]}"#,
            DEFAULT_ROWS_KEY,
        )
        .unwrap();
        let out = normalize(&parsed, UTC);

        assert_eq!(out[0].created_time, "1970-01-01 00:00:00");
        assert_eq!(out[1].created_time, "1969-12-31 23:59:59");
        assert_eq!(out[2].created_time, "");
    }

    #[test]
    fn test_wide_ids_round_trip_through_json() {
        let parsed = parse_document(
            br#"{"rows":[{"id":123456789012345678901234,"itemValue":18446744073709551616}]}"#,
            DEFAULT_ROWS_KEY,
        )
        .unwrap();
        let out = normalize(&parsed, UTC);

        let bytes = crate::adapters::json_writer::render(&out).unwrap();
        let text = String::from_utf8(bytes.clone()).unwrap();
        assert!(text.contains(r#""productId": 123456789012345678901234"#));
        assert!(text.contains(r#""categoryValue": 18446744073709551616"#));
        assert_eq!(crate::adapters::json_writer::parse(&bytes).unwrap(), out);
    }

    #[test]
    fn test_empty_and_missing_rows() {
        assert!(records(json!({"rows": []})).is_empty());
        assert!(records(json!({"total": 0})).is_empty());
        assert!(records(json!({"rows": null})).is_empty());
    }

    #[test]
    fn test_custom_rows_key() {
        let parsed = parse_document(br#"{"data": [{"id": 1}]}"#, "data").unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_parse_errors() {
        let cases: [&[u8]; 4] = [b"{not json", b"[1, 2]", br#"{"rows": {"id": 1}}"#, b""];
        for bad in cases {
            let err = parse_document(bad, DEFAULT_ROWS_KEY).unwrap_err();
            assert!(matches!(err, EtlError::ParseError { .. }), "{:?}", err);
        }
    }
}
