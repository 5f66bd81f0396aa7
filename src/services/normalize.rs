//! Response-shape normalization.
//!
//! The attendance service has answered with several envelope shapes across
//! versions. Shape selection happens here once, in fixed priority order, and
//! everything downstream only ever sees the canonical [`PageResult`].

use crate::domain::{AttendanceRecord, FetchError, PageResult, Result};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

/// Envelope metadata, every field optional so any object deserializes and
/// the shape decision is made in one place afterwards.
#[derive(Debug, Deserialize)]
struct EnvelopeDto {
    #[serde(default, rename = "pageIndex")]
    page_index: Option<u32>,
    #[serde(default, rename = "pageSize")]
    page_size: Option<u32>,
    #[serde(default, rename = "totalPages")]
    total_pages: Option<u32>,
    #[serde(default, rename = "totalRecords")]
    total_records: Option<u64>,
    #[serde(default)]
    succeeded: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

/// Wire record. Older service versions spell the timestamp fields in
/// lowercase; the alias table maps both spellings onto the canonical names.
#[derive(Debug, Deserialize)]
struct RecordDto {
    #[serde(default)]
    manv: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default, rename = "firstIn", alias = "firstin")]
    first_in: Option<String>,
    #[serde(default, rename = "lastOut", alias = "lastout")]
    last_out: Option<String>,
}

impl RecordDto {
    fn into_record(self) -> AttendanceRecord {
        AttendanceRecord {
            employee_id: self.manv.unwrap_or_default(),
            employee_name: self.name.unwrap_or_default(),
            date: self.date.as_deref().and_then(parse_date),
            first_in: self.first_in.as_deref().and_then(parse_timestamp),
            last_out: self.last_out.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Normalize a raw response body into the canonical page.
///
/// Recognized shapes, tried in order: structured success envelope, bare data
/// envelope, raw record array, structured failure envelope. Anything else is
/// [`FetchError::MalformedResponse`].
pub fn normalize_page(body: Value, requested_page_size: u32) -> Result<PageResult> {
    match body {
        Value::Object(_) => {
            let envelope: EnvelopeDto = serde_json::from_value(body)
                .map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
            normalize_envelope(envelope, requested_page_size)
        }
        // Legacy shape: the body itself is the record list.
        Value::Array(_) => {
            let items = parse_records(body)?;
            Ok(single_page(items, requested_page_size))
        }
        other => Err(FetchError::MalformedResponse(format!(
            "unexpected {} body",
            json_type(&other)
        ))),
    }
}

fn normalize_envelope(envelope: EnvelopeDto, requested_page_size: u32) -> Result<PageResult> {
    let data_is_array = matches!(envelope.data, Some(Value::Array(_)));

    match envelope.succeeded {
        Some(true) | None if data_is_array => {
            let items = parse_records(envelope.data.unwrap_or_default())?;
            let total_records = envelope.total_records.unwrap_or(items.len() as u64);
            let mut page = PageResult {
                page_index: envelope.page_index.unwrap_or(1).max(1),
                page_size: envelope
                    .page_size
                    .filter(|&size| size > 0)
                    .unwrap_or(requested_page_size),
                total_pages: envelope.total_pages.unwrap_or(1),
                total_records,
                items,
            };
            clamp_to_page_size(&mut page);
            Ok(page)
        }
        Some(false) => Err(FetchError::Service(
            envelope
                .message
                .unwrap_or_else(|| "API trả về lỗi".to_string()),
        )),
        _ => Err(FetchError::MalformedResponse(
            "no data array in response envelope".into(),
        )),
    }
}

fn parse_records(data: Value) -> Result<Vec<AttendanceRecord>> {
    let records: Vec<RecordDto> =
        serde_json::from_value(data).map_err(|e| FetchError::MalformedResponse(e.to_string()))?;
    Ok(records.into_iter().map(RecordDto::into_record).collect())
}

fn single_page(items: Vec<AttendanceRecord>, requested_page_size: u32) -> PageResult {
    let mut page = PageResult {
        page_index: 1,
        page_size: requested_page_size,
        total_pages: 1,
        total_records: items.len() as u64,
        items,
    };
    clamp_to_page_size(&mut page);
    page
}

// Upholds `items.len() <= page_size` even against a misbehaving server.
fn clamp_to_page_size(page: &mut PageResult) {
    let limit = page.page_size as usize;
    if page.items.len() > limit {
        tracing::warn!(
            returned = page.items.len(),
            page_size = page.page_size,
            "server returned more rows than the page size, truncating"
        );
        page.items.truncate(limit);
    }
}

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Lenient timestamp parsing. Absent, empty, or unparseable values all mean
/// "no recorded event" rather than a hard error.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    for format in TIMESTAMP_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed);
        }
    }
    chrono::DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.naive_local())
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_timestamp(raw).map(|dt| dt.date()))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records_json() -> Value {
        json!([
            {
                "manv": "NV001",
                "name": "Nguyễn Văn A",
                "date": "2025-06-02",
                "firstIn": "2025-06-02T07:12:00",
                "lastOut": "2025-06-02T17:01:30"
            },
            {
                "manv": "NV002",
                "name": "Trần Thị B",
                "date": "2025-06-02",
                "firstIn": null,
                "lastOut": ""
            }
        ])
    }

    #[test]
    fn test_structured_success_uses_metadata_verbatim() {
        let body = json!({
            "pageIndex": 2,
            "pageSize": 15,
            "totalPages": 3,
            "totalRecords": 42,
            "succeeded": true,
            "message": null,
            "errors": null,
            "data": records_json()
        });

        let page = normalize_page(body, 15).unwrap();
        assert_eq!(page.page_index, 2);
        assert_eq!(page.page_size, 15);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_records, 42);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].employee_id, "NV001");
        assert_eq!(page.items[0].employee_name, "Nguyễn Văn A");
        assert!(page.items[0].first_in.is_some());
        assert!(page.items[1].first_in.is_none());
        assert!(page.items[1].last_out.is_none());
    }

    #[test]
    fn test_bare_data_defaults_metadata() {
        let body = json!({ "data": records_json() });

        let page = normalize_page(body, 15).unwrap();
        assert_eq!(page.page_index, 1);
        assert_eq!(page.page_size, 15);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_bare_data_keeps_partial_metadata() {
        let body = json!({ "data": records_json(), "totalRecords": 42, "totalPages": 3 });

        let page = normalize_page(body, 15).unwrap();
        assert_eq!(page.page_index, 1);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.total_records, 42);
    }

    #[test]
    fn test_raw_array_wraps_single_page() {
        let page = normalize_page(records_json(), 15).unwrap();
        assert_eq!(page.page_index, 1);
        assert_eq!(page.page_size, 15);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_records, 2);
        assert_eq!(page.items.len(), 2);
    }

    #[test]
    fn test_equivalent_records_normalize_identically_across_shapes() {
        let structured = json!({
            "pageIndex": 1,
            "pageSize": 15,
            "totalPages": 1,
            "totalRecords": 2,
            "succeeded": true,
            "data": records_json()
        });
        let bare = json!({ "data": records_json() });

        let from_structured = normalize_page(structured, 15).unwrap();
        let from_bare = normalize_page(bare, 15).unwrap();
        let from_array = normalize_page(records_json(), 15).unwrap();

        assert_eq!(from_structured, from_bare);
        assert_eq!(from_bare, from_array);
    }

    #[test]
    fn test_structured_failure_surfaces_message() {
        let body = json!({ "succeeded": false, "message": "Phòng ban không tồn tại" });

        match normalize_page(body, 15) {
            Err(FetchError::Service(msg)) => assert_eq!(msg, "Phòng ban không tồn tại"),
            other => panic!("expected service error, got {:?}", other),
        }
    }

    #[test]
    fn test_structured_failure_without_message_gets_generic_text() {
        let body = json!({ "succeeded": false });
        assert!(matches!(
            normalize_page(body, 15),
            Err(FetchError::Service(_))
        ));
    }

    #[test]
    fn test_explicit_failure_wins_over_data_array() {
        // A failure envelope may still carry an (empty) data array.
        let body = json!({ "succeeded": false, "message": "lỗi", "data": [] });
        assert!(matches!(
            normalize_page(body, 15),
            Err(FetchError::Service(_))
        ));
    }

    #[test]
    fn test_unrecognized_bodies_are_malformed() {
        for body in [json!("oops"), json!(42), json!(null), json!(true)] {
            assert!(matches!(
                normalize_page(body, 15),
                Err(FetchError::MalformedResponse(_))
            ));
        }
    }

    #[test]
    fn test_object_without_data_array_is_malformed() {
        assert!(matches!(
            normalize_page(json!({ "succeeded": true }), 15),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            normalize_page(json!({ "message": "hi" }), 15),
            Err(FetchError::MalformedResponse(_))
        ));
        assert!(matches!(
            normalize_page(json!({ "succeeded": true, "data": "not-a-list" }), 15),
            Err(FetchError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_lowercase_field_aliases() {
        let body = json!([
            { "manv": "NV003", "name": "Lê Văn C", "firstin": "2025-06-02 07:45:00", "lastout": "2025-06-02 16:00:00" }
        ]);

        let page = normalize_page(body, 15).unwrap();
        let record = &page.items[0];
        assert!(record.first_in.is_some());
        assert!(record.last_out.is_some());
        assert!(record.is_late_check_in());
        assert!(record.is_early_check_out());
    }

    #[test]
    fn test_empty_page_is_tolerated() {
        let body = json!({
            "pageIndex": 1,
            "pageSize": 15,
            "totalPages": 0,
            "totalRecords": 0,
            "succeeded": true,
            "data": []
        });

        let page = normalize_page(body, 15).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_records, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_oversized_page_is_truncated() {
        let rows: Vec<Value> = (0..4)
            .map(|i| json!({ "manv": format!("NV{:03}", i), "name": "X" }))
            .collect();
        let body = json!({ "succeeded": true, "pageSize": 2, "data": rows });

        let page = normalize_page(body, 2).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.page_size, 2);
    }

    #[test]
    fn test_zero_page_index_is_clamped() {
        let body = json!({ "succeeded": true, "pageIndex": 0, "data": [] });
        assert_eq!(normalize_page(body, 15).unwrap().page_index, 1);
    }

    #[test]
    fn test_unparseable_timestamp_means_no_event() {
        let body = json!([{ "manv": "NV004", "name": "X", "firstIn": "chưa có dữ liệu" }]);
        let page = normalize_page(body, 15).unwrap();
        assert!(page.items[0].first_in.is_none());
    }

    #[test]
    fn test_timestamp_formats() {
        for raw in [
            "2025-06-02T07:12:00",
            "2025-06-02T07:12:00.123",
            "2025-06-02 07:12:00",
            "2025-06-02T07:12:00+07:00",
        ] {
            assert!(parse_timestamp(raw).is_some(), "failed on {}", raw);
        }
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("   ").is_none());
    }

    #[test]
    fn test_date_from_datetime_string() {
        assert_eq!(
            parse_date("2025-06-02T07:12:00"),
            NaiveDate::from_ymd_opt(2025, 6, 2)
        );
        assert_eq!(parse_date("2025-06-02"), NaiveDate::from_ymd_opt(2025, 6, 2));
    }
}
