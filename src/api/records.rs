//! Records Endpoints
//!
//! CRUD over the user's income/expense records.

use crate::api::client::{ApiClient, ApiError};

/// Income vs. expense, as the backend spells it on the wire
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Income,
    Expense,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

/// A stored record as returned by the API
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Record {
    pub id: u32,
    pub amount: f64,
    pub category: String,
    /// Pre-formatted date string from the backend ("YYYY-MM-DD HH:MM")
    pub date: String,
    #[serde(rename = "timeStamp")]
    pub timestamp_ms: i64,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(default)]
    pub note: Option<String>,
}

/// Payload for creating or updating a record
#[derive(Clone, Debug, serde::Serialize)]
pub struct RecordDraft {
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: RecordKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Epoch milliseconds; the backend falls back to "now" when omitted
    #[serde(rename = "timeStamp", skip_serializing_if = "Option::is_none")]
    pub timestamp_ms: Option<i64>,
}

#[derive(Debug, serde::Deserialize)]
struct Ack {
    #[allow(dead_code)]
    message: String,
}

/// Fetch all records for the signed-in user
pub async fn fetch_records(client: &ApiClient) -> Result<Vec<Record>, ApiError> {
    client.get_json("/records").await
}

/// Create a new record
pub async fn add_record(client: &ApiClient, draft: &RecordDraft) -> Result<(), ApiError> {
    client.post_json::<_, Ack>("/records", draft).await.map(|_| ())
}

/// Update an existing record
pub async fn update_record(client: &ApiClient, id: u32, draft: &RecordDraft) -> Result<(), ApiError> {
    client
        .put_json::<_, Ack>(&format!("/records/{}", id), draft)
        .await
        .map(|_| ())
}

/// Delete a record
pub async fn delete_record(client: &ApiClient, id: u32) -> Result<(), ApiError> {
    client.delete(&format!("/records/{}", id)).await
}

#[derive(Debug, serde::Deserialize)]
struct ImportResult {
    #[allow(dead_code)]
    message: String,
    imported_records: u32,
}

/// Upload an Excel export (.xls/.xlsx) for the backend to parse and import,
/// returning how many rows made it in. Sent as multipart form data under the
/// `file` field.
pub async fn import_records(client: &ApiClient, file: &web_sys::File) -> Result<u32, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|_| ApiError::Build("could not create form data".to_string()))?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::Build("could not attach file".to_string()))?;

    let result: ImportResult = client.post_form("/upload", form).await?;
    Ok(result.imported_records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_omits_empty_optionals() {
        let draft = RecordDraft {
            amount: 42.5,
            category: "Food".to_string(),
            kind: RecordKind::Expense,
            note: None,
            timestamp_ms: None,
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "amount": 42.5,
                "category": "Food",
                "type": "expense",
            })
        );
    }

    #[test]
    fn draft_sends_note_and_timestamp_when_set() {
        let draft = RecordDraft {
            amount: 100.0,
            category: "Salary".to_string(),
            kind: RecordKind::Income,
            note: Some("Lunch money".to_string()),
            timestamp_ms: Some(1_633_072_800_000),
        };
        let body = serde_json::to_value(&draft).unwrap();
        assert_eq!(body["type"], "income");
        assert_eq!(body["note"], "Lunch money");
        assert_eq!(body["timeStamp"], 1_633_072_800_000_i64);
    }

    #[test]
    fn record_deserializes_backend_shape() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "id": 1,
            "amount": 100.0,
            "category": "Food",
            "date": "2021-10-01 12:00",
            "time": "2021-10-01 12:00",
            "timeStamp": 1_633_072_800_000_i64,
            "type": "expense",
            "note": "Lunch",
        }))
        .unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.kind, RecordKind::Expense);
        assert_eq!(record.note.as_deref(), Some("Lunch"));
    }

    #[test]
    fn import_result_reports_row_count() {
        let result: ImportResult = serde_json::from_value(serde_json::json!({
            "message": "imported",
            "imported_records": 10,
        }))
        .unwrap();
        assert_eq!(result.imported_records, 10);
    }

    #[test]
    fn record_tolerates_missing_note() {
        let record: Record = serde_json::from_value(serde_json::json!({
            "id": 2,
            "amount": 5.0,
            "category": "Transport",
            "date": "2021-10-02 08:30",
            "timeStamp": 1_633_134_600_000_i64,
            "type": "expense",
        }))
        .unwrap();
        assert_eq!(record.note, None);
    }
}
