//! Summary Endpoint
//!
//! Aggregated income/expense totals grouped by year, month, or day, or taken
//! over the whole account. Feeds the charts and reports pages.

use crate::api::client::{ApiClient, ApiError};

/// Grouping granularity accepted by the summary endpoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Period {
    Overall,
    Year,
    Month,
    Day,
    Custom,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Custom => "custom",
        }
    }
}

#[derive(Debug, serde::Deserialize)]
struct SummaryResponse {
    #[allow(dead_code)]
    period: String,
    summary: Vec<SummaryRow>,
}

/// One aggregated row; the date parts present depend on the period
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct SummaryRow {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub day: Option<u32>,
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
}

impl SummaryRow {
    /// Human-readable label for whatever date parts this row carries
    pub fn label(&self) -> String {
        match (self.year, self.month, self.day) {
            (Some(y), Some(m), Some(d)) => format!("{:04}-{:02}-{:02}", y, m, d),
            (Some(y), Some(m), None) => format!("{} {}", month_name(m), y),
            (Some(y), None, None) => y.to_string(),
            _ => "Overall".to_string(),
        }
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March",
        4 => "April", 5 => "May", 6 => "June",
        7 => "July", 8 => "August", 9 => "September",
        10 => "October", 11 => "November", 12 => "December",
        _ => "Unknown",
    }
}

/// Fetch summary rows for a period; custom periods carry a date range
/// (`YYYY-MM-DD` strings, inclusive).
pub async fn fetch_summary(
    client: &ApiClient,
    period: Period,
    range: Option<(&str, &str)>,
) -> Result<Vec<SummaryRow>, ApiError> {
    let mut path = format!("/summary?period={}", period.as_str());
    if let Some((start, end)) = range {
        path.push_str(&format!("&start_date={}&end_date={}", start, end));
    }

    let response: SummaryResponse = client.get_json(&path).await?;
    Ok(response.summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_date_parts() {
        let mut row = SummaryRow {
            year: Some(2021),
            month: Some(3),
            day: Some(5),
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
        };
        assert_eq!(row.label(), "2021-03-05");

        row.day = None;
        assert_eq!(row.label(), "March 2021");

        row.month = None;
        assert_eq!(row.label(), "2021");

        row.year = None;
        assert_eq!(row.label(), "Overall");
    }

    #[test]
    fn summary_rows_deserialize_without_date_parts() {
        let response: SummaryResponse = serde_json::from_value(serde_json::json!({
            "period": "overall",
            "summary": [{
                "total_income": 1000.0,
                "total_expense": 400.0,
                "balance": 600.0,
            }],
        }))
        .unwrap();
        assert_eq!(response.summary.len(), 1);
        assert_eq!(response.summary[0].balance, 600.0);
        assert_eq!(response.summary[0].label(), "Overall");
    }
}
