use axum::extract::FromRequest;
use chrono::NaiveDate;
use serde::Deserialize;

use crate::app::errors::ApiError;

// -------------------------
// Extractors
// -------------------------

/// `Json` body whose rejections render as `{"error": ...}` like every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub cpf: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DepositRequest {
    #[serde(default)]
    pub description: Option<String>,
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: Option<String>,
}

impl StatementDateQuery {
    /// Calendar day to filter on, compared against entry timestamps in UTC.
    ///
    /// `None` when the parameter is missing or not `YYYY-MM-DD`; such a day
    /// matches no entry.
    pub fn day(&self) -> Option<NaiveDate> {
        let raw = self.date.as_deref()?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(date: Option<&str>) -> StatementDateQuery {
        StatementDateQuery {
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn parses_iso_calendar_date() {
        let day = query(Some("2024-02-29")).day();
        assert_eq!(day, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn missing_or_malformed_date_has_no_day() {
        assert_eq!(query(None).day(), None);
        assert_eq!(query(Some("2023-02-29")).day(), None);
        assert_eq!(query(Some("yesterday")).day(), None);
    }

    #[test]
    fn deposit_description_is_optional() {
        let req: DepositRequest = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(req.amount, 12.5);
        assert!(req.description.is_none());
    }
}
