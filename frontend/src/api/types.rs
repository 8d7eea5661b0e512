use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Travel plan as handed over by the form. The controller sends it as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelPlanData {
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no access token available")]
    MissingCredential,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },
    #[error("failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::MissingCredential => "missing_credential",
            ApiError::Network(_) => "network",
            ApiError::Http { .. } => "http",
            ApiError::Parse(_) => "parse",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_plan() -> TravelPlanData {
        TravelPlanData {
            destination: "Lisbon".into(),
            start_date: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 5, 8).unwrap(),
            travelers: 2,
            budget: None,
            notes: None,
        }
    }

    #[test]
    fn travel_plan_omits_missing_optionals() {
        let value = serde_json::to_value(sample_plan()).unwrap();
        assert_eq!(
            value,
            json!({
                "destination": "Lisbon",
                "start_date": "2026-05-01",
                "end_date": "2026-05-08",
                "travelers": 2
            })
        );
    }

    #[test]
    fn travel_plan_keeps_budget_and_notes() {
        let plan = TravelPlanData {
            budget: Some(1250.5),
            notes: Some("window seats".into()),
            ..sample_plan()
        };
        let value = serde_json::to_value(plan).unwrap();
        assert_eq!(value["budget"], json!(1250.5));
        assert_eq!(value["notes"], json!("window seats"));
    }

    #[test]
    fn api_error_exposes_status_and_kind() {
        let http = ApiError::Http {
            status: 500,
            message: None,
        };
        assert_eq!(http.status(), Some(500));
        assert_eq!(http.kind(), "http");
        assert_eq!(http.to_string(), "server responded with status 500");

        let network = ApiError::Network("connection refused".into());
        assert_eq!(network.status(), None);
        assert_eq!(network.kind(), "network");
        assert_eq!(ApiError::MissingCredential.kind(), "missing_credential");
        assert_eq!(ApiError::Parse("eof".into()).kind(), "parse");
    }
}
