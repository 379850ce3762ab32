//! Response envelope. Success and failure are told apart only by `status`.

use crate::models::Income;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Payload of `getAllData`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllData {
    pub incomes: Vec<Income>,
    pub operators: Vec<String>,
    pub ankety: Vec<String>,
    pub admins: Vec<String>,
    /// Income rows that could not be read back and were left out.
    pub skipped_rows: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub data: Option<AllData>,
}

impl Response {
    pub fn success() -> Self {
        Self {
            status: Status::Success,
            message: None,
            error: None,
            data: None,
        }
    }

    pub fn with_data(data: AllData) -> Self {
        Self {
            data: Some(data),
            ..Self::success()
        }
    }

    /// Rejection of an action name the gateway does not know.
    pub fn unknown_action() -> Self {
        Self {
            status: Status::Error,
            message: Some("Unknown action".to_string()),
            error: None,
            data: None,
        }
    }

    /// Any failure caught at the top level.
    pub fn failure(err: impl ToString) -> Self {
        Self {
            status: Status::Error,
            message: None,
            error: Some(err.to_string()),
            data: None,
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            format!(r#"{{"status":"error","error":"{}"}}"#, e.to_string().replace('"', "'"))
        })
    }
}
