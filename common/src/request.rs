use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct RequestId(pub i64);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let id = s
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid request id: {}", s))?;
        Ok(RequestId(id))
    }
}

/// Workflow position of a request. Only moves forward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Acknowledged,
    Completed,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Acknowledged,
        RequestStatus::Completed,
    ];

    /// The status offered as the next step, or `None` once completed.
    pub fn next(self) -> Option<RequestStatus> {
        match self {
            RequestStatus::Pending => Some(RequestStatus::Acknowledged),
            RequestStatus::Acknowledged => Some(RequestStatus::Completed),
            RequestStatus::Completed => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Acknowledged => "acknowledged",
            RequestStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Acknowledged => "Acknowledged",
            RequestStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A support request as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request {
    pub id: RequestId,
    pub customer_name: String,
    pub request_details: String,
    pub status: RequestStatus,
    #[serde(default)]
    pub created_at: Option<String>, // opaque timestamp
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A required field counts as missing when it holds only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Unsaved new-request form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub customer_name: String,
    pub request_details: String,
}

impl Draft {
    pub fn new(customer_name: impl Into<String>, request_details: impl Into<String>) -> Self {
        Self {
            customer_name: customer_name.into(),
            request_details: request_details.into(),
        }
    }

    /// Both fields are required before a draft may be submitted.
    pub fn is_complete(&self) -> bool {
        !is_blank(&self.customer_name) && !is_blank(&self.request_details)
    }

    pub fn clear(&mut self) {
        self.customer_name.clear();
        self.request_details.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_advances_forward_only() {
        assert_eq!(RequestStatus::Pending.next(), Some(RequestStatus::Acknowledged));
        assert_eq!(RequestStatus::Acknowledged.next(), Some(RequestStatus::Completed));
        assert_eq!(RequestStatus::Completed.next(), None);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&RequestStatus::Acknowledged).unwrap();
        assert_eq!(json, "\"acknowledged\"");

        let status: RequestStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, RequestStatus::Completed);

        assert!(serde_json::from_str::<RequestStatus>("\"archived\"").is_err());
    }

    #[test]
    fn test_request_without_timestamps() {
        let json = r#"{"id":1,"customer_name":"Alice","request_details":"Broken widget","status":"pending"}"#;
        let req: Request = serde_json::from_str(json).unwrap();
        assert_eq!(req.id, RequestId(1));
        assert_eq!(req.status, RequestStatus::Pending);
        assert!(req.created_at.is_none());
        assert!(req.updated_at.is_none());
    }

    #[test]
    fn test_timestamps_kept_verbatim() {
        let json = r#"{"id":7,"customer_name":"Bob","request_details":"Refund","status":"completed",
            "created_at":"2024-05-01T10:00:00.123456","updated_at":null}"#;
        let req: Request = serde_json::from_str(json).unwrap();
        assert_eq!(req.created_at.as_deref(), Some("2024-05-01T10:00:00.123456"));
        assert!(req.updated_at.is_none());
    }

    #[test]
    fn test_draft_completeness() {
        let mut draft = Draft::default();
        assert!(!draft.is_complete());

        draft.customer_name = "Alice".to_string();
        assert!(!draft.is_complete());

        draft.request_details = "   ".to_string();
        assert!(!draft.is_complete());

        draft.request_details = "Broken widget".to_string();
        assert!(draft.is_complete());

        draft.clear();
        assert_eq!(draft, Draft::default());

        assert!(!Draft::new("  ", "x").is_complete());
        assert!(Draft::new(" Alice ", "x").is_complete());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(" 42 ".parse::<RequestId>().unwrap(), RequestId(42));
        assert!("abc".parse::<RequestId>().is_err());
    }
}
