use serde::{Deserialize, Serialize};
use crate::request::{Draft, RequestId, RequestStatus};

/// Body of `POST /requests`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateRequest {
    pub customer_name: String,
    pub request_details: String,
}

impl From<&Draft> for CreateRequest {
    fn from(draft: &Draft) -> Self {
        Self {
            customer_name: draft.customer_name.clone(),
            request_details: draft.request_details.clone(),
        }
    }
}

/// Body of `PUT /requests/{id}`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatusUpdate {
    pub status: RequestStatus,
}

pub fn collection_url(base_url: &str) -> String {
    format!("{}/requests", base_url.trim_end_matches('/'))
}

pub fn item_url(base_url: &str, id: RequestId) -> String {
    format!("{}/{}", collection_url(base_url), id)
}
