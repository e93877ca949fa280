use anyhow::{Context, Result};
use async_trait::async_trait;
use common::api::{collection_url, item_url};
use common::{CreateRequest, Draft, Request, RequestId, RequestStatus, StatusUpdate};

/// The three backend calls the board depends on.
#[async_trait]
pub trait RequestApi {
    async fn list(&self) -> Result<Vec<Request>>;
    async fn create(&self, draft: &Draft) -> Result<Request>;
    async fn update_status(&self, id: RequestId, status: RequestStatus) -> Result<Request>;
}

pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl RequestApi for HttpApi {
    async fn list(&self) -> Result<Vec<Request>> {
        let url = collection_url(&self.base_url);
        log::debug!("GET {}", url);

        let response = self.client.get(&url).send().await
            .with_context(|| format!("GET {} failed", url))?
            .error_for_status()
            .with_context(|| format!("GET {} returned an error", url))?;

        // A null body is treated like an empty collection.
        let requests: Option<Vec<Request>> = response.json().await
            .with_context(|| format!("Invalid request list from {}", url))?;
        Ok(requests.unwrap_or_default())
    }

    async fn create(&self, draft: &Draft) -> Result<Request> {
        let url = collection_url(&self.base_url);
        log::debug!("POST {} for {}", url, draft.customer_name);

        let response = self.client.post(&url)
            .json(&CreateRequest::from(draft))
            .send().await
            .with_context(|| format!("POST {} failed", url))?
            .error_for_status()
            .with_context(|| format!("POST {} returned an error", url))?;

        let created: Request = response.json().await
            .with_context(|| format!("Invalid created request from {}", url))?;
        Ok(created)
    }

    async fn update_status(&self, id: RequestId, status: RequestStatus) -> Result<Request> {
        let url = item_url(&self.base_url, id);
        log::debug!("PUT {} status={}", url, status);

        let response = self.client.put(&url)
            .json(&StatusUpdate { status })
            .send().await
            .with_context(|| format!("PUT {} failed", url))?
            .error_for_status()
            .with_context(|| format!("PUT {} returned an error", url))?;

        let updated: Request = response.json().await
            .with_context(|| format!("Invalid updated request from {}", url))?;
        Ok(updated)
    }
}
