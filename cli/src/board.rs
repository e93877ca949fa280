use anyhow::{bail, Result};
use common::{Draft, Request, RequestId, RequestStatus, StatusSummary};
use crate::client::RequestApi;

/// Client-side view of the request list.
///
/// The backend is the only source of truth: every mutation is followed by a
/// full reload, and the local list is never patched in place. Failures are
/// logged and otherwise swallowed, leaving the previous state on screen.
pub struct RequestBoard<A: RequestApi> {
    api: A,
    requests: Vec<Request>,
    draft: Draft,
    loading: bool,
}

impl<A: RequestApi> RequestBoard<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            requests: Vec::new(),
            draft: Draft::default(),
            // Nothing has been fetched yet.
            loading: true,
        }
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn find(&self, id: RequestId) -> Option<&Request> {
        self.requests.iter().find(|r| r.id == id)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[cfg(test)]
    pub fn draft_mut(&mut self) -> &mut Draft {
        &mut self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn summary(&self) -> StatusSummary {
        StatusSummary::from_requests(&self.requests)
    }

    /// Replace the local list with the backend's current collection.
    pub async fn load(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(requests) => {
                log::debug!("Loaded {} requests", requests.len());
                self.requests = requests;
            }
            Err(e) => log::error!("Failed to load requests: {:#}", e),
        }
        self.loading = false;
    }

    /// Create a request from the current draft. The draft is kept on failure.
    pub async fn submit(&mut self) {
        match self.api.create(&self.draft).await {
            Ok(created) => {
                log::info!("Created request {} for {}", created.id, created.customer_name);
                self.draft.clear();
                self.load().await;
            }
            Err(e) => log::error!("Failed to create request: {:#}", e),
        }
    }

    /// Replace the draft and submit it. A draft with a blank field is
    /// rejected before any call is made and the current draft is kept.
    pub async fn submit_draft(&mut self, draft: Draft) -> Result<()> {
        if !draft.is_complete() {
            bail!("Customer name and request details are both required");
        }
        self.draft = draft;
        self.submit().await;
        Ok(())
    }

    /// Ask the backend to move `id` to `next`. Callers pick `next` from
    /// `RequestStatus::next`; no local check is made here.
    pub async fn advance(&mut self, id: RequestId, next: RequestStatus) {
        match self.api.update_status(id, next).await {
            Ok(_) => {
                log::info!("Request {} moved to {}", id, next);
                self.load().await;
            }
            Err(e) => log::error!("Failed to update request {}: {:#}", id, e),
        }
    }
}
