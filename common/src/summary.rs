use crate::request::{Request, RequestStatus};

/// Per-status counts over a list of requests. Always derived, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusSummary {
    pub pending: usize,
    pub acknowledged: usize,
    pub completed: usize,
}

impl StatusSummary {
    pub fn from_requests(requests: &[Request]) -> Self {
        let count = |status: RequestStatus| requests.iter().filter(|r| r.status == status).count();
        Self {
            pending: count(RequestStatus::Pending),
            acknowledged: count(RequestStatus::Acknowledged),
            completed: count(RequestStatus::Completed),
        }
    }

    pub fn get(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Acknowledged => self.acknowledged,
            RequestStatus::Completed => self.completed,
        }
    }

    pub fn total(&self) -> usize {
        self.pending + self.acknowledged + self.completed
    }
}
