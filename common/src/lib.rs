pub mod api;
pub mod request;
pub mod summary;

pub use api::{CreateRequest, StatusUpdate};
pub use request::{is_blank, Draft, Request, RequestId, RequestStatus};
pub use summary::StatusSummary;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/reqboard/config.yaml";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
