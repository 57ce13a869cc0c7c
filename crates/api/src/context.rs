use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Per-request context inserted by the request-logging middleware.
///
/// Immutable; handlers read it through `Extension<RequestContext>`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestContext {
    request_id: Uuid,
    received_at: DateTime<Utc>,
}

impl RequestContext {
    /// Fresh context with a time-ordered (UUIDv7) request id.
    pub fn new() -> Self {
        Self {
            request_id: Uuid::now_v7(),
            received_at: Utc::now(),
        }
    }

    pub fn request_id(&self) -> Uuid {
        self.request_id
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}
