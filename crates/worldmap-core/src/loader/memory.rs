// crates/worldmap-core/src/loader/memory.rs
use crate::error::{MapError, Result};
use crate::traits::FeatureSource;
use std::cell::Cell;

#[derive(Debug)]
enum Response {
    Body(String),
    Status(u16),
    Unreachable(String),
}

/// Serves a fixed body (or a fixed failure) instead of going to the network.
///
/// Used by the headless demo and tests; counts requests so callers can check
/// that a load issues exactly one.
#[derive(Debug)]
pub struct StaticSource {
    response: Response,
    requests: Cell<usize>,
}

impl StaticSource {
    fn with(response: Response) -> Self {
        Self {
            response,
            requests: Cell::new(0),
        }
    }

    /// Answer every request with `body`.
    pub fn new(body: impl Into<String>) -> Self {
        Self::with(Response::Body(body.into()))
    }

    /// Answer every request with HTTP `status` (e.g. 404, 503).
    pub fn failing(status: u16) -> Self {
        Self::with(Response::Status(status))
    }

    /// Fail every request before any response, like a dropped connection.
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::with(Response::Unreachable(reason.into()))
    }

    pub fn requests(&self) -> usize {
        self.requests.get()
    }
}

impl FeatureSource for StaticSource {
    async fn fetch_text(&self, url: &str) -> Result<String> {
        self.requests.set(self.requests.get() + 1);
        match &self.response {
            Response::Body(body) => Ok(body.clone()),
            Response::Status(status) => Err(MapError::Status {
                url: url.to_string(),
                status: *status,
            }),
            Response::Unreachable(reason) => Err(MapError::Fetch {
                url: url.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}
