use std::fmt;

use pokedex_core::{DetailRecord, RequestId, ViewRecord};
use thiserror::Error;

/// Failure of a single HTTP round-trip.
///
/// Kept as plain data (no source chain) so engine events stay cloneable and
/// comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    /// Non-success status other than 404.
    HttpStatus(u16),
    /// HTTP 404 on a lookup; distinguished so the detail view can report a
    /// missing item instead of a generic failure.
    NotFound,
    Timeout,
    Network,
    /// Response body was not the expected JSON shape.
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::NotFound => write!(f, "not found"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "decode error"),
        }
    }
}

/// Failure of a whole catalog aggregation.
///
/// The aggregation is all-or-nothing: the first failing detail fetch fails
/// the call, and the error names the item it failed on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("list fetch failed: {0}")]
    List(FetchError),
    #[error("detail fetch for {name} failed: {source}")]
    Detail { name: String, source: FetchError },
}

/// Completion notifications emitted by the engine, tagged with the request
/// id of the command that started them.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    CatalogLoaded {
        request_id: RequestId,
        result: Result<Vec<ViewRecord>, CatalogError>,
    },
    DetailLoaded {
        request_id: RequestId,
        result: Result<DetailRecord, FetchError>,
    },
}
