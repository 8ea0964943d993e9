use std::fmt;

/// Identifier correlating an emitted effect with its eventual resolution.
///
/// Each catalog load or detail load gets a fresh id; a resolution carrying a
/// superseded id is stale and must be discarded.
pub type RequestId = u64;

/// Display-ready projection of one catalog entry for the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub name: String,
    /// Front-facing sprite URL.
    pub primary_image: String,
    /// Back-facing sprite URL.
    pub secondary_image: String,
    /// Category names in API order; the first one drives presentation
    /// concerns such as card coloring.
    pub categories: Vec<String>,
}

/// Full per-item record shown by the detail view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRecord {
    pub name: String,
    /// Official artwork when available, otherwise the front sprite.
    pub image: String,
    /// Weight in hectograms, as reported by the API.
    pub weight: u32,
    /// Height in decimeters, as reported by the API.
    pub height: u32,
    pub categories: Vec<String>,
}

/// Why a load did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadFailure {
    /// The API has no item under the requested key.
    NotFound,
    /// Network, status or decode failure. The reason is kept for
    /// observability, not programmatic branching.
    Failed { reason: String },
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::NotFound => write!(f, "not found"),
            LoadFailure::Failed { reason } => write!(f, "{reason}"),
        }
    }
}
