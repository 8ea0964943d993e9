use crate::record::{DetailRecord, LoadFailure, RequestId, ViewRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// List view mounted; load the first page of the catalog.
    CatalogRequested { page_size: usize },
    /// Engine finished a catalog load.
    CatalogResolved {
        request_id: RequestId,
        result: Result<Vec<ViewRecord>, String>,
    },
    /// User selected a list entry; its name is the detail lookup key.
    ItemSelected { key: String },
    /// Engine finished a detail load.
    DetailResolved {
        request_id: RequestId,
        result: Result<DetailRecord, LoadFailure>,
    },
    /// User left the detail view.
    DetailClosed,
    /// Fallback for placeholder wiring.
    NoOp,
}
