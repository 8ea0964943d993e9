use crate::record::RequestId;

/// IO the host must perform on behalf of the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch one page of summaries and every item's detail, merged into
    /// view records in list order.
    LoadCatalog {
        request_id: RequestId,
        page_size: usize,
    },
    /// Fetch one item's detail by key.
    LoadDetail { request_id: RequestId, key: String },
}
