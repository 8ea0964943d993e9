use crate::record::{DetailRecord, LoadFailure, RequestId, ViewRecord};
use crate::view_model::AppViewModel;

/// Lifecycle of the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogLoadState {
    /// No load has been requested yet.
    #[default]
    Idle,
    Loading,
    Ready(Vec<ViewRecord>),
    Failed {
        reason: String,
    },
}

/// Lifecycle of the currently selected item's detail load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLoadState {
    Loading,
    Ready(DetailRecord),
    Failed { reason: String },
    NotFound,
}

/// Detail slot for the currently selected key. Replaced wholesale whenever
/// the selection changes; never merged across keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailSlot {
    pub key: String,
    pub request_id: RequestId,
    pub load: DetailLoadState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    catalog: CatalogLoadState,
    catalog_in_flight: Option<RequestId>,
    detail: Option<DetailSlot>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self)
    }

    pub fn catalog(&self) -> &CatalogLoadState {
        &self.catalog
    }

    pub fn detail(&self) -> Option<&DetailSlot> {
        self.detail.as_ref()
    }

    /// Returns whether a render is due and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn is_dirty(&self) -> bool {
        self.dirty
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Starts a catalog load, superseding any load still in flight.
    pub(crate) fn begin_catalog_load(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.catalog = CatalogLoadState::Loading;
        self.catalog_in_flight = Some(request_id);
        self.dirty = true;
        request_id
    }

    /// Applies a catalog resolution; stale request ids are ignored.
    pub(crate) fn resolve_catalog(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<ViewRecord>, String>,
    ) {
        if self.catalog_in_flight != Some(request_id) {
            return;
        }
        self.catalog_in_flight = None;
        self.catalog = match result {
            Ok(records) => CatalogLoadState::Ready(records),
            Err(reason) => CatalogLoadState::Failed { reason },
        };
        self.dirty = true;
    }

    /// Replaces the detail slot for a newly selected key and returns the
    /// request id to fetch under. Returns `None` when the key is already
    /// selected, in which case no new fetch is wanted.
    pub(crate) fn select_item(&mut self, key: String) -> Option<RequestId> {
        if let Some(slot) = &self.detail {
            if slot.key == key {
                return None;
            }
        }
        let request_id = self.allocate_request_id();
        self.detail = Some(DetailSlot {
            key,
            request_id,
            load: DetailLoadState::Loading,
        });
        self.dirty = true;
        Some(request_id)
    }

    /// Applies a detail resolution. A resolution whose request id does not
    /// match the current slot belongs to a superseded selection and is
    /// discarded without touching state.
    pub(crate) fn resolve_detail(
        &mut self,
        request_id: RequestId,
        result: Result<DetailRecord, LoadFailure>,
    ) {
        let Some(slot) = self.detail.as_mut() else {
            return;
        };
        if slot.request_id != request_id {
            return;
        }
        slot.load = match result {
            Ok(record) => DetailLoadState::Ready(record),
            Err(LoadFailure::NotFound) => DetailLoadState::NotFound,
            Err(LoadFailure::Failed { reason }) => DetailLoadState::Failed { reason },
        };
        self.dirty = true;
    }

    /// Drops the detail slot on detail-view exit. Any in-flight fetch for it
    /// becomes stale and its resolution will be discarded.
    pub(crate) fn close_detail(&mut self) {
        if self.detail.take().is_some() {
            self.dirty = true;
        }
    }
}
