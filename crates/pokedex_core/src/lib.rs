//! Pokedex core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use record::{DetailRecord, LoadFailure, RequestId, ViewRecord};
pub use state::{AppState, CatalogLoadState, DetailLoadState, DetailSlot};
pub use update::update;
pub use view_model::{
    AppViewModel, CatalogRowView, DetailBodyView, DetailCardView, DetailPanelView,
};
