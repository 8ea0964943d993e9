//! Pokedex engine: API client, catalog aggregation and effect execution.
mod aggregate;
mod api;
mod engine;
mod fetch;
mod project;
mod runner;
mod types;

pub use aggregate::load_catalog;
pub use api::{
    ArtworkSprites, CatalogPage, CategoryRef, CategorySlot, ItemDetail, ItemSummary, OtherSprites,
    Sprites,
};
pub use engine::EngineHandle;
pub use fetch::{ApiSettings, CatalogApi, ReqwestCatalogApi};
pub use project::{to_detail_record, to_view_record};
pub use runner::EffectRunner;
pub use types::{CatalogError, EngineEvent, FailureKind, FetchError};
