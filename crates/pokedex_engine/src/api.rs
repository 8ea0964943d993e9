//! Wire types for the catalog API, matching its JSON shapes field by field.

use serde::Deserialize;

/// One page of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<ItemSummary>,
}

/// Minimal list entry: the key for on-demand lookup plus the canonical
/// location of the full detail record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemSummary {
    pub name: String,
    pub url: String,
}

/// Full per-item record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    /// Hectograms.
    pub weight: u32,
    /// Decimeters.
    pub height: u32,
    pub sprites: Sprites,
    #[serde(rename = "types")]
    pub categories: Vec<CategorySlot>,
}

/// Sprite URLs. Individual entries are nullable in the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    pub back_default: Option<String>,
    /// The whole subtree is absent for some items.
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: ArtworkSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ArtworkSprites {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategorySlot {
    #[serde(rename = "type")]
    pub category: CategoryRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

impl Sprites {
    /// Best image for the detail view: official artwork when present,
    /// otherwise the plain front sprite.
    pub fn display_image(&self) -> Option<&str> {
        self.other
            .official_artwork
            .front_default
            .as_deref()
            .or(self.front_default.as_deref())
    }
}
