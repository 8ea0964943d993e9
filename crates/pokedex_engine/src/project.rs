//! Projections from wire records into the core's display-ready records.

use pokedex_core::{DetailRecord, ViewRecord};

use crate::api::ItemDetail;

/// List-view projection. The name comes from the summary, not the detail
/// body, so the record keeps the exact key the list handed out.
pub fn to_view_record(name: String, detail: &ItemDetail) -> ViewRecord {
    ViewRecord {
        name,
        primary_image: detail.sprites.front_default.clone().unwrap_or_default(),
        secondary_image: detail.sprites.back_default.clone().unwrap_or_default(),
        categories: category_names(detail),
    }
}

/// Detail-view projection, preferring the official artwork.
pub fn to_detail_record(detail: &ItemDetail) -> DetailRecord {
    DetailRecord {
        name: detail.name.clone(),
        image: detail.sprites.display_image().unwrap_or_default().to_string(),
        weight: detail.weight,
        height: detail.height,
        categories: category_names(detail),
    }
}

fn category_names(detail: &ItemDetail) -> Vec<String> {
    detail
        .categories
        .iter()
        .map(|slot| slot.category.name.clone())
        .collect()
}
