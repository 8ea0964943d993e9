use crate::state::{AppState, CatalogLoadState, DetailLoadState};

/// Render-ready snapshot of the whole application state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub catalog_loading: bool,
    /// Empty while loading and on total catalog failure.
    pub rows: Vec<CatalogRowView>,
    pub catalog_error: Option<String>,
    pub detail: Option<DetailPanelView>,
    pub dirty: bool,
}

/// One list-view card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRowView {
    pub name: String,
    pub primary_image: String,
    pub secondary_image: String,
    /// Input for the presentation layer's color-by-category mapping.
    pub first_category: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanelView {
    pub key: String,
    pub body: DetailBodyView,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBodyView {
    Loading,
    Ready(DetailCardView),
    Failed { reason: String },
    NotFound,
}

/// Detail-view card with display units applied.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailCardView {
    pub name: String,
    pub image: String,
    /// API weight is in hectograms; shown in kilograms.
    pub weight_kg: f64,
    /// API height is in decimeters; shown in meters.
    pub height_m: f64,
    pub categories: Vec<String>,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState) -> Self {
        let (catalog_loading, rows, catalog_error) = match state.catalog() {
            CatalogLoadState::Idle => (false, Vec::new(), None),
            CatalogLoadState::Loading => (true, Vec::new(), None),
            CatalogLoadState::Ready(records) => (
                false,
                records
                    .iter()
                    .map(|record| CatalogRowView {
                        name: record.name.clone(),
                        primary_image: record.primary_image.clone(),
                        secondary_image: record.secondary_image.clone(),
                        first_category: record.categories.first().cloned(),
                    })
                    .collect(),
                None,
            ),
            CatalogLoadState::Failed { reason } => (false, Vec::new(), Some(reason.clone())),
        };

        let detail = state.detail().map(|slot| DetailPanelView {
            key: slot.key.clone(),
            body: match &slot.load {
                DetailLoadState::Loading => DetailBodyView::Loading,
                DetailLoadState::Ready(record) => DetailBodyView::Ready(DetailCardView {
                    name: record.name.clone(),
                    image: record.image.clone(),
                    weight_kg: f64::from(record.weight) / 10.0,
                    height_m: f64::from(record.height) / 10.0,
                    categories: record.categories.clone(),
                }),
                DetailLoadState::Failed { reason } => DetailBodyView::Failed {
                    reason: reason.clone(),
                },
                DetailLoadState::NotFound => DetailBodyView::NotFound,
            },
        });

        Self {
            catalog_loading,
            rows,
            catalog_error,
            detail,
            dirty: state.is_dirty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{update, AppState, DetailBodyView, DetailRecord, Msg};

    #[test]
    fn detail_card_converts_units_to_kg_and_m() {
        let state = AppState::new();
        let (state, effects) = update(
            state,
            Msg::ItemSelected {
                key: "pikachu".to_string(),
            },
        );
        let request_id = match &effects[0] {
            crate::Effect::LoadDetail { request_id, .. } => *request_id,
            other => panic!("unexpected effect: {other:?}"),
        };

        let (state, _) = update(
            state,
            Msg::DetailResolved {
                request_id,
                result: Ok(DetailRecord {
                    name: "pikachu".to_string(),
                    image: "https://img.example/25.png".to_string(),
                    weight: 60,
                    height: 4,
                    categories: vec!["electric".to_string()],
                }),
            },
        );

        let view = state.view();
        let panel = view.detail.expect("detail panel");
        let DetailBodyView::Ready(card) = panel.body else {
            panic!("expected ready body");
        };
        assert_eq!(card.weight_kg, 6.0);
        assert_eq!(card.height_m, 0.4);
    }

    #[test]
    fn first_category_feeds_presentation_coloring() {
        let record = crate::ViewRecord {
            name: "bulbasaur".to_string(),
            primary_image: "front".to_string(),
            secondary_image: "back".to_string(),
            categories: vec!["grass".to_string(), "poison".to_string()],
        };
        let (state, effects) = update(AppState::new(), Msg::CatalogRequested { page_size: 1 });
        let request_id = match &effects[0] {
            crate::Effect::LoadCatalog { request_id, .. } => *request_id,
            other => panic!("unexpected effect: {other:?}"),
        };
        let (state, _) = update(
            state,
            Msg::CatalogResolved {
                request_id,
                result: Ok(vec![record]),
            },
        );

        let view = state.view();
        assert_eq!(view.rows[0].first_category.as_deref(), Some("grass"));
    }
}
