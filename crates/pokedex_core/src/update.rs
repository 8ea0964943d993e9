use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::CatalogRequested { page_size } => {
            let request_id = state.begin_catalog_load();
            vec![Effect::LoadCatalog {
                request_id,
                page_size,
            }]
        }
        Msg::CatalogResolved { request_id, result } => {
            state.resolve_catalog(request_id, result);
            Vec::new()
        }
        Msg::ItemSelected { key } => match state.select_item(key.clone()) {
            Some(request_id) => vec![Effect::LoadDetail { request_id, key }],
            None => Vec::new(),
        },
        Msg::DetailResolved { request_id, result } => {
            state.resolve_detail(request_id, result);
            Vec::new()
        }
        Msg::DetailClosed => {
            state.close_detail();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
