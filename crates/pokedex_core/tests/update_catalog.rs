use std::sync::Once;

use pokedex_core::{update, AppState, Effect, Msg, RequestId, ViewRecord};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(pokedex_logging::initialize_for_tests);
}

fn record(name: &str) -> ViewRecord {
    ViewRecord {
        name: name.to_string(),
        primary_image: format!("https://img.example/{name}/front.png"),
        secondary_image: format!("https://img.example/{name}/back.png"),
        categories: vec!["grass".to_string()],
    }
}

fn request_catalog(state: AppState, page_size: usize) -> (AppState, RequestId) {
    let (state, effects) = update(state, Msg::CatalogRequested { page_size });
    let request_id = match effects.as_slice() {
        [Effect::LoadCatalog {
            request_id,
            page_size: effect_page_size,
        }] => {
            assert_eq!(*effect_page_size, page_size);
            *request_id
        }
        other => panic!("expected a single LoadCatalog effect, got {other:?}"),
    };
    (state, request_id)
}

#[test]
fn catalog_request_moves_to_loading_and_emits_effect() {
    init_logging();
    let (mut state, _request_id) = request_catalog(AppState::new(), 10);

    let view = state.view();
    assert!(view.catalog_loading);
    assert!(view.rows.is_empty());
    assert!(view.catalog_error.is_none());
    assert!(state.consume_dirty());
}

#[test]
fn catalog_success_populates_rows_in_order() {
    init_logging();
    let (state, request_id) = request_catalog(AppState::new(), 2);

    let (state, effects) = update(
        state,
        Msg::CatalogResolved {
            request_id,
            result: Ok(vec![record("bulbasaur"), record("charmander")]),
        },
    );
    assert!(effects.is_empty());

    let view = state.view();
    assert!(!view.catalog_loading);
    let names: Vec<&str> = view.rows.iter().map(|row| row.name.as_str()).collect();
    assert_eq!(names, vec!["bulbasaur", "charmander"]);
    assert!(view.rows.iter().all(|row| !row.primary_image.is_empty()));
}

#[test]
fn catalog_failure_yields_empty_rows_and_error() {
    init_logging();
    let (state, request_id) = request_catalog(AppState::new(), 10);

    let (state, _effects) = update(
        state,
        Msg::CatalogResolved {
            request_id,
            result: Err("list fetch failed: network error".to_string()),
        },
    );

    let view = state.view();
    assert!(!view.catalog_loading);
    assert!(view.rows.is_empty());
    assert_eq!(
        view.catalog_error.as_deref(),
        Some("list fetch failed: network error")
    );
}

#[test]
fn stale_catalog_resolution_is_ignored() {
    init_logging();
    let (state, first_id) = request_catalog(AppState::new(), 10);
    let (state, second_id) = request_catalog(state, 10);
    assert_ne!(first_id, second_id);

    // The superseded load resolving must not end the newer one's Loading.
    let (state, _effects) = update(
        state,
        Msg::CatalogResolved {
            request_id: first_id,
            result: Ok(vec![record("bulbasaur")]),
        },
    );
    assert!(state.view().catalog_loading);

    let (state, _effects) = update(
        state,
        Msg::CatalogResolved {
            request_id: second_id,
            result: Ok(vec![record("charmander")]),
        },
    );
    let view = state.view();
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].name, "charmander");
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let mut state = AppState::new();
    state.consume_dirty();
    let before = state.view();

    let (mut next, effects) = update(state, Msg::NoOp);

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
    assert!(!next.consume_dirty());
}
