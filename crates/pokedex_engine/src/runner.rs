use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use pokedex_core::{Effect, LoadFailure, Msg};
use pokedex_logging::{dex_info, dex_warn};

use crate::engine::EngineHandle;
use crate::fetch::ApiSettings;
use crate::types::{EngineEvent, FailureKind, FetchError};

/// Bridges the pure core to the engine: performs emitted effects and feeds
/// completions back as messages.
pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: ApiSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, FetchError> {
        let engine = EngineHandle::new(settings)?;
        let runner = Self { engine };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog {
                    request_id,
                    page_size,
                } => {
                    dex_info!("LoadCatalog request_id={} page_size={}", request_id, page_size);
                    self.engine.load_catalog(request_id, page_size);
                }
                Effect::LoadDetail { request_id, key } => {
                    dex_info!("LoadDetail request_id={} key={}", request_id, key);
                    self.engine.load_detail(request_id, key);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            if let Some(event) = engine.try_recv() {
                let msg = map_event(event);
                if msg_tx.send(msg).is_err() {
                    // Host dropped its message channel; nothing left to do.
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded { request_id, result } => Msg::CatalogResolved {
            request_id,
            result: result.map_err(|err| {
                dex_warn!("Catalog load {} failed: {}", request_id, err);
                err.to_string()
            }),
        },
        EngineEvent::DetailLoaded { request_id, result } => Msg::DetailResolved {
            request_id,
            result: result.map_err(|err| match err.kind {
                FailureKind::NotFound => LoadFailure::NotFound,
                _ => {
                    dex_warn!("Detail load {} failed: {}", request_id, err);
                    LoadFailure::Failed {
                        reason: err.to_string(),
                    }
                }
            }),
        },
    }
}
