use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use pokedex_core::RequestId;

use crate::aggregate;
use crate::fetch::{ApiSettings, CatalogApi, ReqwestCatalogApi};
use crate::project;
use crate::types::{EngineEvent, FetchError};

enum EngineCommand {
    LoadCatalog {
        request_id: RequestId,
        page_size: usize,
    },
    LoadDetail {
        request_id: RequestId,
        key: String,
    },
}

/// Handle to the engine thread. Commands are accepted from any thread;
/// completions are polled with `try_recv`.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    /// Builds the HTTP client and spawns the engine thread, which owns a
    /// tokio runtime and runs each command as an independent task.
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(ReqwestCatalogApi::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(api.as_ref(), command, event_tx).await;
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn load_catalog(&self, request_id: RequestId, page_size: usize) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalog {
            request_id,
            page_size,
        });
    }

    pub fn load_detail(&self, request_id: RequestId, key: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadDetail {
            request_id,
            key: key.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn handle_command(
    api: &dyn CatalogApi,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::LoadCatalog {
            request_id,
            page_size,
        } => {
            let result = aggregate::load_catalog(api, page_size).await;
            let _ = event_tx.send(EngineEvent::CatalogLoaded { request_id, result });
        }
        EngineCommand::LoadDetail { request_id, key } => {
            let result = api
                .detail_by_key(&key)
                .await
                .map(|detail| project::to_detail_record(&detail));
            let _ = event_tx.send(EngineEvent::DetailLoaded { request_id, result });
        }
    }
}
