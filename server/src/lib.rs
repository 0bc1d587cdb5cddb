use std::path::PathBuf;

use anyhow::Result;
use tokio::sync::Mutex;
use wheelhouse_types::stats::StatsDocument;

mod api;
pub use api::Api;

mod dashboard;
mod playlist;
pub use playlist::{load_playlist, parse_playlist_line, SongEntry};
mod store;
pub use store::Store;

/// Runtime configuration assembled from CLI arguments.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Where the statistics document is persisted.
    pub data_path: PathBuf,
    /// Optional plain-text song ID list shown on the dashboard.
    pub playlist_path: Option<PathBuf>,
}

/// Shared state handed to every handler.
///
/// The mutex is the single-writer guard: a mutating request holds it across
/// its whole load-mutate-save cycle, so two concurrent posts cannot trade
/// stale documents and drop each other's updates.
pub struct AppState {
    pub config: ServerConfig,
    store: Mutex<Store>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let store = Store::new(config.data_path.clone());
        Self {
            config,
            store: Mutex::new(store),
        }
    }

    /// Loads the document, applies `mutate`, and writes the result back,
    /// holding the store lock for the whole cycle.
    pub async fn update_document<F>(&self, mutate: F) -> Result<StatsDocument>
    where
        F: FnOnce(&mut StatsDocument),
    {
        let store = self.store.lock().await;
        let mut doc = store.load();
        mutate(&mut doc);
        store.save(&doc)?;
        Ok(doc)
    }

    /// Loads the current document without mutating it.
    pub async fn load_document(&self) -> StatsDocument {
        self.store.lock().await.load()
    }
}
