use std::sync::Arc;

use kanal::AsyncSender;
use wordbank_core::state::AppState;
use wordbank_lookup::Lookup;
use wordbank_store::{KeyValueStorage, PersonalDictionary};
use wordbank_types::AppEvent;

pub type Store = PersonalDictionary<Arc<dyn KeyValueStorage>>;

/// Shared dependencies of the event handlers
///
/// Cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppContext {
    pub state: Arc<AppState>,
    /// Backend -> UI
    pub event_tx: AsyncSender<AppEvent>,
    pub lookup: Arc<dyn Lookup>,
    pub store: Arc<Store>,
}

impl AppContext {
    pub fn new(
        state: Arc<AppState>,
        event_tx: AsyncSender<AppEvent>,
        lookup: Arc<dyn Lookup>,
        store: Arc<Store>,
    ) -> Self {
        Self {
            state,
            event_tx,
            lookup,
            store,
        }
    }

    /// Send to the UI, logging instead of failing when it is gone
    pub async fn emit(&self, event: AppEvent) {
        if let Err(e) = self.event_tx.send(event).await {
            tracing::error!("Failed to send event to UI: {}", e);
        }
    }
}
