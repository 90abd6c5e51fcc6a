//! Event flow tests: console + event loop wired through real channels,
//! with a scripted lookup and in-memory storage.

mod save_flow_tests;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use kanal::AsyncReceiver;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use wordbank_config::Config;
use wordbank_core::state::AppState;
use wordbank_lookup::{Lookup, LookupError};
use wordbank_store::{KeyValueStorage, MemoryStorage, PersonalDictionary};
use wordbank_types::{AppEvent, LookupResult};

use crate::console::Console;
use crate::context::{AppContext, Store};
use crate::controller::ChannelSet;
use crate::events::event_loop;

pub(crate) const KEY: &str = "personalDictionary";

type Scripted = (Duration, Result<LookupResult, LookupError>);

/// Replays scripted answers in order and records every term it was asked for
#[derive(Default)]
pub(crate) struct FakeLookup {
    answers: Mutex<VecDeque<Scripted>>,
    calls: Mutex<Vec<String>>,
    panic_next: AtomicBool,
}

impl FakeLookup {
    pub(crate) fn answering(result: Result<LookupResult, LookupError>) -> Self {
        Self::default().then(Duration::ZERO, result)
    }

    pub(crate) fn then(self, delay: Duration, result: Result<LookupResult, LookupError>) -> Self {
        self.answers.lock().unwrap().push_back((delay, result));
        self
    }

    /// The next lookup panics instead of answering
    pub(crate) fn panicking(self) -> Self {
        self.panic_next.store(true, Ordering::SeqCst);
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Lookup for FakeLookup {
    async fn lookup(&self, term: &str) -> Result<LookupResult, LookupError> {
        self.calls.lock().unwrap().push(term.to_string());
        if self.panic_next.swap(false, Ordering::SeqCst) {
            panic!("lookup for '{term}' blew up");
        }
        let next = self.answers.lock().unwrap().pop_front();
        match next {
            Some((delay, result)) => {
                tokio::time::sleep(delay).await;
                result
            }
            None => Err(LookupError::Transport("no scripted answer".to_string())),
        }
    }
}

pub(crate) fn cat_result() -> LookupResult {
    let mut result = LookupResult::new("cat");
    result.push_definition("noun", "A small domesticated feline.");
    result.push_definition("verb", "To hoist an anchor.");
    result
}

pub(crate) struct Harness {
    pub console: Console<Vec<u8>>,
    pub state: Arc<AppState>,
    pub memory: Arc<MemoryStorage>,
    pub lookup: Arc<FakeLookup>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    _event_loop: JoinHandle<anyhow::Result<()>>,
}

impl Harness {
    pub(crate) fn new(lookup: FakeLookup) -> Self {
        let channels = ChannelSet::new();
        let state = Arc::new(AppState::new(Config::default()));
        let memory = Arc::new(MemoryStorage::new());
        let storage: Arc<dyn KeyValueStorage> = memory.clone();
        let store: Arc<Store> = Arc::new(PersonalDictionary::new(storage, KEY));
        let lookup = Arc::new(lookup);

        let ctx = AppContext::new(
            state.clone(),
            channels.app_to_ui.0.clone(),
            lookup.clone(),
            store,
        );
        let event_loop = tokio::spawn(event_loop(ctx, channels.ui_to_app.1.clone()));

        let console = Console::new(
            state.clone(),
            channels.ui_to_app.0.clone(),
            Vec::new(),
            "search> ".to_string(),
            false,
        );

        Self {
            console,
            state,
            memory,
            lookup,
            app_to_ui_rx: channels.app_to_ui.1.clone(),
            _event_loop: event_loop,
        }
    }

    /// Apply backend events until every request has been answered
    pub(crate) async fn settle(&mut self) {
        while self.console.pending() > 0 {
            let event = timeout(Duration::from_secs(2), self.app_to_ui_rx.recv())
                .await
                .expect("Timeout - backend never answered")
                .expect("Backend channel closed");
            self.console.apply(event).unwrap();
        }
    }

    pub(crate) async fn search(&mut self, raw: &str) {
        self.console.trigger_search(raw).await.unwrap();
        self.settle().await;
    }

    pub(crate) async fn save(&mut self) {
        self.console.trigger_save().await.unwrap();
        self.settle().await;
    }

    pub(crate) fn output(&self) -> String {
        String::from_utf8_lossy(self.console.output()).into_owned()
    }

    pub(crate) fn slot(&self) -> Option<String> {
        self.memory.get_item(KEY).unwrap()
    }
}
