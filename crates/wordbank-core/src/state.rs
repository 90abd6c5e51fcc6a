use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::RwLock;
use wordbank_config::Config;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub search: Arc<SearchControl>,
    pub screen: Screen,
    generation: AtomicU64,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            search: Arc::new(SearchControl::default()),
            screen: Screen::default(),
            generation: AtomicU64::new(0),
        }
    }

    /// Stamp a newly issued lookup
    pub fn next_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// False once a later lookup has been issued
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Search input plus its trigger's disabled flag
#[derive(Debug, Default)]
pub struct SearchControl {
    input: Mutex<String>,
    disabled: AtomicBool,
}

impl SearchControl {
    pub fn set_input(&self, text: &str) {
        *lock(&self.input) = text.to_string();
    }

    pub fn input(&self) -> String {
        lock(&self.input).clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    /// Disable the trigger for one lookup.
    ///
    /// Returns `None` if a lookup already holds it. The returned guard
    /// re-enables the trigger and clears the input when dropped.
    pub fn begin(self: &Arc<Self>) -> Option<SearchGuard> {
        self.disabled
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()
            .map(|_| SearchGuard {
                control: self.clone(),
            })
    }
}

#[derive(Debug)]
pub struct SearchGuard {
    control: Arc<SearchControl>,
}

impl Drop for SearchGuard {
    fn drop(&mut self) {
        lock(&self.control.input).clear();
        self.control.disabled.store(false, Ordering::SeqCst);
        tracing::debug!("Search control released");
    }
}

/// Two display regions, each replaced wholesale on every render
#[derive(Debug, Default)]
pub struct Screen {
    results: Mutex<String>,
    personal: Mutex<String>,
}

impl Screen {
    pub fn replace_results(&self, text: String) {
        *lock(&self.results) = text;
    }

    pub fn results(&self) -> String {
        lock(&self.results).clone()
    }

    pub fn replace_personal(&self, text: String) {
        *lock(&self.personal) = text;
    }

    pub fn personal(&self) -> String {
        lock(&self.personal).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_blocks_second_search_and_releases_on_drop() {
        let control = Arc::new(SearchControl::default());
        control.set_input("cat");

        let guard = control.begin().unwrap();
        assert!(control.is_disabled());
        assert!(control.begin().is_none());

        drop(guard);
        assert!(!control.is_disabled());
        assert_eq!(control.input(), "");
        assert!(control.begin().is_some());
    }

    #[test]
    fn guard_releases_on_panic() {
        let control = Arc::new(SearchControl::default());
        let inner = control.clone();

        let result = std::thread::spawn(move || {
            let _guard = inner.begin().unwrap();
            panic!("lookup blew up");
        })
        .join();

        assert!(result.is_err());
        assert!(!control.is_disabled());
    }

    #[test]
    fn later_generation_supersedes_earlier() {
        let state = AppState::new(Config::default());
        let first = state.next_generation();
        assert!(state.is_current(first));

        let second = state.next_generation();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }
}
