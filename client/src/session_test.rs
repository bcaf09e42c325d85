use std::cell::RefCell;
use std::collections::HashMap;

use super::*;
use crate::state::session::Phase;
use crate::util::theme_store::StoreError;

#[derive(Default)]
struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    writes: RefCell<Vec<String>>,
}

impl MemoryStore {
    fn with_theme(raw: &str) -> Self {
        let store = Self::default();
        store.values.borrow_mut().insert(THEME_KEY.to_owned(), raw.to_owned());
        store
    }

    fn theme(&self) -> Option<String> {
        self.values.borrow().get(THEME_KEY).cloned()
    }
}

impl ThemeStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.borrow_mut().push(value.to_owned());
        Ok(())
    }
}

struct UnavailableStore;

impl ThemeStore for UnavailableStore {
    fn load(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Unavailable)
    }

    fn save(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable)
    }
}

// =============================================================
// Initial load
// =============================================================

#[test]
fn new_session_starts_in_splash_light() {
    let store = MemoryStore::default();
    let session = SessionController::new(&store);
    assert_eq!(session.state(), SessionState { loading: true, dark_mode: false });
    assert_eq!(session.state().phase(), Phase::Splash);
}

#[test]
fn start_without_stored_theme_stays_splash_light_before_timer() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let _task = session.on_start().expect("first start arms the splash task");

    assert_eq!(session.state().phase(), Phase::Splash);
    assert!(!session.state().dark_mode);
}

#[test]
fn start_writes_light_through_when_key_absent() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let _ = session.on_start();
    assert_eq!(store.theme().as_deref(), Some("light"));
}

#[test]
fn start_arms_three_second_task() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let task = session.on_start().expect("splash task");
    assert_eq!(task.delay, SPLASH_DURATION);
    assert!(!task.token.is_cancelled());
}

#[test]
fn start_runs_only_once() {
    let store = MemoryStore::with_theme("dark");
    let mut session = SessionController::new(&store);
    assert!(session.on_start().is_some());
    assert!(session.on_start().is_none());
    assert_eq!(store.writes.borrow().len(), 1);
}

// =============================================================
// Store literal mapping
// =============================================================

#[test]
fn stored_dark_literal_restores_dark_mode() {
    let store = MemoryStore::with_theme("dark");
    let mut session = SessionController::new(&store);
    let _ = session.on_start();
    assert!(session.state().dark_mode);
    assert_eq!(store.theme().as_deref(), Some("dark"));
}

#[test]
fn other_stored_strings_restore_light_mode() {
    for raw in ["light", "Dark", "true", "", "dark\n"] {
        let store = MemoryStore::with_theme(raw);
        let mut session = SessionController::new(&store);
        let _ = session.on_start();
        assert!(!session.state().dark_mode, "{raw:?}");
        assert_eq!(store.theme().as_deref(), Some("light"), "{raw:?}");
    }
}

// =============================================================
// Timer transition
// =============================================================

#[test]
fn splash_transitions_to_content_at_three_seconds() {
    for stored in ["light", "dark"] {
        let store = MemoryStore::with_theme(stored);
        let mut session = SessionController::new(&store);
        let task = session.on_start().expect("splash task");

        assert_eq!(task.delay, SPLASH_DURATION);
        assert!(session.on_splash_elapsed(&task.token));
        assert_eq!(session.state().phase(), Phase::Content);
        assert_eq!(session.state().dark_mode, stored == "dark");
    }
}

#[test]
fn content_never_reverts_to_splash() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let task = session.on_start().expect("splash task");
    assert!(session.on_splash_elapsed(&task.token));

    assert!(!session.on_splash_elapsed(&task.token));
    let _ = session.toggle_theme();
    let _ = session.toggle_theme();
    assert!(session.on_start().is_none());
    assert_eq!(session.state().phase(), Phase::Content);
}

#[test]
fn foreign_token_does_not_dismiss_splash() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let _task = session.on_start().expect("splash task");

    assert!(!session.on_splash_elapsed(&CancelToken::new()));
    assert!(session.state().loading);
}

#[test]
fn elapsed_before_start_is_ignored() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    assert!(!session.on_splash_elapsed(&CancelToken::new()));
    assert!(session.state().loading);
}

#[test]
fn toggling_during_splash_keeps_splash() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let _task = session.on_start().expect("splash task");
    let state = session.toggle_theme();
    assert!(state.loading);
    assert!(state.dark_mode);
}

// =============================================================
// Theme persistence
// =============================================================

#[test]
fn toggle_from_light_writes_dark_and_round_trips() {
    let store = MemoryStore::default();
    {
        let mut session = SessionController::new(&store);
        let _ = session.on_start();
        let state = session.toggle_theme();
        assert!(state.dark_mode);
        assert_eq!(store.theme().as_deref(), Some("dark"));
        session.teardown();
    }

    let mut fresh = SessionController::new(&store);
    let _ = fresh.on_start();
    assert!(fresh.state().dark_mode);
}

#[test]
fn two_toggles_restore_original_value_and_store() {
    for stored in ["light", "dark"] {
        let store = MemoryStore::with_theme(stored);
        let mut session = SessionController::new(&store);
        let _ = session.on_start();
        let original = session.state().dark_mode;

        let _ = session.toggle_theme();
        let state = session.toggle_theme();

        assert_eq!(state.dark_mode, original);
        assert_eq!(store.theme().as_deref(), Some(stored));
    }
}

#[test]
fn every_toggle_is_written_through_in_order() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let _ = session.on_start();
    let _ = session.toggle_theme();
    let _ = session.toggle_theme();
    let _ = session.toggle_theme();
    assert_eq!(*store.writes.borrow(), vec!["light", "dark", "light", "dark"]);
}

#[test]
fn on_theme_changed_persists_given_value() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    session.on_theme_changed(true);
    assert_eq!(store.theme().as_deref(), Some("dark"));
    session.on_theme_changed(false);
    assert_eq!(store.theme().as_deref(), Some("light"));
}

// =============================================================
// Store failure
// =============================================================

#[test]
fn unavailable_store_falls_back_to_light() {
    let mut session = SessionController::new(UnavailableStore);
    let task = session.on_start().expect("splash task still armed");
    assert!(!session.state().dark_mode);
    assert!(session.on_splash_elapsed(&task.token));
}

#[test]
fn unavailable_store_still_toggles_in_memory() {
    let mut session = SessionController::new(UnavailableStore);
    let _ = session.on_start();
    assert!(session.toggle_theme().dark_mode);
    assert!(!session.toggle_theme().dark_mode);
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn teardown_before_timer_cancels_task_and_blocks_updates() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let task = session.on_start().expect("splash task");
    let before = session.state();

    session.teardown();

    assert!(task.token.is_cancelled());
    assert!(!session.on_splash_elapsed(&task.token));
    assert_eq!(session.toggle_theme(), before);
    assert_eq!(session.state(), before);
    assert_eq!(*store.writes.borrow(), vec!["light"]);
}

#[test]
fn teardown_after_timer_is_harmless() {
    let store = MemoryStore::default();
    let mut session = SessionController::new(&store);
    let task = session.on_start().expect("splash task");
    assert!(session.on_splash_elapsed(&task.token));

    session.teardown();
    session.teardown();
    assert_eq!(session.state().phase(), Phase::Content);
}

#[test]
fn start_after_teardown_is_noop() {
    let store = MemoryStore::with_theme("dark");
    let mut session = SessionController::new(&store);
    session.teardown();
    assert!(session.on_start().is_none());
    assert!(!session.state().dark_mode);
    assert!(store.writes.borrow().is_empty());
}
