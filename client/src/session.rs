//! Page session lifecycle: splash timer and theme persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionController` is created by the portfolio page, started from a
//! mount effect, and torn down from `on_cleanup`. After each mutation the
//! page publishes `state()` into the `RwSignal<SessionState>` context so
//! components re-derive their styling.
//!
//! LIFECYCLE
//! =========
//! - `on_start` runs once: restores the theme, writes it through, and arms
//!   the splash task.
//! - `on_splash_elapsed` flips `loading` to false, once.
//! - `toggle_theme` flips `dark_mode` and persists via `on_theme_changed`.
//! - `teardown` cancels the splash task; later calls change nothing.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::state::session::SessionState;
use crate::util::splash_timer::{CancelToken, SPLASH_DURATION, SplashTask};
use crate::util::theme::{THEME_KEY, Theme};
use crate::util::theme_store::ThemeStore;

/// Owner of the session flags, the splash token, and the theme store.
#[derive(Debug)]
pub struct SessionController<S> {
    store: S,
    state: SessionState,
    splash: Option<CancelToken>,
    started: bool,
    torn_down: bool,
}

impl<S: ThemeStore> SessionController<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store, state: SessionState::default(), splash: None, started: false, torn_down: false }
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Restore the theme and arm the splash task.
    ///
    /// Returns the task for the caller to schedule, or `None` if the session
    /// was already started or torn down.
    pub fn on_start(&mut self) -> Option<SplashTask> {
        if self.started || self.torn_down {
            return None;
        }
        self.started = true;

        let theme = match self.store.load(THEME_KEY) {
            Ok(raw) => Theme::from_stored(raw.as_deref()),
            Err(e) => {
                log::warn!("theme preference unreadable, using light: {e}");
                Theme::Light
            }
        };
        log::debug!("theme restored: {}", theme.as_str());
        self.state.dark_mode = theme.is_dark();
        self.on_theme_changed(self.state.dark_mode);

        let task = SplashTask::new(SPLASH_DURATION);
        self.splash = Some(task.token.clone());
        Some(task)
    }

    /// Dismiss the splash screen if `token` is the live splash token.
    ///
    /// Returns `true` when this call moved the session to content.
    pub fn on_splash_elapsed(&mut self, token: &CancelToken) -> bool {
        if self.torn_down || token.is_cancelled() || !self.state.loading {
            return false;
        }
        let Some(live) = self.splash.as_ref() else {
            return false;
        };
        if !live.same_task(token) {
            return false;
        }
        self.splash = None;
        self.state.loading = false;
        log::debug!("splash dismissed");
        true
    }

    /// Flip dark mode and persist the new value.
    pub fn toggle_theme(&mut self) -> SessionState {
        if self.torn_down {
            return self.state;
        }
        self.state.dark_mode = self.state.theme().toggled().is_dark();
        self.on_theme_changed(self.state.dark_mode);
        self.state
    }

    /// Write `dark_mode` through to the durable store. Failures are logged
    /// and otherwise ignored.
    pub fn on_theme_changed(&mut self, dark_mode: bool) {
        if self.torn_down {
            return;
        }
        let theme = Theme::from_dark_mode(dark_mode);
        log::debug!("theme changed: {}", theme.as_str());
        if let Err(e) = self.store.save(THEME_KEY, theme.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
    }

    /// Cancel the pending splash task and freeze the session.
    pub fn teardown(&mut self) {
        if let Some(token) = self.splash.take() {
            token.cancel();
        }
        self.torn_down = true;
    }
}
