#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::theme::Theme;

/// Which view the page renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Timed splash screen shown at session start.
    Splash,
    /// Full portfolio content. Terminal for the session.
    Content,
}

/// Snapshot of the page session, provided via context as
/// `RwSignal<SessionState>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub loading: bool,
    pub dark_mode: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { loading: true, dark_mode: false }
    }
}

impl SessionState {
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.loading { Phase::Splash } else { Phase::Content }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        Theme::from_dark_mode(self.dark_mode)
    }
}
