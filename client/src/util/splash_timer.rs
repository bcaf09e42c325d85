//! One-shot splash timer with a cancellation token.
//!
//! A `SplashTask` pairs the fixed delay with a `CancelToken`. The session
//! controller keeps a clone of the token and cancels it on teardown; the
//! scheduler checks the token after the delay and skips the callback once it
//! is cancelled, so a torn-down page never receives a late update.

#[cfg(test)]
#[path = "splash_timer_test.rs"]
mod splash_timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// How long the splash screen stays up after session start.
pub const SPLASH_DURATION: Duration = Duration::from_millis(3000);

/// Shared liveness flag for a deferred task.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Whether `other` is a clone of this token.
    #[must_use]
    pub fn same_task(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A deferred splash dismissal waiting to be scheduled.
#[derive(Clone, Debug)]
pub struct SplashTask {
    pub delay: Duration,
    pub token: CancelToken,
}

impl SplashTask {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self { delay, token: CancelToken::new() }
    }
}

/// Run `on_elapsed` after the task's delay unless its token was cancelled.
///
/// Browser-only. Server rendering never leaves the splash state, so outside
/// `hydrate` the task is dropped without firing.
pub fn schedule<F>(task: SplashTask, on_elapsed: F)
where
    F: FnOnce(CancelToken) + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(task.delay).await;
            if task.token.is_cancelled() {
                log::debug!("splash timer cancelled before firing");
                return;
            }
            on_elapsed(task.token);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (task, on_elapsed);
    }
}
