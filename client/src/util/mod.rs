//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, timers,
//! clock, document attributes) from page and component logic so the session
//! lifecycle can be tested without a browser.

pub mod date;
pub mod splash_timer;
pub mod theme;
pub mod theme_store;
