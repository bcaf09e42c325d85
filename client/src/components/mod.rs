//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio content and chrome. Each reads the
//! `RwSignal<SessionState>` context and derives its theme classes from it on
//! every render.

pub mod icon;
pub mod page_footer;
pub mod project_card;
pub mod resume;
pub mod section;
pub mod sidebar;
pub mod splash_screen;
pub mod theme_toggle;
