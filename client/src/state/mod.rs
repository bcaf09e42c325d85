//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State published to components is a plain snapshot held in a context
//! signal. Mutation goes through `crate::session::SessionController`, which
//! owns persistence and the splash timer.

pub mod session;
