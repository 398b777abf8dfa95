//! Domain Events
//!
//! Return types from target mutations, communicating what happened when a
//! spell effect changed a creature or object.

pub mod target_events;

pub use target_events::*;
