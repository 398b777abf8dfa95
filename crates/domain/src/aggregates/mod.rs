//! Aggregates - the targets spell effects resolve against
//!
//! Each aggregate:
//! - Exposes behavior through methods, not public fields
//! - Keeps its own invariants (hit points never leave `0..=max_hp`)
//! - Reports what happened from its mutations
//!
//! `Target` is the seam: effects only ever talk to a `Target`, so callers can
//! wrap `Creature` or `Object` in their own types (a `Commoner`, a `Rope`)
//! and add resistances there.

pub mod creature;
pub mod object;
pub mod target;

pub use creature::{Creature, CreatureState};
pub use object::{Object, ObjectState};
pub use target::Target;

#[cfg(test)]
pub use target::MockTarget;
