//! # artificer-domain
//!
//! Spellcasting rules for tabletop play: spells and their components,
//! the levels they are cast at, and the damage or healing they apply to
//! creatures and objects.
//!
//! ## Flow
//!
//! 1. Build a spell from `entities::catalog` (or your own `Spell` impl).
//!    Leveled spells reject levels below their minimum with a `LevelError`.
//! 2. `Spell::cast` checks the supplied components and turns the caller's
//!    roll into a `SpellEffect`.
//! 3. `SpellEffect::take_effect` hands the effect to a `Target`, which
//!    updates its own hit points and state.
//!
//! `resolve_spell` does all three in one call.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod game_systems;
pub mod resolution;
pub mod value_objects;

pub use aggregates::{Creature, CreatureState, Object, ObjectState, Target};
pub use entities::{Cantrip, Damage, Healing, LeveledSpell, Spell, SpellEffect};
pub use error::{ComponentError, DomainError, LevelError};
pub use events::{EffectOutcome, HealOutcome};
pub use game_systems::{Artificer, ClassTable, ClassTableRow, SpellcastingClass};
pub use resolution::resolve_spell;
pub use value_objects::{
    CastingRules, Component, ComponentKind, DamageType, DiceFormula, LevelBounds,
    MaterialComponent, SpellLevel,
};
