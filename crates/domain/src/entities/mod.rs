//! Domain entities - spells and the effects they produce

pub mod catalog;
mod spell;
mod spell_effect;

pub use spell::{Cantrip, LeveledSpell, Spell};
pub use spell_effect::{Damage, Healing, SpellEffect};
