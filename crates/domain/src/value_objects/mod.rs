//! Value objects - Immutable objects defined by their attributes

mod casting_rules;
mod component;
mod damage_type;
mod dice;
mod spell_level;

pub use casting_rules::CastingRules;
pub use component::{check_components, Component, ComponentKind, MaterialComponent};
pub use damage_type::DamageType;
pub use dice::{DiceFormula, DiceParseError};
pub use spell_level::{LevelBounds, SpellLevel};
