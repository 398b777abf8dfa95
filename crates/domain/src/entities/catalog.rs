//! Concrete artificer spells.
//!
//! The roll passed to `cast` is the total the caller rolled for `dice()`;
//! it becomes the effect amount unchanged.

use crate::entities::{Cantrip, Damage, Healing, LeveledSpell, Spell, SpellEffect};
use crate::error::{DomainError, LevelError};
use crate::value_objects::{
    CastingRules, Component, DamageType, DiceFormula, LevelBounds, SpellLevel,
};

fn verbal_somatic() -> Vec<Component> {
    vec![Component::verbal(), Component::somatic()]
}

/// Defines a cantrip whose dice scale with class level.
macro_rules! define_cantrip {
    (
        $(#[$meta:meta])*
        $ty:ident {
            name: $name:literal,
            die_size: $die:literal,
            required: $required:expr,
            effect: |$roll:ident| $effect:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            base: Cantrip,
            required: Vec<Component>,
        }

        impl $ty {
            pub fn new(class_level: u8, components: Vec<Component>) -> Self {
                Self::from_base(Cantrip::new(class_level, components))
            }

            pub fn from_base(base: Cantrip) -> Self {
                Self {
                    base,
                    required: $required,
                }
            }
        }

        impl Spell for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn bounds(&self) -> LevelBounds {
                Cantrip::BOUNDS
            }

            fn level(&self) -> SpellLevel {
                SpellLevel::Cantrip
            }

            fn components(&self) -> &[Component] {
                &self.required
            }

            fn prepared_components(&self) -> &[Component] {
                self.base.provided_components()
            }

            fn dice(&self) -> Option<DiceFormula> {
                Some(DiceFormula::dice(self.base.dice_count(), $die))
            }

            fn cast(&self, components: &[Component], roll: u32) -> Result<SpellEffect, DomainError> {
                self.base.check_components(&self.required, components)?;
                let $roll = roll;
                Ok($effect.into())
            }
        }
    };
}

/// Defines a leveled spell that gains one die per level above its minimum.
macro_rules! define_leveled_spell {
    (
        $(#[$meta:meta])*
        $ty:ident {
            name: $name:literal,
            bounds: $bounds:expr,
            dice: ($count:literal, $die:literal),
            required: $required:expr,
            effect: |$roll:ident| $effect:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $ty {
            base: LeveledSpell,
            required: Vec<Component>,
        }

        impl $ty {
            pub const BOUNDS: LevelBounds = $bounds;

            pub fn new(level: SpellLevel, components: Vec<Component>) -> Result<Self, LevelError> {
                Self::with_rules(level, components, CastingRules::default())
            }

            pub fn with_rules(
                level: SpellLevel,
                components: Vec<Component>,
                rules: CastingRules,
            ) -> Result<Self, LevelError> {
                Ok(Self {
                    base: LeveledSpell::with_rules(level, components, Self::BOUNDS, rules)?,
                    required: $required,
                })
            }
        }

        impl Spell for $ty {
            fn name(&self) -> &str {
                $name
            }

            fn bounds(&self) -> LevelBounds {
                self.base.bounds()
            }

            fn level(&self) -> SpellLevel {
                self.base.level()
            }

            fn components(&self) -> &[Component] {
                &self.required
            }

            fn prepared_components(&self) -> &[Component] {
                self.base.provided_components()
            }

            fn dice(&self) -> Option<DiceFormula> {
                Some(
                    DiceFormula::dice($count, $die)
                        .with_extra_dice(self.base.levels_above_minimum()),
                )
            }

            fn cast(&self, components: &[Component], roll: u32) -> Result<SpellEffect, DomainError> {
                self.base.check_components(&self.required, components)?;
                let $roll = roll;
                Ok($effect.into())
            }
        }
    };
}

// =============================================================================
// Cantrips
// =============================================================================

define_cantrip! {
    /// Fire Bolt: a mote of fire hurled at a creature or object.
    FireBolt {
        name: "Fire Bolt",
        die_size: 10,
        required: verbal_somatic(),
        effect: |roll| Damage::new(DamageType::Fire, roll),
    }
}

define_cantrip! {
    /// Poison Spray: a puff of noxious gas from the caster's palm.
    PoisonSpray {
        name: "Poison Spray",
        die_size: 12,
        required: verbal_somatic(),
        effect: |roll| Damage::new(DamageType::Poison, roll),
    }
}

// =============================================================================
// Leveled spells
// =============================================================================

define_leveled_spell! {
    /// Cure Wounds: a touch that restores hit points.
    CureWounds {
        name: "Cure Wounds",
        bounds: LevelBounds::LEVELED,
        dice: (1, 8),
        required: verbal_somatic(),
        effect: |roll| Healing::new(roll),
    }
}

define_leveled_spell! {
    /// Thunderwave: a wave of thunderous force sweeping out from the caster.
    Thunderwave {
        name: "Thunderwave",
        bounds: LevelBounds::LEVELED,
        dice: (2, 8),
        required: verbal_somatic(),
        effect: |roll| Damage::new(DamageType::Thunder, roll),
    }
}

define_leveled_spell! {
    /// Acid Arrow: a shimmering green arrow that bursts in a spray of acid.
    AcidArrow {
        name: "Acid Arrow",
        bounds: LevelBounds::starting_at(SpellLevel::Level2),
        dice: (4, 4),
        required: vec![
            Component::verbal(),
            Component::somatic(),
            Component::material(AcidArrow::MATERIAL),
        ],
        effect: |roll| Damage::new(DamageType::Acid, roll),
    }
}

impl AcidArrow {
    pub const MATERIAL: &'static str = "powdered rhubarb leaf";
}
