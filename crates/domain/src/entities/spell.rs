//! Spells and the casting state they are built on.
//!
//! `Spell` is the interface every castable spell implements. Concrete spells
//! embed one of two bases:
//!
//! - [`Cantrip`]: fixed at level 0, scales with the caster's class level
//! - [`LeveledSpell`]: built at a slot level, rejected below the spell's minimum
//!
//! Neither base implements `Spell` itself, so neither can be cast on its own.

use crate::error::{ComponentError, DomainError, LevelError};
use crate::value_objects::{
    check_components, CastingRules, Component, DiceFormula, LevelBounds, SpellLevel,
};

use super::SpellEffect;

/// A castable spell.
///
/// # Example
///
/// ```
/// use artificer_domain::entities::{Spell, SpellEffect};
/// use artificer_domain::entities::catalog::CureWounds;
/// use artificer_domain::value_objects::{Component, SpellLevel};
///
/// let spell = CureWounds::new(SpellLevel::Level2, vec![]).unwrap();
/// assert_eq!(spell.dice().map(|d| d.to_string()), Some("2d8".to_string()));
///
/// let effect = spell.cast(&[Component::verbal(), Component::somatic()], 11).unwrap();
/// assert_eq!(effect.amount(), 11);
/// assert!(matches!(effect, SpellEffect::Healing(_)));
/// ```
pub trait Spell {
    /// Display name of the spell
    fn name(&self) -> &str;

    /// Lowest and highest level this spell may be cast at
    fn bounds(&self) -> LevelBounds;

    /// Level this instance is cast at
    fn level(&self) -> SpellLevel;

    /// Components the caster must supply, in the order the spell lists them
    fn components(&self) -> &[Component];

    /// Components handed over when the spell was prepared
    fn prepared_components(&self) -> &[Component];

    /// Dice the caller should roll for this cast, if the spell rolls any
    fn dice(&self) -> Option<DiceFormula> {
        None
    }

    /// Cast the spell with the supplied components and the caller's roll.
    fn cast(&self, components: &[Component], roll: u32) -> Result<SpellEffect, DomainError>;

    /// Cast with the components supplied at preparation.
    fn cast_prepared(&self, roll: u32) -> Result<SpellEffect, DomainError> {
        self.cast(self.prepared_components(), roll)
    }
}

fn ensure_components(
    rules: &CastingRules,
    required: &[Component],
    provided: &[Component],
) -> Result<(), ComponentError> {
    if !rules.enforce_components {
        return Ok(());
    }
    check_components(required, provided).map_err(|err| {
        tracing::debug!("Component check failed: {}", err);
        err
    })
}

/// Casting state shared by all cantrips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cantrip {
    class_level: u8,
    provided_components: Vec<Component>,
    rules: CastingRules,
}

impl Cantrip {
    pub const BOUNDS: LevelBounds = LevelBounds::CANTRIP;

    /// Class levels at which a cantrip gains another die.
    const SCALING_LEVELS: [u8; 3] = [5, 11, 17];

    pub fn new(class_level: u8, components: Vec<Component>) -> Self {
        Self {
            class_level,
            provided_components: components,
            rules: CastingRules::default(),
        }
    }

    pub fn with_rules(mut self, rules: CastingRules) -> Self {
        self.rules = rules;
        self
    }

    #[inline]
    pub fn class_level(&self) -> u8 {
        self.class_level
    }

    #[inline]
    pub fn provided_components(&self) -> &[Component] {
        &self.provided_components
    }

    #[inline]
    pub fn rules(&self) -> &CastingRules {
        &self.rules
    }

    /// Damage dice at the caster's class level: 1, then one more at 5, 11 and 17.
    pub fn dice_count(&self) -> u8 {
        1 + Self::SCALING_LEVELS
            .iter()
            .filter(|&&level| self.class_level >= level)
            .count() as u8
    }

    /// Check supplied components against `required`, if the rules ask for it.
    pub fn check_components(
        &self,
        required: &[Component],
        provided: &[Component],
    ) -> Result<(), ComponentError> {
        ensure_components(&self.rules, required, provided)
    }
}

/// Casting state shared by all spells of first level and up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeveledSpell {
    level: SpellLevel,
    bounds: LevelBounds,
    provided_components: Vec<Component>,
    rules: CastingRules,
}

impl LeveledSpell {
    /// Build at `level` under the default casting rules.
    ///
    /// Fails with `LevelError::BelowMinimum` when `level < bounds.minimum`.
    pub fn new(
        level: SpellLevel,
        components: Vec<Component>,
        bounds: LevelBounds,
    ) -> Result<Self, LevelError> {
        Self::with_rules(level, components, bounds, CastingRules::default())
    }

    /// Build at `level` under explicit rules.
    pub fn with_rules(
        level: SpellLevel,
        components: Vec<Component>,
        bounds: LevelBounds,
        rules: CastingRules,
    ) -> Result<Self, LevelError> {
        if let Err(err) = bounds.check(level, &rules) {
            tracing::debug!("Rejected leveled spell: {}", err);
            return Err(err);
        }

        Ok(Self {
            level,
            bounds,
            provided_components: components,
            rules,
        })
    }

    #[inline]
    pub fn level(&self) -> SpellLevel {
        self.level
    }

    #[inline]
    pub fn bounds(&self) -> LevelBounds {
        self.bounds
    }

    #[inline]
    pub fn provided_components(&self) -> &[Component] {
        &self.provided_components
    }

    #[inline]
    pub fn rules(&self) -> &CastingRules {
        &self.rules
    }

    /// Slot levels above the spell's minimum this instance is cast at.
    pub fn levels_above_minimum(&self) -> u8 {
        self.level
            .as_number()
            .saturating_sub(self.bounds.minimum.as_number())
    }

    /// Check supplied components against `required`, if the rules ask for it.
    pub fn check_components(
        &self,
        required: &[Component],
        provided: &[Component],
    ) -> Result<(), ComponentError> {
        ensure_components(&self.rules, required, provided)
    }
}
