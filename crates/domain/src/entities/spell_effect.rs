//! Spell effects - what a cast produces
//!
//! A cast yields either damage of some type or healing. Effects are plain
//! values; applying one to a target is the only thing they do, and they
//! leave all accounting (resistances, thresholds, death) to the target.

use serde::{Deserialize, Serialize};

use crate::aggregates::Target;
use crate::events::{EffectOutcome, HealOutcome};
use crate::value_objects::DamageType;

/// Damage caused by a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    damage_type: DamageType,
    amount: u32,
}

impl Damage {
    pub fn new(damage_type: DamageType, amount: u32) -> Self {
        Self {
            damage_type,
            amount,
        }
    }

    #[inline]
    pub fn damage_type(&self) -> DamageType {
        self.damage_type
    }

    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Deal the damage to `target` as-is.
    pub fn take_effect<T: Target + ?Sized>(&self, target: &mut T) -> T::State {
        target.damage(self)
    }
}

/// A healing effect of a spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Healing {
    amount: u32,
}

impl Healing {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }

    #[inline]
    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn take_effect<T: Target + ?Sized>(&self, target: &mut T) -> HealOutcome {
        target.heal(self.amount)
    }
}

/// The result of a spell.
///
/// # Example
///
/// ```
/// use artificer_domain::aggregates::{Creature, CreatureState, Target};
/// use artificer_domain::entities::{Damage, SpellEffect};
/// use artificer_domain::events::EffectOutcome;
/// use artificer_domain::value_objects::DamageType;
///
/// let mut goblin = Creature::new(7, 15);
/// let effect = SpellEffect::from(Damage::new(DamageType::Fire, 9));
///
/// assert_eq!(effect.take_effect(&mut goblin), EffectOutcome::Damaged(CreatureState::Dead));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SpellEffect {
    Damage(Damage),
    Healing(Healing),
}

impl SpellEffect {
    /// Hit points the effect takes away or restores.
    pub fn amount(&self) -> u32 {
        match self {
            Self::Damage(damage) => damage.amount(),
            Self::Healing(healing) => healing.amount(),
        }
    }

    /// Run the effect on `target`.
    pub fn take_effect<T: Target + ?Sized>(&self, target: &mut T) -> EffectOutcome<T::State> {
        tracing::debug!("Applying {:?}", self);
        match self {
            Self::Damage(damage) => EffectOutcome::Damaged(damage.take_effect(target)),
            Self::Healing(healing) => EffectOutcome::Healed(healing.take_effect(target)),
        }
    }
}

impl From<Damage> for SpellEffect {
    fn from(damage: Damage) -> Self {
        Self::Damage(damage)
    }
}

impl From<Healing> for SpellEffect {
    fn from(healing: Healing) -> Self {
        Self::Healing(healing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregates::{CreatureState, MockTarget, Object, ObjectState};

    mod delegation {
        use super::*;

        #[test]
        fn damage_calls_only_target_damage() {
            let mut target = MockTarget::new();
            target
                .expect_damage()
                .withf(|damage| damage.amount() == 7 && damage.damage_type() == DamageType::Acid)
                .times(1)
                .returning(|_| CreatureState::Alive);
            target.expect_heal().never();

            let effect = SpellEffect::Damage(Damage::new(DamageType::Acid, 7));
            assert_eq!(
                effect.take_effect(&mut target),
                EffectOutcome::Damaged(CreatureState::Alive)
            );
        }

        #[test]
        fn healing_calls_only_target_heal() {
            let mut target = MockTarget::new();
            target
                .expect_heal()
                .withf(|amount| *amount == 4)
                .times(1)
                .returning(|_| HealOutcome::AlreadyFull);
            target.expect_damage().never();

            let effect = SpellEffect::Healing(Healing::new(4));
            assert_eq!(
                effect.take_effect(&mut target),
                EffectOutcome::Healed(HealOutcome::AlreadyFull)
            );
        }

        #[test]
        fn damage_reports_target_state() {
            let mut target = MockTarget::new();
            target
                .expect_damage()
                .times(1)
                .returning(|_| CreatureState::Dead);

            let state = Damage::new(DamageType::Force, 1).take_effect(&mut target);
            assert_eq!(state, CreatureState::Dead);
        }
    }

    mod against_real_targets {
        use super::*;

        #[test]
        fn damage_against_object_respects_threshold() {
            let mut crate_box = Object::new(10, 5);
            let outcome = SpellEffect::from(Damage::new(DamageType::Thunder, 5))
                .take_effect(&mut crate_box);
            assert_eq!(outcome, EffectOutcome::Damaged(ObjectState::Whole));
            assert_eq!(crate_box.hp(), 10);
        }

        #[test]
        fn healing_through_dyn_target() {
            let mut creature = crate::aggregates::Creature::new(10, 10).with_hp(2);
            let target: &mut dyn Target<State = CreatureState> = &mut creature;
            let outcome = SpellEffect::from(Healing::new(3)).take_effect(target);
            assert_eq!(
                outcome,
                EffectOutcome::Healed(HealOutcome::Healed {
                    amount_healed: 3,
                    new_hp: 5
                })
            );
        }
    }

    #[test]
    fn amount_covers_both_variants() {
        assert_eq!(SpellEffect::from(Damage::new(DamageType::Cold, 6)).amount(), 6);
        assert_eq!(SpellEffect::from(Healing::new(2)).amount(), 2);
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(SpellEffect::from(Damage::new(DamageType::Fire, 3))).unwrap();
        assert_eq!(json["type"], "damage");
        assert_eq!(json["damageType"], "fire");
        assert_eq!(json["amount"], 3);

        let back: SpellEffect = serde_json::from_value(json).unwrap();
        assert_eq!(back, SpellEffect::Damage(Damage::new(DamageType::Fire, 3)));
    }
}
