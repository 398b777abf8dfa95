//! Casting a spell at a target, end to end.

use crate::aggregates::Target;
use crate::entities::Spell;
use crate::error::DomainError;
use crate::events::EffectOutcome;
use crate::value_objects::Component;

/// Cast `spell` with the supplied components and roll, then apply the
/// effect to `target`.
///
/// The target is left untouched if the cast fails.
///
/// # Example
///
/// ```
/// use artificer_domain::aggregates::{Creature, CreatureState, Target};
/// use artificer_domain::entities::catalog::FireBolt;
/// use artificer_domain::events::EffectOutcome;
/// use artificer_domain::resolve_spell;
/// use artificer_domain::value_objects::Component;
///
/// let components = vec![Component::verbal(), Component::somatic()];
/// let fire_bolt = FireBolt::new(3, components.clone());
/// let mut kobold = Creature::new(5, 12);
///
/// let outcome = resolve_spell(&fire_bolt, &components, 8, &mut kobold).unwrap();
/// assert_eq!(outcome, EffectOutcome::Damaged(CreatureState::Dead));
/// assert_eq!(kobold.hp(), 0);
/// ```
pub fn resolve_spell<S, T>(
    spell: &S,
    components: &[Component],
    roll: u32,
    target: &mut T,
) -> Result<EffectOutcome<T::State>, DomainError>
where
    S: Spell + ?Sized,
    T: Target + ?Sized,
{
    let span = tracing::debug_span!("resolve_spell", spell = spell.name(), level = %spell.level());
    let _enter = span.enter();

    let effect = spell.cast(components, roll)?;
    let outcome = effect.take_effect(target);
    tracing::debug!("{} resolved: {:?}", spell.name(), outcome);
    Ok(outcome)
}
