//! Common effect presets

use super::{no_op, Effect, LastingEffect};
use crate::actor::Actor;
use crate::types::{DamageElement, DamageType, StatKind};

/// Common effect presets
///
/// Stat modifiers shift `value` only. The owning actor resets every stat to
/// base at the start of a tick, so these need no undo.
pub struct EffectPresets;

impl EffectPresets {
    /// Deal a fixed amount of damage once
    pub fn strike(
        source: &Actor,
        amount: i64,
        damage_type: DamageType,
        element: DamageElement,
    ) -> Effect {
        Effect::new(source, move |_, target| {
            target.damage(amount, damage_type, element)?;
            Ok(())
        })
    }

    /// Physical damage equal to the caster's Attack
    pub fn attack(source: &Actor) -> Effect {
        Effect::new(source, |source, target| {
            let amount = source.stat(StatKind::Attack)?;
            target.damage(amount, DamageType::Physical, DamageElement::Neutral)?;
            Ok(())
        })
    }

    /// Arcane damage of the given element equal to the caster's Magic
    pub fn spell(source: &Actor, element: DamageElement) -> Effect {
        Effect::new(source, move |source, target| {
            let amount = source.stat(StatKind::Magic)?;
            target.damage(amount, DamageType::Arcane, element)?;
            Ok(())
        })
    }

    /// Flat bonus (or penalty, if negative) to one stat
    pub fn stat_bonus(source: &Actor, stat: StatKind, amount: i64, duration: u32) -> LastingEffect {
        LastingEffect::new(
            source,
            duration,
            false,
            move |_, target| {
                let bonused = target.stat_mut(stat)?;
                bonused.value = bonused.value.saturating_add(amount);
                Ok(())
            },
            no_op,
        )
    }

    /// Percentage scaling of one stat's current value, saturating at the `i64` bounds
    pub fn stat_scaling(source: &Actor, stat: StatKind, percent: i64, duration: u32) -> LastingEffect {
        LastingEffect::new(
            source,
            duration,
            true,
            move |_, target| {
                let scaled = target.stat_mut(stat)?;
                let value = i128::from(scaled.value);
                let result = value + value * i128::from(percent) / 100;
                scaled.value = result.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64;
                Ok(())
            },
            no_op,
        )
    }

    /// Damage every tick the effect stays active
    pub fn damage_over_time(
        source: &Actor,
        amount: i64,
        damage_type: DamageType,
        element: DamageElement,
        duration: u32,
    ) -> LastingEffect {
        LastingEffect::new(
            source,
            duration,
            false,
            move |_, target| {
                target.damage(amount, damage_type, element)?;
                Ok(())
            },
            no_op,
        )
    }
}
