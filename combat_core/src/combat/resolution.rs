//! Damage resolution - Apply incoming damage to an Actor

use super::result::DamageReport;
use crate::actor::Actor;
use crate::defense::mitigate;
use crate::error::CombatError;
use crate::types::{DamageElement, DamageType};
use tracing::debug;

/// Resolve incoming damage against a defending actor
///
/// 1. Looks up the stat that mitigates `damage_type` (Defense for Physical,
///    Resistance for Arcane, none for Pure)
/// 2. Scales the damage by `scale / (scale + stat)`, rounding half-to-even
/// 3. Subtracts the result from HP, which clamps at 0
///
/// `element` is carried into the report but does not change the outcome.
pub fn resolve_damage(
    defender: &mut Actor,
    amount: i64,
    damage_type: DamageType,
    element: DamageElement,
    scale: f64,
) -> Result<DamageReport, CombatError> {
    let stat_value = match damage_type.mitigating_stat() {
        Some(kind) => Some(defender.stat(kind)?.value),
        None => None,
    };
    let final_amount = mitigate(amount, damage_type, stat_value, scale)?;

    let hp_before = defender.hp.value();
    defender.hp = defender.hp - final_amount;
    let hp_after = defender.hp.value();

    let report = DamageReport {
        damage_type,
        element,
        raw_amount: amount,
        final_amount,
        hp_before,
        hp_after,
        is_killing_blow: hp_before > 0 && hp_after == 0,
    };

    debug!(
        actor = %defender.name,
        ?element,
        raw = amount,
        hp_before,
        hp_after,
        "{}",
        report.summary()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CombatConstants;
    use crate::stat::StatLine;
    use crate::types::StatKind;

    fn make_actor(hp: i64) -> Actor {
        Actor::new("test_actor", hp, &StatLine::uniform(5)).unwrap()
    }

    #[test]
    fn test_physical_vs_defense_five() {
        let mut actor = make_actor(200);
        let report = actor
            .damage(100, DamageType::Physical, DamageElement::Neutral)
            .unwrap();

        assert_eq!(report.final_amount, 95);
        assert_eq!(actor.hp.value(), 105);
    }

    #[test]
    fn test_small_physical_hit() {
        let mut actor = make_actor(10);
        actor
            .damage(5, DamageType::Physical, DamageElement::Neutral)
            .unwrap();

        // round(10 - 4.76) = 5
        assert_eq!(actor.hp.value(), 5);
    }

    #[test]
    fn test_arcane_uses_resistance() {
        let mut actor = make_actor(100);
        actor.stat_mut(StatKind::Resistance).unwrap().value = 0;
        actor.stat_mut(StatKind::Defense).unwrap().value = 500;

        let report = actor
            .damage(40, DamageType::Arcane, DamageElement::Light)
            .unwrap();
        assert_eq!(report.final_amount, 40);
        assert_eq!(actor.hp.value(), 60);
    }

    #[test]
    fn test_pure_ignores_stats() {
        let mut actor = make_actor(100);
        actor.stat_mut(StatKind::Defense).unwrap().value = 900;
        actor.stat_mut(StatKind::Resistance).unwrap().value = 900;

        let report = actor
            .damage(33, DamageType::Pure, DamageElement::Neutral)
            .unwrap();
        assert_eq!(report.final_amount, 33);
        assert_eq!(report.mitigated_amount(), 0);
    }

    #[test]
    fn test_element_is_inert() {
        let amounts: Vec<i64> = DamageElement::all()
            .iter()
            .map(|element| {
                let mut actor = make_actor(500);
                actor
                    .damage(100, DamageType::Physical, *element)
                    .unwrap()
                    .final_amount
            })
            .collect();

        assert!(amounts.iter().all(|amount| *amount == 95));
    }

    #[test]
    fn test_pure_needs_no_stats() {
        let mut actor = make_actor(10);
        actor.stats_mut().clear();
        actor
            .damage(3, DamageType::Pure, DamageElement::Neutral)
            .unwrap();
        assert_eq!(actor.hp.value(), 7);
    }

    #[test]
    fn test_missing_defense_errors() {
        let mut actor = make_actor(10);
        actor.stats_mut().remove(&StatKind::Defense);

        let err = actor
            .damage(3, DamageType::Physical, DamageElement::Neutral)
            .unwrap_err();
        assert_eq!(err, CombatError::MissingStat(StatKind::Defense));
        assert_eq!(actor.hp.value(), 10);
    }

    #[test]
    fn test_overkill_clamps_and_flags() {
        let mut actor = make_actor(10);
        let report = actor
            .damage(1000, DamageType::Pure, DamageElement::Neutral)
            .unwrap();

        assert_eq!(actor.hp.value(), 0);
        assert!(report.is_killing_blow);
        assert!(!actor.is_alive());

        // Already dead: no second killing blow
        let report = actor
            .damage(5, DamageType::Pure, DamageElement::Neutral)
            .unwrap();
        assert!(!report.is_killing_blow);
    }

    #[test]
    fn test_negative_damage_heals() {
        let mut actor = make_actor(10);
        let report = actor
            .damage(-6, DamageType::Pure, DamageElement::Neutral)
            .unwrap();

        assert_eq!(report.hp_change(), 6);
        assert_eq!(actor.hp.value(), 16);
    }

    #[test]
    fn test_extreme_amounts_saturate() {
        let mut actor = make_actor(100);
        let report = actor
            .damage(i64::MIN, DamageType::Pure, DamageElement::Neutral)
            .unwrap();
        assert_eq!(actor.hp.value(), i64::MAX);
        assert_eq!(report.hp_after, i64::MAX);

        let report = actor
            .damage(i64::MAX, DamageType::Pure, DamageElement::Neutral)
            .unwrap();
        assert_eq!(actor.hp.value(), 0);
        assert!(report.is_killing_blow);
    }

    #[test]
    fn test_tuned_scale() {
        let mut actor = make_actor(100);
        let constants = CombatConstants {
            mitigation_scale: 5.0,
        };

        // 50 * 5 / (5 + 5) = 25
        let report = actor
            .damage_with_constants(&constants, 50, DamageType::Physical, DamageElement::Neutral)
            .unwrap();
        assert_eq!(report.final_amount, 25);
    }
}
