//! Mitigation - Hyperbolic damage reduction from Defense and Resistance
//!
//! Formula:
//! - multiplier = scale / (scale + stat)
//! - damage_taken = round_half_even(damage * multiplier)
//!
//! Negative stats amplify damage. A stat of exactly `-scale` has no defined
//! multiplier and is reported as an error.

use crate::error::CombatError;
use crate::types::DamageType;

/// Multiplier applied to incoming damage for a mitigating stat value
///
/// Returns `None` when `scale + stat` is zero.
pub fn mitigation_multiplier(stat_value: i64, scale: f64) -> Option<f64> {
    let divisor = scale + stat_value as f64;
    if divisor == 0.0 {
        return None;
    }
    Some(scale / divisor)
}

/// Calculate damage taken after mitigation
///
/// # Arguments
/// * `amount` - Raw incoming damage (negative heals)
/// * `damage_type` - Used for error reporting only
/// * `stat_value` - The defender's mitigating stat, or `None` when the
///   damage type is unmitigated
/// * `scale` - Mitigation scale constant
///
/// # Returns
/// The damage after mitigation, rounded half-to-even
pub fn mitigate(
    amount: i64,
    damage_type: DamageType,
    stat_value: Option<i64>,
    scale: f64,
) -> Result<i64, CombatError> {
    let Some(stat_value) = stat_value else {
        return Ok(amount);
    };

    let multiplier = mitigation_multiplier(stat_value, scale).ok_or(
        CombatError::ZeroMitigationDivisor {
            damage_type,
            stat_value,
        },
    )?;

    Ok((amount as f64 * multiplier).round_ties_even() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defense::constants::MITIGATION_SCALE;

    #[test]
    fn test_no_stat_passes_through() {
        let result = mitigate(100, DamageType::Pure, None, MITIGATION_SCALE).unwrap();
        assert_eq!(result, 100);
    }

    #[test]
    fn test_zero_stat_is_unmitigated() {
        let result = mitigate(37, DamageType::Arcane, Some(0), MITIGATION_SCALE).unwrap();
        assert_eq!(result, 37);
    }

    #[test]
    fn test_defense_five() {
        // 100 * 100 / 105 = 95.238
        let result = mitigate(100, DamageType::Physical, Some(5), MITIGATION_SCALE).unwrap();
        assert_eq!(result, 95);
    }

    #[test]
    fn test_stat_equal_to_scale_halves() {
        let result = mitigate(80, DamageType::Physical, Some(100), MITIGATION_SCALE).unwrap();
        assert_eq!(result, 40);
    }

    #[test]
    fn test_rounds_half_to_even() {
        // 5 * 100 / 200 = 2.5 -> 2
        assert_eq!(mitigate(5, DamageType::Physical, Some(100), MITIGATION_SCALE).unwrap(), 2);
        // 7 * 100 / 200 = 3.5 -> 4
        assert_eq!(mitigate(7, DamageType::Physical, Some(100), MITIGATION_SCALE).unwrap(), 4);
    }

    #[test]
    fn test_negative_stat_amplifies() {
        // 50 * 100 / 50 = 100
        let result = mitigate(50, DamageType::Arcane, Some(-50), MITIGATION_SCALE).unwrap();
        assert_eq!(result, 100);
    }

    #[test]
    fn test_zero_divisor_errors() {
        let err = mitigate(10, DamageType::Physical, Some(-100), MITIGATION_SCALE).unwrap_err();
        assert_eq!(
            err,
            CombatError::ZeroMitigationDivisor {
                damage_type: DamageType::Physical,
                stat_value: -100,
            }
        );
    }

    #[test]
    fn test_multiplier() {
        assert!((mitigation_multiplier(0, 100.0).unwrap() - 1.0).abs() < f64::EPSILON);
        assert!((mitigation_multiplier(100, 100.0).unwrap() - 0.5).abs() < f64::EPSILON);
        assert!(mitigation_multiplier(-100, 100.0).is_none());
    }
}
