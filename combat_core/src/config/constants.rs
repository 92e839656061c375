//! Tunable combat constants

use crate::defense::constants::MITIGATION_SCALE;
use serde::{Deserialize, Serialize};

/// Tunable combat constants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatConstants {
    /// Formula constant: damage_taken = damage * scale / (scale + stat)
    #[serde(default = "default_mitigation_scale")]
    pub mitigation_scale: f64,
}

impl Default for CombatConstants {
    fn default() -> Self {
        CombatConstants {
            mitigation_scale: MITIGATION_SCALE,
        }
    }
}

fn default_mitigation_scale() -> f64 {
    MITIGATION_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = CombatConstants::default();
        assert!((constants.mitigation_scale - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_constants() {
        let constants: CombatConstants = toml::from_str("mitigation_scale = 50.0").unwrap();
        assert!((constants.mitigation_scale - 50.0).abs() < f64::EPSILON);

        let defaulted: CombatConstants = toml::from_str("").unwrap();
        assert!((defaulted.mitigation_scale - 100.0).abs() < f64::EPSILON);
    }
}
