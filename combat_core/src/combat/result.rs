//! DamageReport - Outcome of damage resolution

use crate::types::{DamageElement, DamageType};

/// Result of applying damage to an Actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageReport {
    pub damage_type: DamageType,
    pub element: DamageElement,
    /// Damage before mitigation
    pub raw_amount: i64,
    /// Damage after mitigation and rounding, before HP clamping
    pub final_amount: i64,

    // === State Changes ===
    pub hp_before: i64,
    pub hp_after: i64,

    /// Whether this hit took the actor from alive to 0 HP
    pub is_killing_blow: bool,
}

impl DamageReport {
    /// Amount removed by mitigation (negative when the stat amplified damage)
    pub fn mitigated_amount(&self) -> i64 {
        self.raw_amount.saturating_sub(self.final_amount)
    }

    /// Change in HP (negative for damage, positive for healing)
    pub fn hp_change(&self) -> i64 {
        self.hp_after.saturating_sub(self.hp_before)
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if self.final_amount > 0 {
            parts.push(format!("{} {:?} damage taken", self.final_amount, self.damage_type));
        } else if self.final_amount < 0 {
            parts.push(format!("{} healed", self.final_amount.unsigned_abs()));
        }

        if self.mitigated_amount() > 0 {
            parts.push(format!("{} mitigated", self.mitigated_amount()));
        }

        if self.is_killing_blow {
            parts.push("FATAL".to_string());
        }

        if parts.is_empty() {
            "No damage".to_string()
        } else {
            parts.join(", ")
        }
    }
}
