//! EffectSource - The caster as seen by an effect

use crate::actor::Actor;
use crate::error::CombatError;
use crate::types::{StatKind, Tension};
use std::collections::BTreeMap;

/// Snapshot of the casting actor, taken when the effect is created
///
/// An effect refers back to its caster without owning it. The caster is
/// captured by value so a caster can target itself while being mutated.
/// Later changes to the caster are not seen: a lasting effect keeps reading
/// the stats its caster had at cast time for every tick it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectSource {
    pub name: String,
    pub level: u32,
    pub tension: Tension,
    /// Current stat values at cast time
    pub stats: BTreeMap<StatKind, i64>,
    pub hp: i64,
}

impl EffectSource {
    /// Current value of one of the caster's stats
    pub fn stat(&self, kind: StatKind) -> Result<i64, CombatError> {
        self.stats
            .get(&kind)
            .copied()
            .ok_or(CombatError::MissingStat(kind))
    }
}

impl From<&Actor> for EffectSource {
    fn from(actor: &Actor) -> Self {
        EffectSource {
            name: actor.name.clone(),
            level: actor.level,
            tension: actor.tension,
            stats: actor
                .stats()
                .iter()
                .map(|(kind, stat)| (*kind, stat.value))
                .collect(),
            hp: actor.hp.value(),
        }
    }
}
