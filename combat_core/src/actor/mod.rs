//! Actor - Anything that takes a turn in combat (ally, enemy or player)

mod kind;
mod tick;

pub use kind::{Ally, Combatant, Enemy};
pub use tick::TickSummary;

use crate::combat::{resolve_damage, DamageReport};
use crate::config::CombatConstants;
use crate::defense::constants::MITIGATION_SCALE;
use crate::effect::LastingEffect;
use crate::error::CombatError;
use crate::stat::{Hp, StatLine, Statistic};
use crate::types::{DamageElement, DamageType, StatKind, Tension};
use std::collections::BTreeMap;
use tracing::debug;

/// Combat state of a single participant
#[derive(Debug, Clone)]
pub struct Actor {
    pub name: String,
    /// Canonical stats. HP is kept separately.
    stats: BTreeMap<StatKind, Statistic>,
    pub hp: Hp,
    /// Experience level
    pub level: u32,
    pub tension: Tension,
    /// Active lasting effects, multiplicative first after each tick
    lasting_effects: Vec<LastingEffect>,
}

impl Actor {
    /// Create a level 1 actor at Min tension with full health
    ///
    /// Fails with [`CombatError::MissingStat`] if `stats` lacks a canonical stat.
    pub fn new(name: impl Into<String>, hp: i64, stats: &StatLine) -> Result<Self, CombatError> {
        if let Some(missing) = stats.first_missing() {
            return Err(CombatError::MissingStat(missing));
        }

        Ok(Actor {
            name: name.into(),
            stats: stats
                .iter()
                .map(|(kind, value)| (kind, Statistic::new(value)))
                .collect(),
            hp: Hp::new(hp),
            level: 1,
            tension: Tension::Min,
            lasting_effects: Vec::new(),
        })
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn with_tension(mut self, tension: Tension) -> Self {
        self.tension = tension;
        self
    }

    // === Stats ===

    pub fn stat(&self, kind: StatKind) -> Result<&Statistic, CombatError> {
        self.stats.get(&kind).ok_or(CombatError::MissingStat(kind))
    }

    pub fn stat_mut(&mut self, kind: StatKind) -> Result<&mut Statistic, CombatError> {
        self.stats.get_mut(&kind).ok_or(CombatError::MissingStat(kind))
    }

    pub fn stats(&self) -> &BTreeMap<StatKind, Statistic> {
        &self.stats
    }

    /// Raw access to the stat map. Removing a canonical stat makes later
    /// lookups of it fail with [`CombatError::MissingStat`].
    pub fn stats_mut(&mut self) -> &mut BTreeMap<StatKind, Statistic> {
        &mut self.stats
    }

    /// Turn order key: the higher of Dexterity and Agility
    pub fn initiative(&self) -> Result<i64, CombatError> {
        let dexterity = self.stat(StatKind::Dexterity)?.value;
        let agility = self.stat(StatKind::Agility)?.value;
        Ok(dexterity.max(agility))
    }

    pub fn is_alive(&self) -> bool {
        !self.hp.is_depleted()
    }

    /// Gain a level, growing every stat base (and HP) by `gains`
    ///
    /// Stats and HP are rebuilt from their bases, so current modifiers and
    /// lost health are discarded. Stats absent from `gains` grow by 0.
    pub fn level_up(&mut self, gains: &StatLine, hp_gain: i64) {
        self.level += 1;
        for (kind, stat) in self.stats.iter_mut() {
            *stat = stat.grown(gains.get(*kind).unwrap_or(0));
        }
        self.hp = self.hp.grown(hp_gain);
        debug!(actor = %self.name, level = self.level, hp = self.hp.value(), "level up");
    }

    // === Damage ===

    /// Apply incoming damage, mitigated by Defense (Physical) or Resistance (Arcane)
    ///
    /// The element is accepted but does not affect mitigation. Negative
    /// amounts heal.
    pub fn damage(
        &mut self,
        amount: i64,
        damage_type: DamageType,
        element: DamageElement,
    ) -> Result<DamageReport, CombatError> {
        resolve_damage(self, amount, damage_type, element, MITIGATION_SCALE)
    }

    /// [`Actor::damage`] using tuned constants
    pub fn damage_with_constants(
        &mut self,
        constants: &CombatConstants,
        amount: i64,
        damage_type: DamageType,
        element: DamageElement,
    ) -> Result<DamageReport, CombatError> {
        resolve_damage(self, amount, damage_type, element, constants.mitigation_scale)
    }

    // === Lasting Effects ===

    /// Attach a lasting effect. It is first applied on the next tick.
    pub fn add_lasting_effect(&mut self, effect: LastingEffect) {
        self.lasting_effects.push(effect);
    }

    pub fn lasting_effects(&self) -> &[LastingEffect] {
        &self.lasting_effects
    }
}
