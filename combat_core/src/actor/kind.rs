//! Ally and Enemy - Actor variants with side-specific data

use super::Actor;
use crate::loot::LootTable;

/// A member of the player's team
#[derive(Debug, Clone)]
pub struct Ally {
    pub actor: Actor,
    /// Total experience points accrued
    exp: u64,
}

impl Ally {
    pub fn new(actor: Actor) -> Self {
        Ally { actor, exp: 0 }
    }

    pub fn with_exp(mut self, exp: u64) -> Self {
        self.exp = exp;
        self
    }

    pub fn exp(&self) -> u64 {
        self.exp
    }

    /// Accrue experience. Never decreases.
    pub fn gain_exp(&mut self, amount: u64) {
        self.exp = self.exp.saturating_add(amount);
    }
}

/// A member of the opposing team
#[derive(Debug, Clone)]
pub struct Enemy {
    pub actor: Actor,
    /// Ratio applied against the enemy level to calculate xp on defeat
    pub xp_ratio: f64,
    /// Ratio applied against the enemy level to calculate hype on defeat
    pub hype_ratio: f64,
    pub loot_table: LootTable,
}

impl Enemy {
    pub fn new(actor: Actor, xp_ratio: f64, hype_ratio: f64) -> Self {
        Enemy {
            actor,
            xp_ratio,
            hype_ratio,
            loot_table: LootTable::default(),
        }
    }

    pub fn with_loot(mut self, loot_table: LootTable) -> Self {
        self.loot_table = loot_table;
        self
    }

    /// Experience awarded for defeating this enemy
    pub fn xp_reward(&self) -> u64 {
        reward(self.actor.level, self.xp_ratio)
    }

    /// Hype awarded for defeating this enemy
    pub fn hype_reward(&self) -> u64 {
        reward(self.actor.level, self.hype_ratio)
    }
}

/// `level * ratio`, rounded half-to-even, floored at 0
fn reward(level: u32, ratio: f64) -> u64 {
    (level as f64 * ratio).round_ties_even().max(0.0) as u64
}

/// Either side of a combat, behind the shared actor capabilities
#[derive(Debug, Clone)]
pub enum Combatant {
    Ally(Ally),
    Enemy(Enemy),
}

impl Combatant {
    pub fn actor(&self) -> &Actor {
        match self {
            Combatant::Ally(ally) => &ally.actor,
            Combatant::Enemy(enemy) => &enemy.actor,
        }
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        match self {
            Combatant::Ally(ally) => &mut ally.actor,
            Combatant::Enemy(enemy) => &mut enemy.actor,
        }
    }

    pub fn is_ally(&self) -> bool {
        matches!(self, Combatant::Ally(_))
    }
}

impl From<Ally> for Combatant {
    fn from(ally: Ally) -> Self {
        Combatant::Ally(ally)
    }
}

impl From<Enemy> for Combatant {
    fn from(enemy: Enemy) -> Self {
        Combatant::Enemy(enemy)
    }
}
