//! combat_core - Statistic, lasting effect and damage resolution engine for turn-based combat
//!
//! This library provides:
//! - Statistic / Hp: Base and current values, with clamped health
//! - Effect / LastingEffect: Transformations cast by one actor onto another
//! - Actor: Stats, health, tension and lasting effects of a combat participant
//! - Damage Resolution: Defense/Resistance mitigation of incoming damage
//! - Tick Processing: Reset, decay, cleanse and replay of lasting effects

pub mod actor;
pub mod combat;
pub mod config;
pub mod defense;
pub mod effect;
pub mod error;
pub mod loot;
pub mod prelude;
pub mod stat;
pub mod types;

// Re-export core types for convenience
pub use actor::{Actor, Ally, Combatant, Enemy, TickSummary};
pub use combat::{Combat, DamageReport};
pub use config::{default_roster, CombatConstants, ConfigError, Roster};
pub use effect::{Effect, EffectPresets, EffectSource, LastingEffect};
pub use error::CombatError;
pub use loot::{Item, LootTable};
pub use stat::{Hp, StatLine, Statistic};
pub use types::{DamageElement, DamageType, StatKind, Tension};
