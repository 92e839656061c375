//! Prelude module for convenient imports
//!
//! ```rust
//! use combat_core::prelude::*;
//! ```

// Core types
pub use crate::stat::{Hp, StatLine, Statistic};
pub use crate::types::{DamageElement, DamageType, StatKind, Tension};

// Actors
pub use crate::actor::{Actor, Ally, Combatant, Enemy, TickSummary};

// Effects
pub use crate::effect::{no_op, Effect, EffectPresets, EffectSource, LastingEffect};

// Combat
pub use crate::combat::{Combat, DamageReport};
pub use crate::error::CombatError;

// Config
pub use crate::config::{default_roster, CombatConstants};

// Loot
pub use crate::loot::{Item, LootTable};
