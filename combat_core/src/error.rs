//! Errors raised while resolving combat operations

use crate::types::{DamageType, StatKind};
use thiserror::Error;

/// Failure of a combat operation. Nothing is retried or recovered locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CombatError {
    #[error("Actor has no {0} statistic")]
    MissingStat(StatKind),
    #[error("{damage_type:?} mitigation is undefined when the mitigating stat is {stat_value}")]
    ZeroMitigationDivisor {
        damage_type: DamageType,
        stat_value: i64,
    },
    /// Raised by user-supplied effect transformations
    #[error("Effect failed: {0}")]
    Effect(String),
}
