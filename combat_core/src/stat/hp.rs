//! HP - A Statistic that can't be healed above max or brought below 0

use std::ops::{Add, Sub};

/// Health of an actor
///
/// Arithmetic saturates and clamps to `[0, base_value]` instead of failing. Like
/// [`Statistic`](super::Statistic), each result is rebuilt from its clamped
/// value, so after taking damage the base shrinks to the remaining health.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hp {
    base_value: i64,
    value: i64,
}

impl Hp {
    /// Create full health. Negative input clamps to 0.
    pub fn new(value: i64) -> Self {
        let value = value.max(0);
        Hp {
            base_value: value,
            value,
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    pub fn is_depleted(&self) -> bool {
        self.value == 0
    }

    pub(crate) fn grown(&self, gain: i64) -> Hp {
        Hp::new(self.base_value.saturating_add(gain))
    }
}

impl Add<i64> for Hp {
    type Output = Hp;

    fn add(self, delta: i64) -> Hp {
        Hp::new(self.value.saturating_add(delta).min(self.base_value))
    }
}

impl Sub<i64> for Hp {
    type Output = Hp;

    fn sub(self, delta: i64) -> Hp {
        Hp::new(self.value.saturating_sub(delta).max(0))
    }
}
