//! Statistic - A base value and the current value derived from it

use std::ops::{Add, Sub};

/// A numeric trait of an actor (Attack, Defense, ...)
///
/// `value` is the live value that effects push around during a tick;
/// `base_value` is what [`Statistic::reset`] restores.
///
/// Offsetting with `+`/`-` produces a *new* Statistic whose base is the
/// offset value, so the original base does not survive arithmetic.
/// Offsets saturate at the bounds of `i64`. Callers
/// that need the original base must keep it themselves. Modify `value`
/// directly to shift the current value while keeping the base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistic {
    base_value: i64,
    /// Current value after modifiers
    pub value: i64,
}

impl Statistic {
    /// Create a statistic whose base and current value are both `value`
    pub fn new(value: i64) -> Self {
        Statistic {
            base_value: value,
            value,
        }
    }

    /// Value before any modifiers. Only written at creation and level up.
    pub fn base_value(&self) -> i64 {
        self.base_value
    }

    /// Restore the current value to the base, in place
    pub fn reset(&mut self) {
        self.value = self.base_value;
    }

    /// Rebuild from the base plus a permanent gain (level up)
    pub(crate) fn grown(&self, gain: i64) -> Statistic {
        Statistic::new(self.base_value.saturating_add(gain))
    }
}

impl Add<i64> for Statistic {
    type Output = Statistic;

    fn add(self, delta: i64) -> Statistic {
        Statistic::new(self.value.saturating_add(delta))
    }
}

impl Sub<i64> for Statistic {
    type Output = Statistic;

    fn sub(self, delta: i64) -> Statistic {
        Statistic::new(self.value.saturating_sub(delta))
    }
}
