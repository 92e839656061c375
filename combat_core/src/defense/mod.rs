//! Defense system - Stat-based mitigation of Physical and Arcane damage

mod mitigation;

pub use mitigation::{mitigate, mitigation_multiplier};

/// Defense calculation constants
pub mod constants {
    /// Mitigation scale: `damage * SCALE / (SCALE + stat)`.
    /// At a stat equal to the scale, half the damage is mitigated.
    pub const MITIGATION_SCALE: f64 = 100.0;
}
