//! LastingEffect - An effect that replays every tick until its duration runs out

use super::{Effect, EffectSource, Transform};
use crate::actor::Actor;
use crate::error::CombatError;
use std::fmt;
use std::sync::Arc;

/// A timed modifier attached to an actor
///
/// Each tick the owning actor decrements `duration`. While it stays above
/// zero the effect is applied; the tick it reaches zero the undo runs once
/// and the effect is dropped.
#[derive(Clone)]
pub struct LastingEffect {
    effect: Effect,
    duration: u32,
    /// Multiplicative effects are ordered before additive ones
    pub is_multiplicative: bool,
    undo_effect: Transform,
}

impl LastingEffect {
    /// Create a lasting effect cast by `source`
    pub fn new<F, U>(
        source: &Actor,
        duration: u32,
        is_multiplicative: bool,
        effect: F,
        undo_effect: U,
    ) -> Self
    where
        F: Fn(&EffectSource, &mut Actor) -> Result<(), CombatError> + Send + Sync + 'static,
        U: Fn(&EffectSource, &mut Actor) -> Result<(), CombatError> + Send + Sync + 'static,
    {
        LastingEffect {
            effect: Effect::new(source, effect),
            duration,
            is_multiplicative,
            undo_effect: Arc::new(undo_effect),
        }
    }

    /// Remaining ticks
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn source(&self) -> &EffectSource {
        self.effect.source()
    }

    /// Run the modifying transformation against `target`
    pub fn apply(&self, target: &mut Actor) -> Result<(), CombatError> {
        self.effect.apply(target)
    }

    /// Run the undo transformation against `target`
    pub fn cleanse(&self, target: &mut Actor) -> Result<(), CombatError> {
        (self.undo_effect)(self.effect.source(), target)
    }

    /// Count down one tick and return the remaining duration.
    /// A zero duration stays at zero.
    pub(crate) fn decrement(&mut self) -> u32 {
        self.duration = self.duration.saturating_sub(1);
        self.duration
    }
}

impl fmt::Debug for LastingEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LastingEffect")
            .field("source", &self.source().name)
            .field("duration", &self.duration)
            .field("is_multiplicative", &self.is_multiplicative)
            .finish_non_exhaustive()
    }
}
