//! Effects - One-shot and lasting transformations applied by one actor onto another

mod lasting;
mod presets;
mod source;

pub use lasting::LastingEffect;
pub use presets::EffectPresets;
pub use source::EffectSource;

use crate::actor::Actor;
use crate::error::CombatError;
use std::fmt;
use std::sync::Arc;

/// A transformation run with the casting actor and the target actor
pub type Transform = Arc<dyn Fn(&EffectSource, &mut Actor) -> Result<(), CombatError> + Send + Sync>;

/// Transformation that does nothing
pub fn no_op(_source: &EffectSource, _target: &mut Actor) -> Result<(), CombatError> {
    Ok(())
}

/// A one-shot effect cast by `source`
#[derive(Clone)]
pub struct Effect {
    source: EffectSource,
    effect: Transform,
}

impl Effect {
    /// Create an effect cast by `source`
    pub fn new<F>(source: &Actor, effect: F) -> Self
    where
        F: Fn(&EffectSource, &mut Actor) -> Result<(), CombatError> + Send + Sync + 'static,
    {
        Effect {
            source: EffectSource::from(source),
            effect: Arc::new(effect),
        }
    }

    /// An effect that does nothing when applied
    pub fn noop(source: &Actor) -> Self {
        Effect::new(source, no_op)
    }

    pub fn source(&self) -> &EffectSource {
        &self.source
    }

    /// Run the transformation against `target`
    pub fn apply(&self, target: &mut Actor) -> Result<(), CombatError> {
        (self.effect)(&self.source, target)
    }
}

impl fmt::Debug for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("source", &self.source.name)
            .finish_non_exhaustive()
    }
}
