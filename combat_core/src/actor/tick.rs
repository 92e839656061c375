//! End-of-tick lasting effect processing

use super::Actor;
use crate::effect::LastingEffect;
use crate::error::CombatError;
use tracing::{debug, trace};

/// Result of processing one tick of lasting effects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Effects whose transformation ran this tick
    pub applied: usize,
    /// Effects that ran out and were cleansed this tick
    pub expired: usize,
}

impl Actor {
    /// Process one combat tick of lasting effects
    ///
    /// 1. Every stat is reset to its base (HP is left alone)
    /// 2. Each effect, in current order, counts down one tick. At zero it is
    ///    removed and cleansed; otherwise it is applied.
    /// 3. Survivors are stably sorted, multiplicative before additive
    ///
    /// Effects attached by a transformation during the tick are kept and
    /// first processed next tick. If a transformation fails, the error is
    /// returned and no effect is lost: the failing effect (unless it was
    /// expiring) and all unprocessed effects stay attached.
    pub fn handle_lasting_effects(&mut self) -> Result<TickSummary, CombatError> {
        for stat in self.stats.values_mut() {
            stat.reset();
        }

        let mut pending = std::mem::take(&mut self.lasting_effects).into_iter();
        let mut survivors = Vec::with_capacity(pending.len());
        let mut summary = TickSummary::default();

        while let Some(mut effect) = pending.next() {
            let outcome = if effect.decrement() == 0 {
                summary.expired += 1;
                debug!(actor = %self.name, source = %effect.source().name, "lasting effect expired");
                effect.cleanse(self)
            } else {
                summary.applied += 1;
                trace!(
                    actor = %self.name,
                    source = %effect.source().name,
                    remaining = effect.duration(),
                    "applying lasting effect"
                );
                let outcome = effect.apply(self);
                survivors.push(effect);
                outcome
            };

            if let Err(err) = outcome {
                survivors.extend(pending);
                self.restore_lasting_effects(survivors);
                return Err(err);
            }
        }

        self.restore_lasting_effects(survivors);
        Ok(summary)
    }

    fn restore_lasting_effects(&mut self, mut survivors: Vec<LastingEffect>) {
        // Anything attached while the list was taken goes after the survivors
        survivors.append(&mut self.lasting_effects);
        survivors.sort_by_key(|effect| !effect.is_multiplicative);
        self.lasting_effects = survivors;
    }
}
