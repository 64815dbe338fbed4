//! Guided decoding over an opaque sequence model.
//!
//! Each step asks the model for a batch of fully resolved candidates for
//! the current template, scores them one at a time with the supplied reward
//! function, and commits an even share of the remaining masked positions
//! from the winner. The template is fully resolved by the final step.
//! Everything is strictly sequential: one candidate is scored at a time,
//! and each scoring call blocks until the predictor exits.

use crate::error::SearchError;
use crate::model::SequenceModel;
use avidin_core::ProteinSequence;
use itertools::Itertools;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::debug;

/// Search-shape parameters, matching the external generator's interface.
#[derive(Debug, Clone, Copy)]
pub struct DecodeConfig {
    pub num_decoding_steps: usize,
    pub num_samples_per_step: usize,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            num_decoding_steps: 64,
            num_samples_per_step: 10,
        }
    }
}

pub struct GuidedSearch<M> {
    model: M,
    rng: StdRng,
}

impl<M: SequenceModel> GuidedSearch<M> {
    pub fn new(model: M, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { model, rng }
    }

    /// Runs the guided search from `seed` and returns the final sequence.
    ///
    /// Candidates that are not fully resolved or do not match the template
    /// length are discarded before scoring; a step where nothing usable
    /// remains fails the search.
    pub fn guided_generate(
        &mut self,
        seed: &ProteinSequence,
        config: &DecodeConfig,
        score: impl Fn(&ProteinSequence) -> f64,
    ) -> Result<ProteinSequence, SearchError> {
        let mut template = seed.clone();
        for step in 0..config.num_decoding_steps {
            let masked = template.masked_positions();
            if masked.is_empty() {
                break;
            }

            let candidates = self
                .model
                .propose(&template, config.num_samples_per_step)?;
            let scored: Vec<(ProteinSequence, f64)> = candidates
                .into_iter()
                .filter(|c| c.len() == template.len() && c.is_fully_resolved())
                .map(|c| {
                    let value = score(&c);
                    (c, value)
                })
                .collect();

            let Some(best_index) = scored
                .iter()
                .position_max_by(|a, b| a.1.total_cmp(&b.1))
            else {
                return Err(SearchError::NoCandidates { step });
            };
            let (best, best_score) = &scored[best_index];

            // commit an even share of what remains, so the final step
            // resolves every position
            let steps_left = config.num_decoding_steps - step;
            let to_commit = masked.len().div_ceil(steps_left);
            let mut chosen = masked;
            chosen.shuffle(&mut self.rng);
            chosen.truncate(to_commit);
            for position in chosen {
                if let Some(aa) = best.residue_at(position) {
                    template.set(position, aa)?;
                }
            }
            debug!(
                step,
                committed = to_commit,
                remaining = template.mask_count(),
                best_score,
                "guided decoding step"
            );
        }

        if !template.is_fully_resolved() {
            return Err(SearchError::Unresolved {
                remaining: template.mask_count(),
            });
        }
        Ok(template)
    }
}
