//! Binding-affinity scoring for candidate sequences.
//!
//! One scoring call serializes the candidate and the ligand into a
//! prediction spec under a fresh candidate directory, runs the external
//! predictor on it, and reduces the output to a single reward. Failures
//! never escape to the search loop: a failed prediction collapses to the
//! neutral fallback score, so one bad candidate cannot abort a run.

use crate::error::PredictorError;
use crate::predictor::BoltzRunner;
use crate::spec_doc::PredictionSpec;
use crate::workspace::RunWorkspace;
use avidin_core::ProteinSequence;
use std::fs;
use tracing::{info, warn};

pub const SPEC_FILE_NAME: &str = "protein_ligand.yaml";

const FALLBACK_SCORE: f64 = 0.0;

pub struct AffinityScorer<'a> {
    runner: BoltzRunner,
    workspace: &'a RunWorkspace,
    smiles: String,
}

impl<'a> AffinityScorer<'a> {
    pub fn new(runner: BoltzRunner, workspace: &'a RunWorkspace, smiles: impl Into<String>) -> Self {
        Self {
            runner,
            workspace,
            smiles: smiles.into(),
        }
    }

    /// The scoring contract handed to the guided search: any failure is
    /// logged and collapses to the neutral fallback.
    pub fn score(&self, candidate: &ProteinSequence) -> f64 {
        match self.try_score(candidate) {
            Ok(affinity) => {
                info!(%affinity, sequence = candidate.as_str(), "scored candidate");
                affinity
            }
            Err(err) => {
                warn!(error = %err, "affinity prediction failed; using fallback score");
                FALLBACK_SCORE
            }
        }
    }

    /// Like [`AffinityScorer::score`], but surfaces the failure taxonomy.
    pub fn try_score(&self, candidate: &ProteinSequence) -> Result<f64, PredictorError> {
        if !candidate.is_fully_resolved() {
            return Err(PredictorError::MaskedCandidate);
        }
        let dir = self.workspace.next_candidate_dir()?;
        let spec = PredictionSpec::protein_ligand(candidate.clone(), self.smiles.clone());
        let spec_path = dir.join(SPEC_FILE_NAME);
        fs::write(&spec_path, spec.to_yaml()?)?;
        self.runner.predict(&spec_path, &dir)
    }

    /// Borrowing closure adapter with the shape the search loop expects.
    pub fn as_fn(&self) -> impl Fn(&ProteinSequence) -> f64 + '_ {
        move |candidate| self.score(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_masked_candidate_is_rejected() {
        let tmp = tempdir().unwrap();
        let workspace = RunWorkspace::create(tmp.path().join("run")).unwrap();
        let scorer = AffinityScorer::new(
            BoltzRunner::new("/nonexistent/boltz"),
            &workspace,
            "CCO",
        );
        let masked = ProteinSequence::new("AC_DE").unwrap();

        assert!(matches!(
            scorer.try_score(&masked),
            Err(PredictorError::MaskedCandidate)
        ));
        assert_eq!(scorer.score(&masked), 0.0);
    }

    #[test]
    fn test_unlaunchable_predictor_falls_back_to_zero() {
        let tmp = tempdir().unwrap();
        let workspace = RunWorkspace::create(tmp.path().join("run")).unwrap();
        let scorer = AffinityScorer::new(
            BoltzRunner::new("/nonexistent/boltz"),
            &workspace,
            "CCO",
        );
        let candidate = ProteinSequence::new("ACDE").unwrap();

        assert_eq!(scorer.score(&candidate), 0.0);
        // the spec file was still written before the launch failed
        let spec_path = workspace.root().join("candidate_0000").join(SPEC_FILE_NAME);
        assert!(spec_path.is_file());
    }
}
