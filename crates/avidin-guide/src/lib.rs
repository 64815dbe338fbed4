//! avidin-guide
//!
//! Orchestration for affinity-guided generation: the per-run workspace,
//! the prediction-spec writer and external-predictor adapter, the
//! sequence-model seam, and the guided search driver behind the `avidin`
//! binary.
//!
pub mod cli;
pub mod decoder;
pub mod error;
pub mod generate;
pub mod model;
pub mod predictor;
pub mod scoring;
pub mod spec_doc;
pub mod workspace;

pub use decoder::{DecodeConfig, GuidedSearch};
pub use model::{EsmClient, SequenceModel};
pub use predictor::BoltzRunner;
pub use scoring::AffinityScorer;
pub use spec_doc::PredictionSpec;
pub use workspace::RunWorkspace;
