//! The protein language model behind a proposal seam.
//!
//! The model itself is an external system; this module only defines the
//! capability the guided search consumes and one concrete client for a
//! remote sequence-completion server.

use crate::error::ModelError;
use avidin_core::ProteinSequence;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use ureq::Agent;

/// Source of candidate completions for a masked template.
pub trait SequenceModel {
    /// Returns up to `num_samples` fully resolved candidates for `template`.
    fn propose(
        &self,
        template: &ProteinSequence,
        num_samples: usize,
    ) -> Result<Vec<ProteinSequence>, ModelError>;
}

pub const TOKEN_ENV: &str = "AVIDIN_FORGE_TOKEN";

const COMPLETIONS_PATH: &str = "/v1/completions";
const HTTP_TIMEOUT_SECS: u64 = 600;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    sequence: &'a str,
    num_samples: usize,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    sequences: Vec<ProteinSequence>,
}

/// Client for a remote sequence-completion server.
///
/// Constructed once at startup and passed to the search; the bearer token,
/// if any, is read from `AVIDIN_FORGE_TOKEN`.
pub struct EsmClient {
    agent: Agent,
    base_url: String,
    token: Option<String>,
}

impl EsmClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
            .build();
        let base_url: String = base_url.into();
        Self {
            agent: config.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
            token: std::env::var(TOKEN_ENV).ok(),
        }
    }
}

impl SequenceModel for EsmClient {
    fn propose(
        &self,
        template: &ProteinSequence,
        num_samples: usize,
    ) -> Result<Vec<ProteinSequence>, ModelError> {
        let url = format!("{}{COMPLETIONS_PATH}", self.base_url);
        let mut request = self.agent.post(&url);
        if let Some(token) = &self.token {
            request = request.header("authorization", format!("Bearer {token}"));
        }
        let mut response = request.send_json(CompletionRequest {
            sequence: template.as_str(),
            num_samples,
        })?;
        let parsed: CompletionResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| ModelError::BadResponse(e.to_string()))?;
        if parsed.sequences.is_empty() {
            return Err(ModelError::BadResponse(
                "empty candidate list".to_string(),
            ));
        }
        Ok(parsed.sequences)
    }
}
