//! Candidate sequences over the residue alphabet plus a mask placeholder.

use crate::error::{CoreError, Result};
use crate::residue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for an unresolved position, filled in during decoding.
pub const MASK: char = '_';

/// A fixed-length candidate sequence.
///
/// Positions hold either a standard one-letter residue code or [`MASK`].
/// Masks are resolved in place during generation; positions are never
/// inserted or removed, so the length observed at construction holds for
/// the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProteinSequence(String);

impl ProteinSequence {
    pub fn new(sequence: impl Into<String>) -> Result<Self> {
        let sequence = sequence.into();
        if sequence.is_empty() {
            return Err(CoreError::InvalidParameter(
                "sequence must not be empty".into(),
            ));
        }
        if let Some(bad) = sequence
            .chars()
            .find(|&c| c != MASK && !residue::is_standard(c))
        {
            return Err(CoreError::InvalidParameter(format!(
                "symbol {bad:?} is not a residue or mask"
            )));
        }
        Ok(Self(sequence))
    }

    /// A sequence of `length` mask symbols, the de novo starting point.
    pub fn fully_masked(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(CoreError::InvalidParameter(
                "sequence length must be greater than zero".into(),
            ));
        }
        Ok(Self(MASK.to_string().repeat(length)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // the alphabet is single-byte, so byte length and byte indexing are exact
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn mask_count(&self) -> usize {
        self.0.bytes().filter(|&b| b == MASK as u8).count()
    }

    pub fn is_fully_resolved(&self) -> bool {
        self.mask_count() == 0
    }

    /// Indices still holding the mask symbol.
    pub fn masked_positions(&self) -> Vec<usize> {
        self.0
            .bytes()
            .enumerate()
            .filter(|&(_, b)| b == MASK as u8)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn residue_at(&self, index: usize) -> Option<char> {
        self.0.as_bytes().get(index).map(|&b| b as char)
    }

    /// Resolves one position to a residue. Only residue codes are accepted;
    /// a position can never return to the masked state.
    pub fn set(&mut self, index: usize, aa: char) -> Result<()> {
        if !residue::is_standard(aa) {
            return Err(CoreError::InvalidParameter(format!(
                "symbol {aa:?} is not a residue"
            )));
        }
        if index >= self.len() {
            return Err(CoreError::InvalidParameter(format!(
                "position {index} is out of range for length {}",
                self.len()
            )));
        }
        let mut buf = [0; 4];
        self.0
            .replace_range(index..index + 1, aa.encode_utf8(&mut buf));
        Ok(())
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ProteinSequence {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ProteinSequence> for String {
    fn from(sequence: ProteinSequence) -> Self {
        sequence.0
    }
}
