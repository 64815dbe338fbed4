//! avidin-core
//!
//! Domain types for affinity-guided sequence design: candidate protein
//! sequences over the residue alphabet plus a mask placeholder, seed
//! template construction (masked wildtype or fully masked de novo), and
//! wildtype chain lookup against the RCSB PDB.
//!
pub mod error;
pub mod rcsb;
pub mod residue;
pub mod sequence;
pub mod template;

pub use error::CoreError;
pub use sequence::{ProteinSequence, MASK};
pub use template::masked_template;
