//! The structured input document handed to the affinity predictor.
//!
//! The predictor consumes a YAML file declaring a protein entry, a ligand
//! entry, and the property to compute (binding affinity of the ligand
//! against the protein). Entry ids follow the predictor's convention:
//! chain `A` is the protein, `B` the ligand binder.

use avidin_core::ProteinSequence;
use serde::{Deserialize, Serialize};

pub const PROTEIN_ID: &str = "A";
pub const LIGAND_ID: &str = "B";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionSpec {
    pub version: u32,
    pub sequences: Vec<SequenceEntry>,
    pub properties: Vec<PropertyEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceEntry {
    Protein(ProteinEntry),
    Ligand(LigandEntry),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProteinEntry {
    pub id: String,
    pub sequence: ProteinSequence,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LigandEntry {
    pub id: String,
    pub smiles: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyEntry {
    Affinity { binder: String },
}

impl PredictionSpec {
    /// Declares one protein/ligand pair with binding affinity requested
    /// for the ligand.
    pub fn protein_ligand(sequence: ProteinSequence, smiles: impl Into<String>) -> Self {
        Self {
            version: 1,
            sequences: vec![
                SequenceEntry::Protein(ProteinEntry {
                    id: PROTEIN_ID.into(),
                    sequence,
                }),
                SequenceEntry::Ligand(LigandEntry {
                    id: LIGAND_ID.into(),
                    smiles: smiles.into(),
                }),
            ],
            properties: vec![PropertyEntry::Affinity {
                binder: LIGAND_ID.into(),
            }],
        }
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(raw)
    }

    pub fn protein_sequence(&self) -> Option<&ProteinSequence> {
        self.sequences.iter().find_map(|entry| match entry {
            SequenceEntry::Protein(protein) => Some(&protein.sequence),
            _ => None,
        })
    }

    pub fn ligand_smiles(&self) -> Option<&str> {
        self.sequences.iter().find_map(|entry| match entry {
            SequenceEntry::Ligand(ligand) => Some(ligand.smiles.as_str()),
            _ => None,
        })
    }
}
