use clap::Parser;
use std::path::PathBuf;

/// Guided protein-sequence generation steered by predicted ligand affinity.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output directory for run artifacts (default: runs/run_<timestamp>)
    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    /// Sequence length when generating without a wildtype
    #[arg(long, default_value_t = 256)]
    pub seq_length: usize,

    /// SMILES string for the target ligand
    #[arg(long)]
    pub smiles: Option<String>,

    /// Wildtype reference to start from (e.g. --wildtype 2TRX A)
    #[arg(long, num_args = 2, value_names = ["PDB_ID", "CHAIN_ID"])]
    pub wildtype: Option<Vec<String>>,

    /// Number of guided decoding steps
    #[arg(long, default_value_t = 64)]
    pub num_decoding_steps: usize,

    /// Candidate samples drawn per step
    #[arg(long, default_value_t = 10)]
    pub num_samples_per_step: usize,

    /// Fraction of the wildtype sequence to mask
    #[arg(long, default_value_t = 0.4)]
    pub masking_fraction: f64,

    /// RNG seed for reproducible masking and decoding
    #[arg(long)]
    pub seed: Option<u64>,

    /// Explicit path to the affinity predictor executable
    #[arg(long)]
    pub boltz_path: Option<PathBuf>,

    /// Base URL of the sequence-completion server
    #[arg(long, default_value = "https://forge.evolutionaryscale.ai")]
    pub model_url: String,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["avidin", "--smiles", "CCO"]);
        assert_eq!(cli.seq_length, 256);
        assert_eq!(cli.num_decoding_steps, 64);
        assert_eq!(cli.num_samples_per_step, 10);
        assert_eq!(cli.masking_fraction, 0.4);
        assert!(cli.out_dir.is_none());
        assert!(cli.wildtype.is_none());
    }

    #[test]
    fn test_wildtype_takes_id_and_chain() {
        let cli = Cli::parse_from(["avidin", "--smiles", "CCO", "--wildtype", "2TRX", "A"]);
        assert_eq!(
            cli.wildtype,
            Some(vec!["2TRX".to_string(), "A".to_string()])
        );
    }
}
