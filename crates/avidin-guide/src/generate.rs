//! The one command this tool exposes: run an affinity-guided generation.

use crate::cli::Cli;
use crate::decoder::{DecodeConfig, GuidedSearch};
use crate::model::EsmClient;
use crate::predictor::BoltzRunner;
use crate::scoring::AffinityScorer;
use crate::workspace::RunWorkspace;
use anyhow::Context;
use avidin_core::{masked_template, rcsb, CoreError, ProteinSequence};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tracing::info;

pub fn execute(args: Cli) -> anyhow::Result<()> {
    validate(&args)?;
    let smiles = args.smiles.clone().ok_or_else(|| {
        CoreError::InvalidParameter("--smiles is required for affinity-guided generation".into())
    })?;

    let workspace = match &args.out_dir {
        Some(dir) => RunWorkspace::create(dir),
        None => RunWorkspace::create_default(),
    }
    .context("failed to create run workspace")?;
    info!(workspace = %workspace.root().display(), "run workspace ready");

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let seed_template = match &args.wildtype {
        Some(reference) => {
            let (pdb_id, chain_id) = (&reference[0], &reference[1]);
            let wildtype =
                rcsb::fetch_chain_sequence(pdb_id, chain_id, &workspace.structure_cache())?;
            info!(%pdb_id, %chain_id, length = wildtype.len(), "fetched wildtype chain");
            let template = masked_template(&wildtype, args.masking_fraction, &mut rng)?;
            info!(template = template.as_str(), "masked template");
            template
        }
        None => ProteinSequence::fully_masked(args.seq_length)?,
    };

    let runner = BoltzRunner::discover(args.boltz_path.clone())?;
    let scorer = AffinityScorer::new(runner, &workspace, smiles);
    let client = EsmClient::new(&args.model_url);
    let mut search = GuidedSearch::new(client, args.seed);
    let config = DecodeConfig {
        num_decoding_steps: args.num_decoding_steps,
        num_samples_per_step: args.num_samples_per_step,
    };

    let generated = search.guided_generate(&seed_template, &config, scorer.as_fn())?;
    info!(sequence = generated.as_str(), "guided generation finished");

    let fasta_path = workspace.root().join("generated.fasta");
    fs::write(&fasta_path, format!(">generated\n{generated}\n"))?;
    info!(path = %fasta_path.display(), "wrote generated sequence");
    println!("{generated}");
    Ok(())
}

/// Parameter checks, before any workspace or network side effect.
fn validate(args: &Cli) -> Result<(), CoreError> {
    if !(0.0..=1.0).contains(&args.masking_fraction) {
        return Err(CoreError::InvalidParameter(format!(
            "masking fraction must be within [0, 1], got {}",
            args.masking_fraction
        )));
    }
    if args.wildtype.is_none() && args.seq_length == 0 {
        return Err(CoreError::InvalidParameter(
            "sequence length must be greater than zero".into(),
        ));
    }
    if let Some(reference) = &args.wildtype {
        if reference.len() != 2 {
            return Err(CoreError::InvalidParameter(
                "--wildtype takes exactly one PDB id and one chain id".into(),
            ));
        }
    }
    if args.num_decoding_steps == 0 {
        return Err(CoreError::InvalidParameter(
            "number of decoding steps must be greater than zero".into(),
        ));
    }
    if args.num_samples_per_step == 0 {
        return Err(CoreError::InvalidParameter(
            "number of samples per step must be greater than zero".into(),
        ));
    }
    Ok(())
}
