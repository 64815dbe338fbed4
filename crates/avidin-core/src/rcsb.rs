//! Wildtype chain lookup against the [RCSB Protein Data Bank](https://www.rcsb.org/).

use crate::error::{CoreError, Result};
use crate::residue;
use crate::sequence::ProteinSequence;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use ureq::Agent;

const DOWNLOAD_BASE_URL: &str = "https://files.rcsb.org/download";

const HTTP_TIMEOUT_SECS: u64 = 30;

fn reference_not_found(pdb_id: &str, chain_id: &str, reason: impl ToString) -> CoreError {
    CoreError::ReferenceNotFound {
        id: pdb_id.to_string(),
        chain: chain_id.to_string(),
        reason: reason.to_string(),
    }
}

/// Fetches the mmCIF for `pdb_id` (cached under `cache_dir`) and returns
/// the one-letter residue sequence of the requested chain. Waters, ligands,
/// and non-standard residues are skipped.
pub fn fetch_chain_sequence(
    pdb_id: &str,
    chain_id: &str,
    cache_dir: &Path,
) -> Result<ProteinSequence> {
    let cif_path = fetch_structure(pdb_id, chain_id, cache_dir)?;
    chain_sequence(&cif_path, pdb_id, chain_id)
}

/// Downloads the structure file unless a cached copy already exists.
fn fetch_structure(pdb_id: &str, chain_id: &str, cache_dir: &Path) -> Result<PathBuf> {
    let file_name = format!("{}.cif", pdb_id.to_lowercase());
    let path = cache_dir.join(&file_name);
    if path.exists() {
        return Ok(path);
    }

    let config = Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(HTTP_TIMEOUT_SECS)))
        .build();
    let agent: Agent = config.into();

    let url = format!("{DOWNLOAD_BASE_URL}/{file_name}");
    let body = agent
        .get(&url)
        .call()
        .map_err(|e| reference_not_found(pdb_id, chain_id, e))?
        .body_mut()
        .read_to_string()
        .map_err(|e| reference_not_found(pdb_id, chain_id, e))?;

    fs::create_dir_all(cache_dir)?;
    fs::write(&path, body)?;
    Ok(path)
}

fn chain_sequence(cif_path: &Path, pdb_id: &str, chain_id: &str) -> Result<ProteinSequence> {
    let path = cif_path
        .to_str()
        .ok_or_else(|| reference_not_found(pdb_id, chain_id, "non-UTF-8 structure path"))?;
    let (pdb, _errors) = pdbtbx::open(path)
        .map_err(|errors| reference_not_found(pdb_id, chain_id, format!("{errors:?}")))?;

    let chain = pdb
        .chains()
        .find(|chain| chain.id() == chain_id)
        .ok_or_else(|| reference_not_found(pdb_id, chain_id, "chain not present in structure"))?;

    let sequence: String = chain
        .residues()
        .filter_map(|res| res.name().and_then(residue::three_to_one))
        .collect();
    if sequence.is_empty() {
        return Err(reference_not_found(
            pdb_id,
            chain_id,
            "chain has no standard residues",
        ));
    }
    ProteinSequence::new(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cached_structure_skips_download() {
        let dir = tempdir().unwrap();
        let cached = dir.path().join("2trx.cif");
        fs::write(&cached, "placeholder").unwrap();

        let path = fetch_structure("2TRX", "A", dir.path()).unwrap();
        assert_eq!(path, cached);
    }

    #[test]
    #[ignore = "network: downloads from files.rcsb.org"]
    fn test_fetch_wildtype_chain() {
        let dir = tempdir().unwrap();
        let seq = fetch_chain_sequence("2TRX", "A", dir.path()).unwrap();
        assert!(seq.is_fully_resolved());
        assert!(seq.len() > 100);

        assert!(matches!(
            fetch_chain_sequence("2TRX", "Z", dir.path()),
            Err(CoreError::ReferenceNotFound { .. })
        ));
    }
}
