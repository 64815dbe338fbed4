//! Seed template construction for guided generation.

use crate::error::{CoreError, Result};
use crate::sequence::{ProteinSequence, MASK};
use rand::seq::index;
use rand::Rng;

/// Masks a uniformly drawn subset of `source` in place of a wildtype.
///
/// Exactly `⌊fraction * len⌋` distinct positions are replaced with the mask
/// symbol; the rest of the sequence is left unchanged. A fraction of 0
/// returns the wildtype as-is, a fraction of 1 masks every position.
pub fn masked_template<R: Rng>(
    source: &ProteinSequence,
    fraction: f64,
    rng: &mut R,
) -> Result<ProteinSequence> {
    if !(0.0..=1.0).contains(&fraction) {
        return Err(CoreError::InvalidParameter(format!(
            "masking fraction must be within [0, 1], got {fraction}"
        )));
    }
    let num_to_mask = (fraction * source.len() as f64).floor() as usize;
    let mut template: Vec<char> = source.as_str().chars().collect();
    for index in index::sample(rng, template.len(), num_to_mask) {
        template[index] = MASK;
    }
    ProteinSequence::new(template.into_iter().collect::<String>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wildtype(len: usize) -> ProteinSequence {
        let residues = "ACDEFGHIKLMNPQRSTVWY";
        let seq: String = residues.chars().cycle().take(len).collect();
        ProteinSequence::new(seq).unwrap()
    }

    #[test]
    fn test_mask_count_is_floor_of_fraction() {
        let mut rng = StdRng::seed_from_u64(42);
        let source = wildtype(50);
        for fraction in [0.0, 0.1, 0.25, 0.4, 0.5, 0.9, 1.0] {
            let masked = masked_template(&source, fraction, &mut rng).unwrap();
            let expected = (fraction * 50.0).floor() as usize;
            assert_eq!(masked.mask_count(), expected, "fraction {fraction}");
            assert_eq!(masked.len(), source.len());
        }
    }

    #[test]
    fn test_zero_fraction_is_identity() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = wildtype(33);
        let masked = masked_template(&source, 0.0, &mut rng).unwrap();
        assert_eq!(masked, source);
    }

    #[test]
    fn test_full_fraction_masks_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = wildtype(33);
        let masked = masked_template(&source, 1.0, &mut rng).unwrap();
        assert_eq!(masked.mask_count(), 33);
    }

    #[test]
    fn test_unmasked_positions_keep_wildtype_residues() {
        let mut rng = StdRng::seed_from_u64(9);
        let source = wildtype(40);
        let masked = masked_template(&source, 0.4, &mut rng).unwrap();
        for i in 0..source.len() {
            let got = masked.residue_at(i).unwrap();
            if got != MASK {
                assert_eq!(got, source.residue_at(i).unwrap());
            }
        }
    }

    #[test]
    fn test_rejects_out_of_range_fraction() {
        let mut rng = StdRng::seed_from_u64(1);
        let source = wildtype(10);
        assert!(masked_template(&source, -0.1, &mut rng).is_err());
        assert!(masked_template(&source, 1.5, &mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_mask() {
        let source = wildtype(64);
        let a = masked_template(&source, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = masked_template(&source, 0.4, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }
}
