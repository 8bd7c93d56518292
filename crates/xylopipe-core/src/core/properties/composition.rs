use crate::core::models::features::Composition;
use crate::core::models::residue::standard_residues;

/// Percentage of each standard residue over the full sequence length.
///
/// Non-standard codes count towards the length but not towards any residue, so the
/// percentages sum to 100 only for fully standard sequences.
pub fn composition(sequence: &str) -> Composition {
    let total = sequence.chars().count();
    let mut percentages = [0.0; 20];
    if total == 0 {
        return Composition(percentages);
    }

    let mut counts = [0usize; 20];
    for residue in standard_residues(sequence) {
        counts[residue.index()] += 1;
    }
    for (slot, count) in percentages.iter_mut().zip(counts) {
        *slot = count as f64 / total as f64 * 100.0;
    }
    Composition(percentages)
}
