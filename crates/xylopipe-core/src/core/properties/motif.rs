use regex::Regex;
use std::sync::LazyLock;

// Two acidic residues at most two positions apart.
static ACIDIC_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[DE][A-Z]{0,2}[DE]").expect("motif pattern is valid"));

/// Counts non-overlapping acidic-pair matches in the uppercased sequence.
///
/// This is a crude proxy for the catalytic glutamate/aspartate pair of GH10/GH11
/// enzymes. It is not a validated active-site detector.
pub fn gh_motif_count(sequence: &str) -> usize {
    ACIDIC_PAIR
        .find_iter(&sequence.to_ascii_uppercase())
        .count()
}
