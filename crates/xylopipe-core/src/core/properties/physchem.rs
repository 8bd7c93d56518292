use super::tables::{
    AVERAGE_MASS, C_TERMINAL_RESIDUE_PK, C_TERMINUS_PK, DIWV, KYTE_DOOLITTLE, N_TERMINAL_RESIDUE_PK,
    N_TERMINUS_PK, NEGATIVE_PK, POSITIVE_PK, WATER_MASS,
};
use crate::core::models::features::Physicochemical;
use crate::core::models::residue::{StandardResidue, standard_residues};

/// Sequences shorter than this get placeholder scalars.
pub const MIN_LENGTH: usize = 10;

const PI_START: f64 = 7.775;
const PI_LOWER: f64 = 4.05;
const PI_UPPER: f64 = 12.0;
const PI_TOLERANCE: f64 = 0.0001;

/// Computes the sequence-level scalars. Residues outside the standard alphabet are
/// ignored by every scalar but still count towards the length.
pub fn physicochemical(sequence: &str) -> Physicochemical {
    let length = sequence.chars().count();
    if length < MIN_LENGTH {
        return Physicochemical::placeholder(length);
    }

    Physicochemical {
        length,
        molecular_weight: molecular_weight(sequence),
        isoelectric_point: isoelectric_point(sequence),
        gravy: gravy(sequence),
        instability_index: instability_index(sequence),
        aromaticity: aromaticity(sequence),
    }
}

/// Average mass in daltons: free amino-acid masses minus one water per peptide bond.
pub fn molecular_weight(sequence: &str) -> f64 {
    let (count, mass) = standard_residues(sequence)
        .filter_map(|r| AVERAGE_MASS.get(&r.code()))
        .fold((0usize, 0.0), |(n, m), w| (n + 1, m + w));
    if count == 0 {
        return 0.0;
    }
    mass - (count - 1) as f64 * WATER_MASS
}

/// Grand average of hydropathy over the standard residues.
pub fn gravy(sequence: &str) -> f64 {
    let (count, sum) = standard_residues(sequence)
        .filter_map(|r| KYTE_DOOLITTLE.get(&r.code()))
        .fold((0usize, 0.0), |(n, s), h| (n + 1, s + h));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// `10 / L * Σ DIWV(x_i, x_{i+1})`; pairs involving a non-standard residue contribute nothing.
pub fn instability_index(sequence: &str) -> f64 {
    let residues: Vec<Option<StandardResidue>> =
        sequence.chars().map(StandardResidue::from_code).collect();
    if residues.is_empty() {
        return 0.0;
    }
    let score: f64 = residues
        .windows(2)
        .filter_map(|pair| match pair {
            [Some(a), Some(b)] => Some(DIWV[a.index()][b.index()]),
            _ => None,
        })
        .sum();
    10.0 / residues.len() as f64 * score
}

/// Fraction of F, W and Y over the full length.
pub fn aromaticity(sequence: &str) -> f64 {
    let length = sequence.chars().count();
    if length == 0 {
        return 0.0;
    }
    standard_residues(sequence).filter(|r| r.is_aromatic()).count() as f64 / length as f64
}

struct ChargeModel {
    positive: Vec<f64>,
    negative: Vec<f64>,
}

impl ChargeModel {
    fn new(sequence: &str) -> Self {
        let residues: Vec<StandardResidue> = standard_residues(sequence).collect();

        let n_term = residues
            .first()
            .and_then(|r| N_TERMINAL_RESIDUE_PK.get(&r.code()))
            .copied()
            .unwrap_or(N_TERMINUS_PK);
        let c_term = residues
            .last()
            .and_then(|r| C_TERMINAL_RESIDUE_PK.get(&r.code()))
            .copied()
            .unwrap_or(C_TERMINUS_PK);

        let mut positive = vec![n_term];
        let mut negative = vec![c_term];
        for residue in &residues {
            let code = residue.code();
            if let Some(pk) = POSITIVE_PK.get(&code) {
                positive.push(*pk);
            } else if let Some(pk) = NEGATIVE_PK.get(&code) {
                negative.push(*pk);
            }
        }
        Self { positive, negative }
    }

    /// Net charge at `ph` by Henderson–Hasselbalch.
    fn charge_at(&self, ph: f64) -> f64 {
        let positive: f64 = self
            .positive
            .iter()
            .map(|pk| 1.0 / (10f64.powf(ph - pk) + 1.0))
            .sum();
        let negative: f64 = self
            .negative
            .iter()
            .map(|pk| 1.0 / (10f64.powf(pk - ph) + 1.0))
            .sum();
        positive - negative
    }
}

/// pH of zero net charge, found by bisection.
pub fn isoelectric_point(sequence: &str) -> f64 {
    let model = ChargeModel::new(sequence);

    let (mut lower, mut upper) = (PI_LOWER, PI_UPPER);
    while model.charge_at(lower) < 0.0 {
        lower -= 1.0;
    }
    while model.charge_at(upper) > 0.0 {
        upper += 1.0;
    }

    let mut ph = PI_START.clamp(lower, upper);
    while upper - lower > PI_TOLERANCE {
        if model.charge_at(ph) > 0.0 {
            lower = ph;
        } else {
            upper = ph;
        }
        ph = (lower + upper) / 2.0;
    }
    ph
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLY_ALA: &str = "AAAAAAAAAA";

    fn close(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn short_sequences_get_placeholders() {
        let p = physicochemical("MKVLAAGGW");
        assert_eq!(p, Physicochemical::placeholder(9));
        assert_eq!(physicochemical("").length, 0);
    }

    #[test]
    fn molecular_weight_subtracts_one_water_per_bond() {
        let expected = 10.0 * 89.0932 - 9.0 * WATER_MASS;
        assert!(close(molecular_weight(POLY_ALA), expected, 1e-9));
        assert!(close(molecular_weight("G"), 75.0666, 1e-9));
    }

    #[test]
    fn gravy_is_mean_hydropathy() {
        assert!(close(gravy(POLY_ALA), 1.8, 1e-12));
        assert!(close(gravy("AAAAAIIIII"), 3.15, 1e-12));
        assert!(close(gravy("AAXAA"), 1.8, 1e-12));
    }

    #[test]
    fn instability_of_neutral_pairs() {
        // nine A-A pairs weighted 1.0 each
        assert!(close(instability_index(POLY_ALA), 9.0, 1e-12));
        // A-C = 44.94, C-A = 1.0
        assert!(close(instability_index("ACA"), 10.0 / 3.0 * 45.94, 1e-9));
        // both pairs touch X
        assert!(close(instability_index("AXA"), 0.0, 1e-12));
    }

    #[test]
    fn aromaticity_is_fraction_of_fwy() {
        assert!(close(aromaticity("FWYAAAAAAA"), 0.3, 1e-12));
        assert_eq!(aromaticity(POLY_ALA), 0.0);
    }

    #[test]
    fn isoelectric_point_of_uncharged_chain_sits_between_termini() {
        // N-terminal alanine pK 7.59, C-terminus 3.55
        assert!(close(isoelectric_point(POLY_ALA), (7.59 + 3.55) / 2.0, 0.001));
    }

    #[test]
    fn isoelectric_point_tracks_charged_residues() {
        let basic = isoelectric_point("KKKKKKKKKK");
        let acidic = isoelectric_point("DDDDDDDDDD");
        assert!(basic > 9.5, "basic pI {basic}");
        assert!(acidic < 4.0, "acidic pI {acidic}");
    }

    #[test]
    fn full_profile_for_realistic_fragment() {
        let p = physicochemical("MKVTAAFAGLLVTAFAAPVPEPVLVSRSAGINYVQNYNGNLGDFTYDESAGTFSMYWEDGVSSDFVVGLGWTTGSSNAITYSAEYSASGSSSYLAVYGWVNYPQAEYYIVEDYGDYNPCSSATSLGTVYSDGSTYQVCTDTRTNEPSITGTSTFTQYFSVRESTRTSGTVTVANHFNFWAQHGFGNSDFNYQVMAVEAWSGAGSASVTISS");
        assert_eq!(p.length, 211);
        assert!(p.molecular_weight > 20_000.0 && p.molecular_weight < 25_000.0);
        assert!(p.isoelectric_point > 3.0 && p.isoelectric_point < 6.0);
        assert!(p.aromaticity > 0.0 && p.aromaticity < 1.0);
    }
}
