use std::fmt;

/// The twenty standard amino acids, in one-letter alphabetical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StandardResidue {
    Alanine,       // A
    Cysteine,      // C
    AsparticAcid,  // D
    GlutamicAcid,  // E
    Phenylalanine, // F
    Glycine,       // G
    Histidine,     // H
    Isoleucine,    // I
    Lysine,        // K
    Leucine,       // L
    Methionine,    // M
    Asparagine,    // N
    Proline,       // P
    Glutamine,     // Q
    Arginine,      // R
    Serine,        // S
    Threonine,     // T
    Valine,        // V
    Tryptophan,    // W
    Tyrosine,      // Y
}

/// One-letter codes in the canonical column order used by every feature table.
pub const STANDARD_CODES: [char; 20] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V',
    'W', 'Y',
];

impl StandardResidue {
    pub const ALL: [StandardResidue; 20] = [
        StandardResidue::Alanine,
        StandardResidue::Cysteine,
        StandardResidue::AsparticAcid,
        StandardResidue::GlutamicAcid,
        StandardResidue::Phenylalanine,
        StandardResidue::Glycine,
        StandardResidue::Histidine,
        StandardResidue::Isoleucine,
        StandardResidue::Lysine,
        StandardResidue::Leucine,
        StandardResidue::Methionine,
        StandardResidue::Asparagine,
        StandardResidue::Proline,
        StandardResidue::Glutamine,
        StandardResidue::Arginine,
        StandardResidue::Serine,
        StandardResidue::Threonine,
        StandardResidue::Valine,
        StandardResidue::Tryptophan,
        StandardResidue::Tyrosine,
    ];

    /// Position of this residue in [`STANDARD_CODES`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn code(self) -> char {
        STANDARD_CODES[self.index()]
    }

    /// Case-insensitive lookup; anything outside the standard alphabet (B, Z, X, U, O, gaps) is `None`.
    pub fn from_code(code: char) -> Option<Self> {
        let upper = code.to_ascii_uppercase();
        STANDARD_CODES
            .iter()
            .position(|&c| c == upper)
            .map(|i| Self::ALL[i])
    }

    pub fn is_aromatic(self) -> bool {
        matches!(
            self,
            StandardResidue::Phenylalanine | StandardResidue::Tryptophan | StandardResidue::Tyrosine
        )
    }

    pub fn is_acidic(self) -> bool {
        matches!(
            self,
            StandardResidue::AsparticAcid | StandardResidue::GlutamicAcid
        )
    }
}

impl fmt::Display for StandardResidue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Iterates the standard residues of a sequence, silently skipping anything else.
pub fn standard_residues(sequence: &str) -> impl Iterator<Item = StandardResidue> + '_ {
    sequence.chars().filter_map(StandardResidue::from_code)
}
