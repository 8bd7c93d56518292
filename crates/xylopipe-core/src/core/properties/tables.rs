//! Per-residue reference constants.

use phf::{Map, phf_map};

/// Average residue masses of the free amino acids in daltons.
pub static AVERAGE_MASS: Map<char, f64> = phf_map! {
    'A' => 89.0932,
    'C' => 121.1582,
    'D' => 133.1027,
    'E' => 147.1293,
    'F' => 165.1891,
    'G' => 75.0666,
    'H' => 155.1546,
    'I' => 131.1729,
    'K' => 146.1876,
    'L' => 131.1729,
    'M' => 149.2113,
    'N' => 132.1179,
    'P' => 115.1305,
    'Q' => 146.1445,
    'R' => 174.201,
    'S' => 105.0926,
    'T' => 119.1192,
    'V' => 117.1463,
    'W' => 204.2252,
    'Y' => 181.1885,
};

/// Mass lost per peptide bond.
pub const WATER_MASS: f64 = 18.01528;

/// Kyte–Doolittle hydropathy.
pub static KYTE_DOOLITTLE: Map<char, f64> = phf_map! {
    'A' => 1.8,
    'R' => -4.5,
    'N' => -3.5,
    'D' => -3.5,
    'C' => 2.5,
    'Q' => -3.5,
    'E' => -3.5,
    'G' => -0.4,
    'H' => -3.2,
    'I' => 4.5,
    'L' => 3.8,
    'K' => -3.9,
    'M' => 1.9,
    'F' => 2.8,
    'P' => -1.6,
    'S' => -0.8,
    'T' => -0.7,
    'W' => -0.9,
    'Y' => -1.3,
    'V' => 4.2,
};

/// Side-chain pKs of residues carrying a positive charge when protonated.
pub static POSITIVE_PK: Map<char, f64> = phf_map! {
    'K' => 10.0,
    'R' => 12.0,
    'H' => 5.98,
};

/// Side-chain pKs of residues carrying a negative charge when deprotonated.
pub static NEGATIVE_PK: Map<char, f64> = phf_map! {
    'D' => 4.05,
    'E' => 4.45,
    'C' => 9.0,
    'Y' => 10.0,
};

pub const N_TERMINUS_PK: f64 = 7.5;
pub const C_TERMINUS_PK: f64 = 3.55;

/// Amino-terminus pK overrides keyed by the first residue.
pub static N_TERMINAL_RESIDUE_PK: Map<char, f64> = phf_map! {
    'A' => 7.59,
    'M' => 7.0,
    'S' => 6.93,
    'P' => 8.36,
    'T' => 6.82,
    'V' => 7.44,
    'E' => 7.7,
};

/// Carboxyl-terminus pK overrides keyed by the last residue.
pub static C_TERMINAL_RESIDUE_PK: Map<char, f64> = phf_map! {
    'D' => 4.55,
    'E' => 4.75,
};

/// Guruprasad dipeptide instability weights, `DIWV[first][second]`, both indexed in
/// `ACDEFGHIKLMNPQRSTVWY` order.
pub const DIWV: [[f64; 20]; 20] = [
    // A
    [
        1.0, 44.94, -7.49, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, 1.0,
        1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
    ],
    // C
    [
        1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 33.6, 1.0, 1.0, 20.26,
        33.6, 1.0, 20.26, -6.54, 1.0, 1.0, 33.6, -6.54, 24.68, 1.0,
    ],
    // D
    [
        1.0, 1.0, 1.0, 1.0, -6.54, 1.0, 1.0, 1.0, -7.49, 1.0,
        1.0, 1.0, 1.0, 1.0, -6.54, 20.26, -14.03, 1.0, 1.0, 1.0,
    ],
    // E
    [
        1.0, 44.94, 20.26, 33.6, 1.0, 1.0, -6.54, 20.26, 1.0, 1.0,
        1.0, 1.0, 20.26, 20.26, 1.0, 20.26, 1.0, 1.0, -14.03, 1.0,
    ],
    // F
    [
        1.0, 1.0, 13.34, 1.0, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0,
        1.0, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 33.601,
    ],
    // G
    [
        -7.49, 1.0, 1.0, -6.54, 1.0, 13.34, 1.0, -7.49, -7.49, 1.0,
        1.0, -7.49, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 13.34, -7.49,
    ],
    // H
    [
        1.0, 1.0, 1.0, 1.0, -9.37, -9.37, 1.0, 44.94, 24.68, 1.0,
        1.0, 24.68, -1.88, 1.0, 1.0, 1.0, -6.54, 1.0, -1.88, 44.94,
    ],
    // I
    [
        1.0, 1.0, 1.0, 44.94, 1.0, 1.0, 13.34, 1.0, -7.49, 20.26,
        1.0, 1.0, -1.88, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0,
    ],
    // K
    [
        1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0, -7.49, 1.0, -7.49,
        33.6, 1.0, -6.54, 24.64, 33.6, 1.0, 1.0, -7.49, 1.0, 1.0,
    ],
    // L
    [
        1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 1.0,
        1.0, 1.0, 20.26, 33.6, 20.26, 1.0, 1.0, 1.0, 24.68, 1.0,
    ],
    // M
    [
        13.34, 1.0, 1.0, 1.0, 1.0, 1.0, 58.28, 1.0, 1.0, 1.0,
        -1.88, 1.0, 44.94, -6.54, -6.54, 44.94, -1.88, 1.0, 1.0, 24.68,
    ],
    // N
    [
        1.0, -1.88, 1.0, 1.0, -14.03, -14.03, 1.0, 44.94, 24.68, 1.0,
        1.0, 1.0, -1.88, -6.54, 1.0, 1.0, -7.49, 1.0, -9.37, 1.0,
    ],
    // P
    [
        20.26, -6.54, -6.54, 18.38, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0,
        -6.54, 1.0, 20.26, 20.26, -6.54, 20.26, 1.0, 20.26, -1.88, 1.0,
    ],
    // Q
    [
        1.0, -6.54, 20.26, 20.26, -6.54, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 20.26, 20.26, 1.0, 44.94, 1.0, -6.54, 1.0, -6.54,
    ],
    // R
    [
        1.0, 1.0, 1.0, 1.0, 1.0, -7.49, 20.26, 1.0, 1.0, 1.0,
        1.0, 13.34, 20.26, 20.26, 58.28, 44.94, 1.0, 1.0, 58.28, -6.54,
    ],
    // S
    [
        1.0, 33.6, 1.0, 20.26, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
        1.0, 1.0, 44.94, 20.26, 20.26, 20.26, 1.0, 1.0, 1.0, 1.0,
    ],
    // T
    [
        1.0, 1.0, 1.0, 20.26, 13.34, -7.49, 1.0, 1.0, 1.0, 1.0,
        1.0, -14.03, 1.0, -6.54, 1.0, 1.0, 1.0, 1.0, -14.03, 1.0,
    ],
    // V
    [
        1.0, 1.0, -14.03, 1.0, 1.0, -7.49, 1.0, 1.0, -1.88, 1.0,
        1.0, 1.0, 20.26, 1.0, 1.0, 1.0, -7.49, 1.0, 1.0, -6.54,
    ],
    // W
    [
        -14.03, 1.0, 1.0, 1.0, 1.0, -9.37, 24.68, 1.0, 1.0, 13.34,
        24.68, 13.34, 1.0, 1.0, 1.0, 1.0, -14.03, -7.49, 1.0, 1.0,
    ],
    // Y
    [
        24.68, 1.0, 24.68, -6.54, 1.0, -7.49, 13.34, 1.0, 1.0, 1.0,
        44.94, 1.0, 13.34, 1.0, -15.91, 1.0, -7.49, 1.0, -9.37, 13.34,
    ],
];
