use super::residue::{STANDARD_CODES, StandardResidue};

/// Column names of the physicochemical scalars, in table order.
pub const SCALAR_COLUMNS: [&str; 6] = [
    "length",
    "molecular_weight",
    "isoelectric_point",
    "gravy",
    "instability_index",
    "aromaticity",
];

pub const MOTIF_COLUMN: &str = "gh_motif_count";

pub const IDENTITY_COLUMNS: [&str; 4] = ["Accession", "Protein_Name", "Organism", "Sequence"];

/// Percentage of each standard residue, indexed by [`StandardResidue::index`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Composition(pub [f64; 20]);

impl Composition {
    pub fn get(&self, residue: StandardResidue) -> f64 {
        self.0[residue.index()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// Sequence-level descriptors. For fragments too short to characterise, every field
/// except `length` is zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Physicochemical {
    pub length: usize,
    pub molecular_weight: f64,
    pub isoelectric_point: f64,
    pub gravy: f64,
    pub instability_index: f64,
    pub aromaticity: f64,
}

impl Physicochemical {
    pub fn placeholder(length: usize) -> Self {
        Self {
            length,
            ..Default::default()
        }
    }

    pub fn values(&self) -> [f64; 6] {
        [
            self.length as f64,
            self.molecular_weight,
            self.isoelectric_point,
            self.gravy,
            self.instability_index,
            self.aromaticity,
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub composition: Composition,
    pub physicochemical: Physicochemical,
    /// Acidic-pair proximity count. A rough proxy for catalytic-site presence, not a validated motif.
    pub gh_motif_count: usize,
    pub accession: String,
    pub protein_name: String,
    pub organism: String,
    pub sequence: String,
}

impl FeatureVector {
    /// Header row of the feature table.
    pub fn columns() -> Vec<String> {
        STANDARD_CODES
            .iter()
            .map(|c| c.to_string())
            .chain(SCALAR_COLUMNS.iter().map(|s| s.to_string()))
            .chain(std::iter::once(MOTIF_COLUMN.to_string()))
            .chain(IDENTITY_COLUMNS.iter().map(|s| s.to_string()))
            .collect()
    }

    /// Cells in the same order as [`FeatureVector::columns`].
    pub fn cells(&self) -> Vec<String> {
        let mut cells = Vec::with_capacity(31);
        cells.extend(self.composition.0.iter().map(|v| v.to_string()));
        cells.push(self.physicochemical.length.to_string());
        cells.extend(
            self.physicochemical.values()[1..]
                .iter()
                .map(|v| v.to_string()),
        );
        cells.push(self.gh_motif_count.to_string());
        cells.push(self.accession.clone());
        cells.push(self.protein_name.clone());
        cells.push(self.organism.clone());
        cells.push(self.sequence.clone());
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        let mut composition = [0.0; 20];
        composition[StandardResidue::Alanine.index()] = 50.0;
        composition[StandardResidue::Cysteine.index()] = 50.0;
        FeatureVector {
            composition: Composition(composition),
            physicochemical: Physicochemical::placeholder(4),
            gh_motif_count: 0,
            accession: "P1".into(),
            protein_name: "Xylanase".into(),
            organism: "Unknown".into(),
            sequence: "AACC".into(),
        }
    }

    #[test]
    fn columns_and_cells_line_up() {
        let columns = FeatureVector::columns();
        let cells = sample().cells();
        assert_eq!(columns.len(), 31);
        assert_eq!(cells.len(), columns.len());
        assert_eq!(columns[0], "A");
        assert_eq!(columns[19], "Y");
        assert_eq!(columns[20], "length");
        assert_eq!(columns[26], "gh_motif_count");
        assert_eq!(columns[30], "Sequence");
        assert_eq!(cells[0], "50");
        assert_eq!(cells[20], "4");
        assert_eq!(cells[27], "P1");
    }

    #[test]
    fn placeholder_keeps_only_length() {
        let p = Physicochemical::placeholder(7);
        assert_eq!(p.values(), [7.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn composition_accessors() {
        let v = sample();
        assert_eq!(v.composition.get(StandardResidue::Alanine), 50.0);
        assert_eq!(v.composition.total(), 100.0);
    }
}
