use std::path::{Path, PathBuf};

/// Where each taxon's outputs live under the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn metadata_path(&self, taxon: &str) -> PathBuf {
        self.root
            .join("metadata")
            .join(format!("{}_xylanase_sequences_metadata.csv", file_stem(taxon)))
    }

    pub fn fasta_path(&self, taxon: &str) -> PathBuf {
        self.root
            .join("fasta")
            .join(format!("{}_xylanase_sequences.fasta", file_stem(taxon)))
    }

    pub fn features_path(&self, taxon: &str) -> PathBuf {
        self.root
            .join("features")
            .join(format!("{}_xylanase_features.csv", file_stem(taxon)))
    }
}

fn file_stem(taxon: &str) -> String {
    taxon
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect()
}
