//! Sequence-derived descriptors: residue composition, physicochemical scalars and the
//! acidic-pair motif count.

pub mod composition;
pub mod motif;
pub mod physchem;
pub mod tables;

use crate::core::models::features::FeatureVector;
use crate::core::models::sequence::SequenceEntry;

/// Builds the full feature vector of one sequence entry. Identifying fields come from
/// the entry header.
pub fn extract_features(entry: &SequenceEntry) -> FeatureVector {
    let sequence = entry.sequence.to_ascii_uppercase();
    let fields = entry.fields();
    FeatureVector {
        composition: composition::composition(&sequence),
        physicochemical: physchem::physicochemical(&sequence),
        gh_motif_count: motif::gh_motif_count(&sequence),
        accession: fields.accession,
        protein_name: fields.protein_name,
        organism: fields.organism,
        sequence,
    }
}
