use crate::core::io::fasta::FastaFile;
use crate::core::io::table::FeatureTable;
use crate::core::io::traits::{RecordReader, RecordWriter};
use crate::core::models::features::FeatureVector;
use crate::core::models::sequence::SequenceEntry;
use crate::core::properties::extract_features;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// Feature vectors for every entry, computed in parallel, in input order.
pub fn extract_all(entries: &[SequenceEntry], reporter: &ProgressReporter) -> Vec<FeatureVector> {
    reporter.report(Progress::RecordsStart {
        total: entries.len() as u64,
    });
    let vectors = entries
        .par_iter()
        .map(|entry| {
            let vector = extract_features(entry);
            reporter.report(Progress::RecordDone);
            vector
        })
        .collect();
    reporter.report(Progress::RecordsFinish);
    vectors
}

/// Reads a sequence file, extracts features and writes the feature table.
#[instrument(skip_all, name = "features_workflow", fields(input = %input.display()))]
pub fn run(
    input: &Path,
    output: &Path,
    reporter: &ProgressReporter,
) -> Result<Vec<FeatureVector>, EngineError> {
    reporter.report(Progress::StageStart { name: "Features" });

    let entries = FastaFile::read_from_path(input)?;
    info!("Loaded {} sequence(s) from {}.", entries.len(), input.display());

    let vectors = extract_all(&entries, reporter);

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    FeatureTable::write_to_path(&vectors, output)?;
    info!(
        "Extracted {} feature vector(s); saved to {}.",
        vectors.len(),
        output.display()
    );

    reporter.report(Progress::StageFinish);
    Ok(vectors)
}
