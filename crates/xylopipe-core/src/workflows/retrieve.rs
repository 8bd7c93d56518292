use crate::core::classify::classify_records;
use crate::core::io::fasta::FastaFile;
use crate::core::io::table::MetadataTable;
use crate::core::io::traits::RecordWriter;
use crate::core::models::record::{ClassifiedRecord, QueryRequest, ThermalClass};
use crate::core::models::sequence::SequenceEntry;
use crate::core::normalize::{ColumnMap, normalize};
use crate::engine::annotator::DetailAnnotator;
use crate::engine::backfill::backfill_sequences;
use crate::engine::config::RetrievalConfig;
use crate::engine::error::EngineError;
use crate::engine::fetcher::RecordFetcher;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::source::UniProtSource;
use crate::engine::throttle::WorkerPool;
use std::fs;
use std::path::Path;
use tracing::{info, instrument};

/// How a request is served by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPlan {
    pub fields: Vec<String>,
    pub size: usize,
    pub backfill: bool,
}

impl FetchPlan {
    /// Small sequence requests get sequences inline. Everything else is a metadata-only
    /// search capped at the page limit, followed by a backfill when sequences are wanted.
    pub fn for_request(request: &QueryRequest, config: &RetrievalConfig) -> Self {
        if request.include_sequences && !config.needs_backfill(request.size, true) {
            return Self {
                fields: config.fields.with_sequence.clone(),
                size: request.size,
                backfill: false,
            };
        }
        Self {
            fields: config.fields.metadata.clone(),
            size: request.size.min(config.metadata_page_limit),
            backfill: request.include_sequences,
        }
    }
}

/// Fetch, normalize, annotate and classify the records matching `request`.
#[instrument(skip_all, name = "retrieval_workflow", fields(query = %request.query, size = request.size))]
pub fn run<S: UniProtSource + ?Sized>(
    source: &S,
    request: &QueryRequest,
    config: &RetrievalConfig,
    reporter: &ProgressReporter,
) -> Result<Vec<ClassifiedRecord>, EngineError> {
    if request.size == 0 {
        return Err(EngineError::InvalidRequest("size must be positive".into()));
    }
    let plan = FetchPlan::for_request(request, config);
    let pool = WorkerPool::new(&config.pacing)?;

    // === Stage 1: search ===
    reporter.report(Progress::StageStart { name: "Search" });
    info!(
        "Searching (size {}, {}).",
        plan.size,
        if plan.backfill {
            "metadata only, sequences backfilled"
        } else if request.include_sequences {
            "sequences inline"
        } else {
            "metadata only"
        }
    );
    let table = RecordFetcher::new(source, config.retry)
        .fetch(request, &plan.fields, plan.size)
        .map_err(|source| EngineError::StageFailed {
            stage: "fetch",
            source,
        })?;
    let (records, _schema) = ColumnMap::default().project(&table);
    reporter.report(Progress::StageFinish);

    // === Stage 2: sequences ===
    let records = if plan.backfill {
        reporter.report(Progress::StageStart { name: "Sequences" });
        let unique = normalize(records, false);
        let filled = backfill_sequences(
            source,
            unique,
            &pool,
            config.pacing.backfill_progress_interval,
            reporter,
        );
        reporter.report(Progress::StageFinish);
        normalize(filled, true)
    } else {
        normalize(records, request.include_sequences)
    };

    // === Stage 3: annotation ===
    reporter.report(Progress::StageStart { name: "Annotation" });
    let enriched = DetailAnnotator::new(source).annotate_all(
        records,
        &pool,
        config.pacing.annotation_progress_interval,
        reporter,
    );
    reporter.report(Progress::StageFinish);

    // === Stage 4: classification ===
    let classified = classify_records(enriched);
    log_class_counts(&classified);

    Ok(classified)
}

fn log_class_counts(records: &[ClassifiedRecord]) {
    for class in ThermalClass::ALL {
        let count = records.iter().filter(|r| r.thermo_class == class).count();
        if count > 0 {
            info!("{}: {} record(s).", class, count);
        }
    }
}

/// Writes the metadata table and the sequence file. Records without a sequence appear
/// only in the metadata table.
pub fn write_outputs(
    records: &[ClassifiedRecord],
    metadata_path: &Path,
    fasta_path: &Path,
) -> Result<(), EngineError> {
    for path in [metadata_path, fasta_path] {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
    }

    MetadataTable::write_to_path(records, metadata_path)?;
    info!("Metadata saved to {}.", metadata_path.display());

    let entries: Vec<SequenceEntry> = records
        .iter()
        .map(ClassifiedRecord::raw)
        .filter(|r| r.has_sequence())
        .map(SequenceEntry::from_record)
        .collect();
    FastaFile::write_to_path(&entries, fasta_path)?;
    info!("{} sequence(s) saved to {}.", entries.len(), fasta_path.display());
    Ok(())
}
