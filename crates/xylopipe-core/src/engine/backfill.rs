use super::progress::{ProgressReporter, RecordTicker};
use super::source::UniProtSource;
use super::throttle::WorkerPool;
use crate::core::io::fasta::FastaFile;
use crate::core::models::record::RawRecord;
use tracing::{info, warn};

/// Fetches the sequence of one accession. Failures are logged and yield `None`.
pub fn fetch_sequence<S: UniProtSource + ?Sized>(source: &S, accession: &str) -> Option<String> {
    match source.fasta(accession) {
        Ok(reply) if reply.is_success() => {
            let sequence = FastaFile::sequence_from_str(&reply.body);
            if sequence.is_empty() {
                warn!("Empty sequence returned for {}.", accession);
                None
            } else {
                Some(sequence)
            }
        }
        Ok(reply) => {
            warn!(
                "Failed to fetch sequence for {} (HTTP {}).",
                accession, reply.status
            );
            None
        }
        Err(e) => {
            warn!("Failed to fetch sequence for {}: {}", accession, e);
            None
        }
    }
}

/// Fills in missing sequences one accession at a time through the worker pool.
///
/// Every record keeps its metadata; only `sequence` may remain `None`. Records that
/// already carry a sequence are not fetched again. Order is preserved.
pub fn backfill_sequences<S: UniProtSource + ?Sized>(
    source: &S,
    records: Vec<RawRecord>,
    pool: &WorkerPool,
    progress_interval: usize,
    reporter: &ProgressReporter,
) -> Vec<RawRecord> {
    let pending: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| !r.has_sequence())
        .map(|(i, _)| i)
        .collect();
    info!(
        "Fetching sequences for {} of {} record(s).",
        pending.len(),
        records.len()
    );

    let ticker = RecordTicker::start(reporter, "Sequence backfill", pending.len(), progress_interval);
    let fetched = pool.map(&pending, &ticker, |&i| {
        fetch_sequence(source, &records[i].accession)
    });
    ticker.finish();

    let mut records = records;
    let mut missing = 0;
    for (i, sequence) in pending.into_iter().zip(fetched) {
        if sequence.is_none() {
            missing += 1;
        }
        records[i].sequence = sequence;
    }
    if missing > 0 {
        warn!("{} record(s) still have no sequence after backfill.", missing);
    }
    records
}
