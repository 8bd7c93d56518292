use super::progress::{ProgressReporter, RecordTicker};
use super::source::UniProtSource;
use super::throttle::WorkerPool;
use crate::core::annotation::{OptimumExtractor, OptimumGrammar, optimum_from_body};
use crate::core::models::record::{EnrichedRecord, Optimum, RawRecord};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// Looks up optimum temperature and pH for accessions via their entry documents.
pub struct DetailAnnotator<'s, S: UniProtSource + ?Sized, E: OptimumExtractor = OptimumGrammar> {
    source: &'s S,
    extractor: E,
}

impl<'s, S: UniProtSource + ?Sized> DetailAnnotator<'s, S> {
    pub fn new(source: &'s S) -> Self {
        Self::with_extractor(source, OptimumGrammar)
    }
}

impl<'s, S: UniProtSource + ?Sized, E: OptimumExtractor> DetailAnnotator<'s, S, E> {
    pub fn with_extractor(source: &'s S, extractor: E) -> Self {
        Self { source, extractor }
    }

    /// Never fails: any problem with the remote or the document yields an absent optimum.
    pub fn annotate(&self, accession: &str) -> Optimum {
        match self.source.entry_json(accession) {
            Ok(reply) if reply.is_success() => optimum_from_body(&reply.body, &self.extractor),
            Ok(reply) => {
                debug!("No entry document for {} (HTTP {}).", accession, reply.status);
                Optimum::ABSENT
            }
            Err(e) => {
                debug!("Entry lookup for {} failed: {}", accession, e);
                Optimum::ABSENT
            }
        }
    }

    /// Annotates every record, calling the remote once per distinct accession.
    pub fn annotate_all(
        &self,
        records: Vec<RawRecord>,
        pool: &WorkerPool,
        progress_interval: usize,
        reporter: &ProgressReporter,
    ) -> Vec<EnrichedRecord> {
        let mut seen = HashSet::new();
        let accessions: Vec<&str> = records
            .iter()
            .map(|r| r.accession.as_str())
            .filter(|a| seen.insert(*a))
            .collect();
        info!("Annotating {} accession(s).", accessions.len());

        let ticker = RecordTicker::start(reporter, "Annotation", accessions.len(), progress_interval);
        let optima = pool.map(&accessions, &ticker, |a| self.annotate(a));
        ticker.finish();

        let found = optima.iter().filter(|o| !o.is_absent()).count();
        info!(
            "Found optimum annotations for {} of {} accession(s).",
            found,
            accessions.len()
        );

        let by_accession: HashMap<String, Optimum> = accessions
            .into_iter()
            .map(str::to_string)
            .zip(optima)
            .collect();

        records
            .into_iter()
            .map(|raw| {
                let optimum = by_accession
                    .get(&raw.accession)
                    .copied()
                    .unwrap_or(Optimum::ABSENT);
                EnrichedRecord::new(raw, optimum)
            })
            .collect()
    }
}
