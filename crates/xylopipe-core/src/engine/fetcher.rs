use super::config::RetryPolicy;
use super::error::RetrievalError;
use super::source::UniProtSource;
use crate::core::io::tsv::TsvTable;
use crate::core::models::record::QueryRequest;
use std::thread;
use tracing::{info, warn};

/// Runs a search with bounded retries and a single switch to the fallback query when
/// the remote rejects the primary one.
pub struct RecordFetcher<'s, S: UniProtSource + ?Sized> {
    source: &'s S,
    policy: RetryPolicy,
}

impl<'s, S: UniProtSource + ?Sized> RecordFetcher<'s, S> {
    pub fn new(source: &'s S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Returns the parsed table or a terminal error; never a partial table.
    ///
    /// - 200: the body is parsed; an unparseable body counts as a transient failure.
    /// - 400: the fallback query is tried exactly once; any failure there is terminal.
    /// - any other status or a transport error: retried after the backoff, except after
    ///   the last attempt.
    pub fn fetch(
        &self,
        request: &QueryRequest,
        fields: &[String],
        size: usize,
    ) -> Result<TsvTable, RetrievalError> {
        let attempts = self.policy.max_retries;
        let mut last_failure = String::new();

        for attempt in 1..=attempts {
            let failure = match self.source.search(&request.query, fields, size) {
                Ok(reply) if reply.is_success() => match TsvTable::parse(&reply.body) {
                    Ok(table) => {
                        info!("Search returned {} row(s).", table.len());
                        return Ok(table);
                    }
                    Err(e) => format!("unparseable TSV body: {e}"),
                },
                Ok(reply) if reply.status == 400 => {
                    return self.fetch_fallback(request, fields, size);
                }
                Ok(reply) => format!("HTTP {}", reply.status),
                Err(e) => e.to_string(),
            };

            warn!(
                "Search attempt {}/{} failed: {}",
                attempt, attempts, failure
            );
            last_failure = failure;
            if attempt < attempts && !self.policy.backoff.is_zero() {
                thread::sleep(self.policy.backoff);
            }
        }

        Err(RetrievalError::Exhausted {
            attempts,
            last_failure,
        })
    }

    fn fetch_fallback(
        &self,
        request: &QueryRequest,
        fields: &[String],
        size: usize,
    ) -> Result<TsvTable, RetrievalError> {
        let Some(fallback) = request.fallback_query.as_deref() else {
            return Err(RetrievalError::QueryRejected {
                query: request.query.clone(),
                reason: "HTTP 400 and no fallback query configured".into(),
            });
        };

        warn!(
            "Query rejected (HTTP 400); retrying once with fallback query: {}",
            fallback
        );
        let rejected = |reason: String| RetrievalError::QueryRejected {
            query: fallback.to_string(),
            reason,
        };

        match self.source.search(fallback, fields, size) {
            Ok(reply) if reply.is_success() => {
                let table = TsvTable::parse(&reply.body)
                    .map_err(|e| rejected(format!("fallback body unparseable: {e}")))?;
                info!("Fallback search returned {} row(s).", table.len());
                Ok(table)
            }
            Ok(reply) => Err(rejected(format!("fallback returned HTTP {}", reply.status))),
            Err(e) => Err(rejected(format!("fallback failed: {e}"))),
        }
    }
}
