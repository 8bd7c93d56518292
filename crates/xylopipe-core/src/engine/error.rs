use thiserror::Error;

use super::config::ConfigError;
use crate::core::io::fasta::FastaError;
use crate::core::io::table::TableError;
use crate::core::models::record::InvalidSize;

/// Terminal outcome of a search that could not produce a table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RetrievalError {
    #[error("query rejected by the remote: {query} ({reason})")]
    QueryRejected { query: String, reason: String },

    #[error("gave up after {attempts} attempt(s); last failure: {last_failure}")]
    Exhausted { attempts: u32, last_failure: String },
}

/// A failure of the transport itself (connection, timeout, body read).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("transport error: {0}")]
pub struct TransportError(pub String);

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Stage '{stage}' failed: {source}")]
    StageFailed {
        stage: &'static str,
        #[source]
        source: RetrievalError,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client could not be built: {0}")]
    Client(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed sequence file: {0}")]
    SequenceFile(String),

    #[error("Worker pool could not be built: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl From<TableError> for EngineError {
    fn from(e: TableError) -> Self {
        match e {
            TableError::Io(e) => EngineError::Io(e),
            TableError::Csv(e) => EngineError::Csv(e),
        }
    }
}

impl From<InvalidSize> for EngineError {
    fn from(_: InvalidSize) -> Self {
        EngineError::InvalidRequest("size must be positive".into())
    }
}

impl From<FastaError> for EngineError {
    fn from(e: FastaError) -> Self {
        match e {
            FastaError::Io(e) => EngineError::Io(e),
            other => EngineError::SequenceFile(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_failure_names_stage_and_reason() {
        let err = EngineError::StageFailed {
            stage: "fetch",
            source: RetrievalError::Exhausted {
                attempts: 3,
                last_failure: "HTTP 503".into(),
            },
        };
        assert_eq!(
            err.to_string(),
            "Stage 'fetch' failed: gave up after 3 attempt(s); last failure: HTTP 503"
        );
    }

    #[test]
    fn fasta_parse_errors_keep_their_message() {
        let err: EngineError = FastaError::OrphanSequence { line: 4 }.into();
        assert!(matches!(err, EngineError::SequenceFile(ref m) if m.contains("line 4")));
    }

    #[test]
    fn empty_requests_are_invalid() {
        use crate::core::models::record::QueryRequest;

        let err: EngineError = QueryRequest::new("xylanase", 0, true).unwrap_err().into();
        assert_eq!(err.to_string(), "Invalid request: size must be positive");
    }
}
