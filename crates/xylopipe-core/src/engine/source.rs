use super::error::TransportError;

/// A raw HTTP answer: status and body text. Interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// The three remote calls the pipeline makes.
///
/// Implementations must be shareable across the worker pool. A non-200 status is not
/// an error at this level; only failures to obtain any reply are.
pub trait UniProtSource: Sync {
    /// Searches with `query`, asking for `fields` as TSV columns and at most `size` rows.
    fn search(&self, query: &str, fields: &[String], size: usize)
    -> Result<HttpReply, TransportError>;

    /// The full entry document for one accession, as JSON.
    fn entry_json(&self, accession: &str) -> Result<HttpReply, TransportError>;

    /// The FASTA record for one accession.
    fn fasta(&self, accession: &str) -> Result<HttpReply, TransportError>;
}
