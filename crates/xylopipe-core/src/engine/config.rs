use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(2);
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(300);
pub const DEFAULT_CONCURRENCY: usize = 1;
pub const DEFAULT_BULK_SEQUENCE_THRESHOLD: usize = 25;
pub const DEFAULT_METADATA_PAGE_LIMIT: usize = 500;
pub const DEFAULT_BACKFILL_PROGRESS_INTERVAL: usize = 20;
pub const DEFAULT_ANNOTATION_PROGRESS_INTERVAL: usize = 10;

/// Where the remote lives and how to talk to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Search endpoint returning TSV tables.
    pub search_url: String,
    /// Base of the per-accession endpoints (`{entry_url}/{accession}.json|.fasta`).
    pub entry_url: String,
    pub timeout: Duration,
    pub user_agent: String,
}

/// Result columns requested from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLists {
    pub metadata: Vec<String>,
    /// Used when sequences are requested inline; normally `metadata` plus `sequence`.
    pub with_sequence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub backoff: Duration,
}

/// Pacing of per-accession calls and their progress reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingConfig {
    /// Minimum spacing between any two per-accession requests, across all workers.
    pub request_delay: Duration,
    pub concurrency: usize,
    pub backfill_progress_interval: usize,
    pub annotation_progress_interval: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalConfig {
    pub remote: RemoteConfig,
    pub fields: FieldLists,
    pub retry: RetryPolicy,
    pub pacing: PacingConfig,
    /// Largest request served with inline sequences; above it sequences are backfilled.
    pub bulk_sequence_threshold: usize,
    /// Cap on metadata-only requests.
    pub metadata_page_limit: usize,
}

impl RetrievalConfig {
    /// Whether a request of `size` with sequences takes the backfill path.
    pub fn needs_backfill(&self, size: usize, include_sequences: bool) -> bool {
        include_sequences && size > self.bulk_sequence_threshold
    }
}

/// Builds a [`RetrievalConfig`]. Endpoints and field lists are required; every other
/// knob falls back to its `DEFAULT_*` value.
#[derive(Default)]
pub struct RetrievalConfigBuilder {
    search_url: Option<String>,
    entry_url: Option<String>,
    metadata_fields: Option<Vec<String>>,
    sequence_field: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    max_retries: Option<u32>,
    retry_backoff: Option<Duration>,
    request_delay: Option<Duration>,
    concurrency: Option<usize>,
    backfill_progress_interval: Option<usize>,
    annotation_progress_interval: Option<usize>,
    bulk_sequence_threshold: Option<usize>,
    metadata_page_limit: Option<usize>,
}

impl RetrievalConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_url(mut self, url: impl Into<String>) -> Self {
        self.search_url = Some(url.into());
        self
    }
    pub fn entry_url(mut self, url: impl Into<String>) -> Self {
        self.entry_url = Some(url.into());
        self
    }
    pub fn metadata_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metadata_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }
    pub fn sequence_field(mut self, field: impl Into<String>) -> Self {
        self.sequence_field = Some(field.into());
        self
    }
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }
    pub fn retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = Some(backoff);
        self
    }
    pub fn request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = Some(delay);
        self
    }
    pub fn concurrency(mut self, workers: usize) -> Self {
        self.concurrency = Some(workers);
        self
    }
    pub fn backfill_progress_interval(mut self, every: usize) -> Self {
        self.backfill_progress_interval = Some(every);
        self
    }
    pub fn annotation_progress_interval(mut self, every: usize) -> Self {
        self.annotation_progress_interval = Some(every);
        self
    }
    pub fn bulk_sequence_threshold(mut self, threshold: usize) -> Self {
        self.bulk_sequence_threshold = Some(threshold);
        self
    }
    pub fn metadata_page_limit(mut self, limit: usize) -> Self {
        self.metadata_page_limit = Some(limit);
        self
    }

    pub fn build(self) -> Result<RetrievalConfig, ConfigError> {
        let metadata = self
            .metadata_fields
            .ok_or(ConfigError::MissingParameter("metadata_fields"))?;
        if metadata.is_empty() {
            return Err(invalid("metadata_fields", "at least one field is required"));
        }
        let sequence_field = self
            .sequence_field
            .ok_or(ConfigError::MissingParameter("sequence_field"))?;
        let mut with_sequence = metadata.clone();
        if !with_sequence.contains(&sequence_field) {
            with_sequence.push(sequence_field);
        }

        let remote = RemoteConfig {
            search_url: self
                .search_url
                .ok_or(ConfigError::MissingParameter("search_url"))?,
            entry_url: self
                .entry_url
                .ok_or(ConfigError::MissingParameter("entry_url"))?
                .trim_end_matches('/')
                .to_string(),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent: self
                .user_agent
                .unwrap_or_else(|| concat!("xylopipe/", env!("CARGO_PKG_VERSION")).to_string()),
        };

        let retry = RetryPolicy {
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            backoff: self.retry_backoff.unwrap_or(DEFAULT_RETRY_BACKOFF),
        };
        if retry.max_retries == 0 {
            return Err(invalid("max_retries", "must be at least 1"));
        }

        let pacing = PacingConfig {
            request_delay: self.request_delay.unwrap_or(DEFAULT_REQUEST_DELAY),
            concurrency: self.concurrency.unwrap_or(DEFAULT_CONCURRENCY),
            backfill_progress_interval: self
                .backfill_progress_interval
                .unwrap_or(DEFAULT_BACKFILL_PROGRESS_INTERVAL),
            annotation_progress_interval: self
                .annotation_progress_interval
                .unwrap_or(DEFAULT_ANNOTATION_PROGRESS_INTERVAL),
        };
        if pacing.concurrency == 0 {
            return Err(invalid("concurrency", "must be at least 1"));
        }
        if pacing.backfill_progress_interval == 0 || pacing.annotation_progress_interval == 0 {
            return Err(invalid("progress_interval", "must be at least 1"));
        }

        let metadata_page_limit = self
            .metadata_page_limit
            .unwrap_or(DEFAULT_METADATA_PAGE_LIMIT);
        if metadata_page_limit == 0 {
            return Err(invalid("metadata_page_limit", "must be at least 1"));
        }

        Ok(RetrievalConfig {
            remote,
            fields: FieldLists {
                metadata,
                with_sequence,
            },
            retry,
            pacing,
            bulk_sequence_threshold: self
                .bulk_sequence_threshold
                .unwrap_or(DEFAULT_BULK_SEQUENCE_THRESHOLD),
            metadata_page_limit,
        })
    }
}

fn invalid(name: &'static str, reason: &str) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.to_string(),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn builder() -> RetrievalConfigBuilder {
        RetrievalConfigBuilder::new()
            .search_url("http://localhost/uniprotkb/search")
            .entry_url("http://localhost/uniprotkb/")
            .metadata_fields(["accession", "id", "protein_name", "organism_name", "ec", "length"])
            .sequence_field("sequence")
    }

    /// A configuration that never sleeps.
    pub(crate) fn instant() -> RetrievalConfig {
        builder()
            .retry_backoff(Duration::ZERO)
            .request_delay(Duration::ZERO)
            .build()
            .unwrap()
    }

    #[test]
    fn defaults_are_applied() {
        let config = builder().build().unwrap();
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.retry.backoff, Duration::from_secs(2));
        assert_eq!(config.pacing.request_delay, Duration::from_millis(300));
        assert_eq!(config.pacing.concurrency, 1);
        assert_eq!(config.pacing.backfill_progress_interval, 20);
        assert_eq!(config.pacing.annotation_progress_interval, 10);
        assert_eq!(config.bulk_sequence_threshold, 25);
        assert_eq!(config.metadata_page_limit, 500);
        assert_eq!(config.remote.timeout, Duration::from_secs(30));
        assert!(config.remote.user_agent.starts_with("xylopipe/"));
    }

    #[test]
    fn entry_url_loses_trailing_slash() {
        assert_eq!(
            builder().build().unwrap().remote.entry_url,
            "http://localhost/uniprotkb"
        );
    }

    #[test]
    fn sequence_field_appended_once() {
        let config = builder().build().unwrap();
        assert_eq!(config.fields.with_sequence.last().map(String::as_str), Some("sequence"));
        assert_eq!(config.fields.with_sequence.len(), config.fields.metadata.len() + 1);

        let config = builder()
            .metadata_fields(["accession", "sequence"])
            .build()
            .unwrap();
        assert_eq!(config.fields.with_sequence, vec!["accession", "sequence"]);
    }

    #[test]
    fn missing_endpoint_is_reported() {
        let result = RetrievalConfigBuilder::new()
            .metadata_fields(["accession"])
            .sequence_field("sequence")
            .entry_url("http://localhost")
            .build();
        assert_eq!(result, Err(ConfigError::MissingParameter("search_url")));
    }

    #[test]
    fn zero_concurrency_and_retries_are_rejected() {
        assert!(matches!(
            builder().concurrency(0).build(),
            Err(ConfigError::InvalidParameter { name: "concurrency", .. })
        ));
        assert!(matches!(
            builder().max_retries(0).build(),
            Err(ConfigError::InvalidParameter { name: "max_retries", .. })
        ));
    }

    #[test]
    fn backfill_only_above_threshold_with_sequences() {
        let config = builder().build().unwrap();
        assert!(!config.needs_backfill(25, true));
        assert!(config.needs_backfill(26, true));
        assert!(!config.needs_backfill(200, false));
    }
}
