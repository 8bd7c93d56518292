use xylopipe::engine::config as core_config;

pub const UNIPROT_SEARCH_URL: &str = "https://rest.uniprot.org/uniprotkb/search";
pub const UNIPROT_ENTRY_URL: &str = "https://rest.uniprot.org/uniprotkb";

pub const BASE_QUERY: &str = r#"(GH10 OR GH11) AND (xylanase OR "beta-xylosidase") AND reviewed:true"#;

/// A taxon retrieved when the configuration file names none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultTaxon {
    pub name: &'static str,
    pub taxonomy_id: u32,
    pub size: usize,
}

impl DefaultTaxon {
    pub fn query(&self) -> String {
        format!("{} AND taxonomy_id:{}", BASE_QUERY, self.taxonomy_id)
    }

    pub fn fallback_query(&self) -> String {
        format!("xylanase AND reviewed:true AND taxonomy_id:{}", self.taxonomy_id)
    }
}

pub struct DefaultsConfig {
    pub search_url: String,
    pub entry_url: String,
    pub metadata_fields: Vec<String>,
    pub sequence_field: String,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
    pub request_delay_ms: u64,
    pub timeout_secs: u64,
    pub concurrency: usize,
    pub bulk_sequence_threshold: usize,
    pub metadata_page_limit: usize,
    pub backfill_progress_interval: usize,
    pub annotation_progress_interval: usize,
    pub include_sequences: bool,
    pub taxon_size: usize,
    pub taxa: Vec<DefaultTaxon>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            search_url: UNIPROT_SEARCH_URL.to_string(),
            entry_url: UNIPROT_ENTRY_URL.to_string(),
            metadata_fields: ["accession", "id", "protein_name", "organism_name", "ec", "length"]
                .map(String::from)
                .to_vec(),
            sequence_field: "sequence".to_string(),
            max_retries: core_config::DEFAULT_MAX_RETRIES,
            retry_backoff_ms: core_config::DEFAULT_RETRY_BACKOFF.as_millis() as u64,
            request_delay_ms: core_config::DEFAULT_REQUEST_DELAY.as_millis() as u64,
            timeout_secs: core_config::DEFAULT_TIMEOUT.as_secs(),
            concurrency: core_config::DEFAULT_CONCURRENCY,
            bulk_sequence_threshold: core_config::DEFAULT_BULK_SEQUENCE_THRESHOLD,
            metadata_page_limit: core_config::DEFAULT_METADATA_PAGE_LIMIT,
            backfill_progress_interval: core_config::DEFAULT_BACKFILL_PROGRESS_INTERVAL,
            annotation_progress_interval: core_config::DEFAULT_ANNOTATION_PROGRESS_INTERVAL,
            include_sequences: true,
            taxon_size: 200,
            taxa: vec![
                DefaultTaxon {
                    name: "Fungal",
                    taxonomy_id: 4751,
                    size: 200,
                },
                DefaultTaxon {
                    name: "Bacterial",
                    taxonomy_id: 2,
                    size: 200,
                },
            ],
        }
    }
}
