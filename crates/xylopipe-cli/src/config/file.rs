use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileRemoteConfig {
    pub search_url: Option<String>,
    pub entry_url: Option<String>,
    pub fields: Option<Vec<String>>,
    pub sequence_field: Option<String>,
    pub max_retries: Option<u32>,
    pub retry_backoff_ms: Option<u64>,
    pub request_delay_ms: Option<u64>,
    pub timeout_secs: Option<u64>,
    pub concurrency: Option<usize>,
    pub bulk_sequence_threshold: Option<usize>,
    pub metadata_page_limit: Option<usize>,
    pub backfill_progress_interval: Option<usize>,
    pub annotation_progress_interval: Option<usize>,
}

/// One `[[taxa]]` table.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTaxonConfig {
    pub name: String,
    pub query: String,
    pub fallback_query: Option<String>,
    pub size: Option<usize>,
    pub include_sequences: Option<bool>,
}

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub remote: Option<FileRemoteConfig>,
    pub taxa: Option<Vec<FileTaxonConfig>>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Reading configuration from {}.", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_remote_and_taxa_tables() {
        let text = r#"
            [remote]
            max-retries = 5
            request-delay-ms = 500
            concurrency = 2

            [[taxa]]
            name = "Archaeal"
            query = "xylanase AND taxonomy_id:2157"
            size = 50

            [[taxa]]
            name = "Fungal"
            query = "xylanase AND taxonomy_id:4751"
            fallback-query = "xylanase"
            include-sequences = false
        "#;
        let config: FileConfig = toml::from_str(text).unwrap();
        let remote = config.remote.unwrap();
        assert_eq!(remote.max_retries, Some(5));
        assert_eq!(remote.request_delay_ms, Some(500));
        assert_eq!(remote.concurrency, Some(2));
        assert_eq!(remote.search_url, None);

        let taxa = config.taxa.unwrap();
        assert_eq!(taxa.len(), 2);
        assert_eq!(taxa[0].size, Some(50));
        assert_eq!(taxa[1].fallback_query.as_deref(), Some("xylanase"));
        assert_eq!(taxa[1].include_sequences, Some(false));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<FileConfig>("[remote]\nretries = 5\n").is_err());
        assert!(toml::from_str::<FileConfig>("[output]\ndir = \"x\"\n").is_err());
    }

    #[test]
    fn from_file_reports_the_path_on_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[remote\n").unwrap();
        let err = FileConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { ref path, .. } if path.ends_with("bad.toml")));

        let missing = FileConfig::from_file(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(CliError::FileParsing { .. })));
    }
}
