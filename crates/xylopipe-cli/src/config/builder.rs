use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileRemoteConfig, FileTaxonConfig};
use super::models::{AppConfig, TaxonPlan};
use crate::cli::RetrievalOptions;
use crate::error::{CliError, Result};
use crate::layout::OutputLayout;
use std::str::FromStr;
use std::time::Duration;
use tracing::debug;
use xylopipe::core::models::record::QueryRequest;
use xylopipe::engine::config as core_config;

/// Merges defaults, the config file, `--set` overrides and flags, in that order.
pub fn build_config(options: &RetrievalOptions, taxon_filter: &[String]) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &options.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let mut file_config = apply_set_values(file_config, &options.set_values, &defaults)?;

    let remote = file_config.remote.take().unwrap_or_default();
    let retrieval = merge_remote(remote, &defaults)?;

    let taxa = file_config
        .taxa
        .take()
        .unwrap_or_else(|| default_taxa(&defaults));
    let taxa = select_taxa(to_plans(taxa, &defaults)?, taxon_filter)?;
    debug!(
        "Configured taxa: {:?}",
        taxa.iter().map(|t| t.name.as_str()).collect::<Vec<_>>()
    );

    Ok(AppConfig {
        retrieval,
        taxa,
        layout: OutputLayout::new(&options.output_dir),
    })
}

fn merge_remote(
    remote: FileRemoteConfig,
    defaults: &DefaultsConfig,
) -> Result<core_config::RetrievalConfig> {
    core_config::RetrievalConfigBuilder::new()
        .search_url(remote.search_url.unwrap_or_else(|| defaults.search_url.clone()))
        .entry_url(remote.entry_url.unwrap_or_else(|| defaults.entry_url.clone()))
        .metadata_fields(
            remote
                .fields
                .unwrap_or_else(|| defaults.metadata_fields.clone()),
        )
        .sequence_field(
            remote
                .sequence_field
                .unwrap_or_else(|| defaults.sequence_field.clone()),
        )
        .max_retries(remote.max_retries.unwrap_or(defaults.max_retries))
        .retry_backoff(Duration::from_millis(
            remote.retry_backoff_ms.unwrap_or(defaults.retry_backoff_ms),
        ))
        .request_delay(Duration::from_millis(
            remote.request_delay_ms.unwrap_or(defaults.request_delay_ms),
        ))
        .timeout(Duration::from_secs(
            remote.timeout_secs.unwrap_or(defaults.timeout_secs),
        ))
        .concurrency(remote.concurrency.unwrap_or(defaults.concurrency))
        .bulk_sequence_threshold(
            remote
                .bulk_sequence_threshold
                .unwrap_or(defaults.bulk_sequence_threshold),
        )
        .metadata_page_limit(
            remote
                .metadata_page_limit
                .unwrap_or(defaults.metadata_page_limit),
        )
        .backfill_progress_interval(
            remote
                .backfill_progress_interval
                .unwrap_or(defaults.backfill_progress_interval),
        )
        .annotation_progress_interval(
            remote
                .annotation_progress_interval
                .unwrap_or(defaults.annotation_progress_interval),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

fn default_taxa(defaults: &DefaultsConfig) -> Vec<FileTaxonConfig> {
    defaults
        .taxa
        .iter()
        .map(|t| FileTaxonConfig {
            name: t.name.to_string(),
            query: t.query(),
            fallback_query: Some(t.fallback_query()),
            size: Some(t.size),
            include_sequences: None,
        })
        .collect()
}

fn to_plans(taxa: Vec<FileTaxonConfig>, defaults: &DefaultsConfig) -> Result<Vec<TaxonPlan>> {
    if taxa.is_empty() {
        return Err(CliError::Config("At least one taxon must be configured".to_string()));
    }
    let mut plans: Vec<TaxonPlan> = Vec::with_capacity(taxa.len());
    for taxon in taxa {
        let name = taxon.name.trim().to_string();
        if name.is_empty() {
            return Err(CliError::Config("Taxon names must not be empty".to_string()));
        }
        if plans.iter().any(|p| p.name.eq_ignore_ascii_case(&name)) {
            return Err(CliError::Config(format!("Taxon '{}' is configured twice", name)));
        }
        let size = taxon.size.unwrap_or(defaults.taxon_size);
        let include_sequences = taxon.include_sequences.unwrap_or(defaults.include_sequences);
        let mut request = QueryRequest::new(taxon.query, size, include_sequences)
            .map_err(|_| CliError::Config(format!("Taxon '{}' must request at least one record", name)))?;
        if let Some(fallback) = taxon.fallback_query {
            request = request.with_fallback(fallback);
        }
        plans.push(TaxonPlan { name, request });
    }
    Ok(plans)
}

fn select_taxa(plans: Vec<TaxonPlan>, filter: &[String]) -> Result<Vec<TaxonPlan>> {
    if filter.is_empty() {
        return Ok(plans);
    }
    if let Some(unknown) = filter
        .iter()
        .find(|wanted| !plans.iter().any(|p| p.name.eq_ignore_ascii_case(wanted.trim())))
    {
        let known: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
        return Err(CliError::Argument(format!(
            "Unknown taxon '{}'. Configured taxa: {}",
            unknown,
            known.join(", ")
        )));
    }
    Ok(plans
        .into_iter()
        .filter(|p| filter.iter().any(|w| p.name.eq_ignore_ascii_case(w.trim())))
        .collect())
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn apply_set_values(
    mut config: FileConfig,
    set_values: &[String],
    defaults: &DefaultsConfig,
) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };
        let key = key.trim();

        if let Some(remote_key) = key.strip_prefix("remote.") {
            set_remote_value(config.remote.get_or_insert_with(Default::default), remote_key, key, value)?;
            continue;
        }

        if let Some((taxon_name, field)) = key
            .strip_prefix("taxa.")
            .and_then(|rest| rest.rsplit_once('.'))
        {
            let taxa = config.taxa.get_or_insert_with(|| default_taxa(defaults));
            let Some(taxon) = taxa
                .iter_mut()
                .find(|t| t.name.eq_ignore_ascii_case(taxon_name))
            else {
                return Err(CliError::Config(format!(
                    "Unknown taxon in --set key '{}'",
                    key
                )));
            };
            set_taxon_value(taxon, field, key, value)?;
            continue;
        }

        return Err(CliError::Config(format!(
            "Unsupported configuration key for --set: '{}'",
            key
        )));
    }
    Ok(config)
}

fn set_remote_value(
    remote: &mut FileRemoteConfig,
    field: &str,
    key: &str,
    value: &str,
) -> Result<()> {
    match field {
        "search-url" => remote.search_url = Some(value.trim().to_string()),
        "entry-url" => remote.entry_url = Some(value.trim().to_string()),
        "fields" => {
            remote.fields = Some(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|f| !f.is_empty())
                    .map(String::from)
                    .collect(),
            )
        }
        "sequence-field" => remote.sequence_field = Some(value.trim().to_string()),
        "max-retries" => remote.max_retries = Some(parse_value(key, value, "integer")?),
        "retry-backoff-ms" => remote.retry_backoff_ms = Some(parse_value(key, value, "integer")?),
        "request-delay-ms" => remote.request_delay_ms = Some(parse_value(key, value, "integer")?),
        "timeout-secs" => remote.timeout_secs = Some(parse_value(key, value, "integer")?),
        "concurrency" => remote.concurrency = Some(parse_value(key, value, "integer")?),
        "bulk-sequence-threshold" => {
            remote.bulk_sequence_threshold = Some(parse_value(key, value, "integer")?)
        }
        "metadata-page-limit" => {
            remote.metadata_page_limit = Some(parse_value(key, value, "integer")?)
        }
        "backfill-progress-interval" => {
            remote.backfill_progress_interval = Some(parse_value(key, value, "integer")?)
        }
        "annotation-progress-interval" => {
            remote.annotation_progress_interval = Some(parse_value(key, value, "integer")?)
        }
        _ => {
            return Err(CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                key
            )));
        }
    }
    Ok(())
}

fn set_taxon_value(taxon: &mut FileTaxonConfig, field: &str, key: &str, value: &str) -> Result<()> {
    match field {
        "query" => taxon.query = value.to_string(),
        "fallback-query" => taxon.fallback_query = Some(value.to_string()),
        "size" => taxon.size = Some(parse_value(key, value, "integer")?),
        "include-sequences" => taxon.include_sequences = Some(parse_value(key, value, "boolean")?),
        _ => {
            return Err(CliError::Config(format!(
                "Unsupported configuration key for --set: '{}'",
                key
            )));
        }
    }
    Ok(())
}
