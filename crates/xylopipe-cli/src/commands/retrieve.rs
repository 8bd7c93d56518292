use crate::cli::RetrieveArgs;
use crate::config::{AppConfig, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::{info, warn};
use xylopipe::engine::client::UniProtClient;
use xylopipe::engine::progress::Progress;
use xylopipe::engine::source::UniProtSource;
use xylopipe::workflows;

/// What retrieval produced for one taxon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonOutcome {
    pub name: String,
    pub records: usize,
    pub sequences: usize,
}

impl TaxonOutcome {
    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

pub fn run(args: RetrieveArgs, progress: &CliProgressHandler) -> Result<()> {
    info!("Merging configuration from defaults, file and CLI arguments...");
    let config = build_config(&args.options, &args.taxa)?;
    let client = UniProtClient::new(&config.retrieval.remote)?;

    let outcomes = retrieve_all(&client, &config, progress)?;
    print_summary(&outcomes);
    Ok(())
}

/// Retrieves every configured taxon in turn and writes its metadata table and
/// sequence file. A taxon without results is skipped and writes nothing.
pub fn retrieve_all<S: UniProtSource + ?Sized>(
    source: &S,
    config: &AppConfig,
    progress: &CliProgressHandler,
) -> Result<Vec<TaxonOutcome>> {
    let mut outcomes = Vec::with_capacity(config.taxa.len());

    for taxon in &config.taxa {
        println!("Retrieving {} xylanases...", taxon.name);
        let reporter = progress.reporter();

        let records = workflows::retrieve::run(source, &taxon.request, &config.retrieval, &reporter)?;

        if records.is_empty() {
            warn!("No records retrieved for {}; skipping its outputs.", taxon.name);
            reporter.report(Progress::Message(format!("{}: no records", taxon.name)));
            outcomes.push(TaxonOutcome {
                name: taxon.name.clone(),
                records: 0,
                sequences: 0,
            });
            continue;
        }

        let metadata_path = config.layout.metadata_path(&taxon.name);
        let fasta_path = config.layout.fasta_path(&taxon.name);
        workflows::retrieve::write_outputs(&records, &metadata_path, &fasta_path)?;

        let sequences = records.iter().filter(|r| r.raw().has_sequence()).count();
        println!(
            "✓ {}: {} record(s) written to {} ({} sequence(s) in {})",
            taxon.name,
            records.len(),
            metadata_path.display(),
            sequences,
            fasta_path.display()
        );
        outcomes.push(TaxonOutcome {
            name: taxon.name.clone(),
            records: records.len(),
            sequences,
        });
    }

    Ok(outcomes)
}

fn print_summary(outcomes: &[TaxonOutcome]) {
    let retrieved: Vec<&TaxonOutcome> = outcomes.iter().filter(|o| !o.is_empty()).collect();
    if retrieved.is_empty() {
        println!("Warning: no taxon returned any records.");
        return;
    }
    let total: usize = retrieved.iter().map(|o| o.records).sum();
    println!(
        "Retrieved {} record(s) across {} taxon/taxa.",
        total,
        retrieved.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RetrievalOptions;
    use mockito::{Matcher, Server, ServerGuard};
    use std::fs;
    use tempfile::tempdir;
    use xylopipe::core::io::fasta::FastaFile;
    use xylopipe::core::io::traits::RecordReader;

    const HEADER: &str = "Entry\tEntry Name\tProtein names\tOrganism\tEC number\tLength\tSequence";

    fn options_for(server: &ServerGuard, output_dir: &std::path::Path) -> RetrievalOptions {
        RetrievalOptions {
            config: None,
            output_dir: output_dir.to_path_buf(),
            set_values: vec![
                format!("remote.search-url={}/uniprotkb/search", server.url()),
                format!("remote.entry-url={}/uniprotkb", server.url()),
                "remote.request-delay-ms=0".to_string(),
                "remote.retry-backoff-ms=0".to_string(),
                "taxa.Fungal.size=5".to_string(),
                "taxa.Bacterial.size=5".to_string(),
            ],
        }
    }

    #[test]
    fn writes_outputs_per_taxon_and_skips_empty_ones() {
        let mut server = Server::new();
        let fungal = server
            .mock("GET", "/uniprotkb/search")
            .match_query(Matcher::Regex("taxonomy_id:4751".into()))
            .with_status(200)
            .with_body(format!(
                "{HEADER}\n\
                 P11111\tXYN1_ASPNG\tEndo-1,4-beta-xylanase 1\tAspergillus niger\t3.2.1.8\t12\tMKVLAADEWYGG\n\
                 P22222\tXYN2_TRIRE\tEndo-1,4-beta-xylanase 2\tTrichoderma reesei\t3.2.1.8\t10\tMKWWYYAADE\n"
            ))
            .create();
        let bacterial = server
            .mock("GET", "/uniprotkb/search")
            .match_query(Matcher::Regex("taxonomy_id:2&".into()))
            .with_status(200)
            .with_body(format!("{HEADER}\n"))
            .create();
        server
            .mock("GET", "/uniprotkb/P11111.json")
            .with_status(200)
            .with_body(
                r#"{"comments":[{"commentType":"BIOPHYSICOCHEMICAL PROPERTIES","temperatureDependence":{"texts":[{"value":"Optimum temperature is 70 degrees Celsius."}]}}]}"#,
            )
            .create();
        server
            .mock("GET", "/uniprotkb/P22222.json")
            .with_status(404)
            .create();

        let dir = tempdir().unwrap();
        let config = build_config(&options_for(&server, dir.path()), &[]).unwrap();

        let outcomes = retrieve_all(
            &UniProtClient::new(&config.retrieval.remote).unwrap(),
            &config,
            &CliProgressHandler::hidden(),
        )
        .unwrap();

        fungal.assert();
        bacterial.assert();
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].records, 2);
        assert_eq!(outcomes[0].sequences, 2);
        assert!(outcomes[1].is_empty());

        let metadata = fs::read_to_string(config.layout.metadata_path("Fungal")).unwrap();
        let rows: Vec<&str> = metadata.lines().collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[1].starts_with("P11111,"));
        assert!(rows[1].ends_with("Thermophilic"));
        assert!(rows[2].ends_with("Unknown"));

        let entries = FastaFile::read_from_path(&config.layout.fasta_path("Fungal")).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].sequence, "MKWWYYAADE");

        assert!(!config.layout.metadata_path("Bacterial").exists());
        assert!(!config.layout.fasta_path("Bacterial").exists());
    }

    #[test]
    fn rejected_queries_fail_the_command() {
        let mut server = Server::new();
        server
            .mock("GET", "/uniprotkb/search")
            .match_query(Matcher::Any)
            .with_status(400)
            .expect_at_least(1)
            .create();

        let dir = tempdir().unwrap();
        let config = build_config(&options_for(&server, dir.path()), &["Fungal".to_string()]).unwrap();

        let err = retrieve_all(
            &UniProtClient::new(&config.retrieval.remote).unwrap(),
            &config,
            &CliProgressHandler::hidden(),
        )
        .unwrap_err();

        assert!(err.to_string().starts_with("Stage 'fetch' failed:"));
    }
}
