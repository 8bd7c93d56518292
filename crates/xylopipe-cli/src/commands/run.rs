use super::retrieve::retrieve_all;
use crate::cli::RunArgs;
use crate::config::{AppConfig, build_config};
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};
use xylopipe::engine::client::UniProtClient;
use xylopipe::workflows;

pub fn run(args: RunArgs, progress: &CliProgressHandler) -> Result<()> {
    let config = build_config(&args.options, &[])?;
    let client = UniProtClient::new(&config.retrieval.remote)?;

    println!("=== Stage 1: retrieval ===");
    let started = Instant::now();
    let outcomes = retrieve_all(&client, &config, progress)?;
    let retrieved = outcomes.iter().filter(|o| !o.is_empty()).count();
    println!(
        "Retrieval finished for {} of {} taxon/taxa in {:.1}s.",
        retrieved,
        outcomes.len(),
        started.elapsed().as_secs_f64()
    );

    println!("=== Stage 2: feature extraction ===");
    let started = Instant::now();
    let written = extract_features(&config, progress)?;
    println!(
        "Feature extraction wrote {} table(s) in {:.1}s.",
        written.len(),
        started.elapsed().as_secs_f64()
    );
    println!("Outputs are under {}.", config.layout.root().display());

    Ok(())
}

/// Extracts features from each taxon's sequence file that exists; missing files
/// are warned about and skipped.
pub fn extract_features(config: &AppConfig, progress: &CliProgressHandler) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    for taxon in &config.taxa {
        let input = config.layout.fasta_path(&taxon.name);
        if !input.is_file() {
            warn!(
                "No sequence file for {} at {}; skipping feature extraction.",
                taxon.name,
                input.display()
            );
            continue;
        }

        let output = config.layout.features_path(&taxon.name);
        let vectors = workflows::features::run(&input, &output, &progress.reporter())?;
        info!("{}: {} feature vector(s).", taxon.name, vectors.len());
        println!(
            "✓ {}: features written to {}",
            taxon.name,
            output.display()
        );
        written.push(output);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::RetrievalOptions;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn only_existing_sequence_files_get_features() {
        let dir = tempdir().unwrap();
        let options = RetrievalOptions {
            config: None,
            output_dir: dir.path().to_path_buf(),
            set_values: vec![],
        };
        let config = build_config(&options, &[]).unwrap();

        let fasta = config.layout.fasta_path("Bacterial");
        fs::create_dir_all(fasta.parent().unwrap()).unwrap();
        fs::write(
            &fasta,
            ">P1 | Xylanase A | Bacillus subtilis\nMKVLAADEWYGGST\n>P2 | Xylanase B | Thermotoga maritima\nAACC\n",
        )
        .unwrap();

        let written = extract_features(&config, &CliProgressHandler::hidden()).unwrap();

        assert_eq!(written, vec![config.layout.features_path("Bacterial")]);
        assert_eq!(fs::read_to_string(&written[0]).unwrap().lines().count(), 3);
        assert!(!config.layout.features_path("Fungal").exists());
    }
}
