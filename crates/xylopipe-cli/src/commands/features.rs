use crate::cli::FeaturesArgs;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use tracing::{info, warn};
use xylopipe::workflows;

pub fn run(args: FeaturesArgs, progress: &CliProgressHandler) -> Result<()> {
    info!("Extracting features from {:?}", &args.input);
    let reporter = progress.reporter();

    let vectors = workflows::features::run(&args.input, &args.output, &reporter)?;

    if vectors.is_empty() {
        warn!("No sequences found in {}.", args.input.display());
        println!("Warning: {} contains no sequences.", args.input.display());
    } else {
        println!(
            "✓ {} feature vector(s) written to: {}",
            vectors.len(),
            args.output.display()
        );
    }
    Ok(())
}
