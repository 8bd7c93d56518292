use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "xylopipe - retrieve GH10/GH11 xylanases from UniProtKB, annotate their optimum temperature and pH, classify them thermally and extract sequence features.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Number of threads for feature extraction.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch, annotate and classify xylanases for each configured taxon.
    Retrieve(RetrieveArgs),
    /// Compute the feature table of one sequence file.
    Features(FeaturesArgs),
    /// Retrieve every taxon, then extract features from each sequence file produced.
    Run(RunArgs),
}

/// Options shared by the commands that talk to the remote database.
#[derive(Args, Debug, Clone, Default)]
pub struct RetrievalOptions {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Root directory for the metadata, fasta and features outputs.
    #[arg(short, long, value_name = "DIR", default_value = "results")]
    pub output_dir: PathBuf,

    /// Set a configuration value, overriding the config file (e.g., 'remote.max-retries=5').
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `retrieve` subcommand.
#[derive(Args, Debug)]
pub struct RetrieveArgs {
    #[command(flatten)]
    pub options: RetrievalOptions,

    /// Restrict retrieval to the named taxon (case-insensitive). Repeatable.
    #[arg(long = "taxon", value_name = "NAME")]
    pub taxa: Vec<String>,
}

/// Arguments for the `features` subcommand.
#[derive(Args, Debug)]
pub struct FeaturesArgs {
    /// Sequence file in FASTA format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Destination of the feature table (CSV).
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub options: RetrievalOptions,
}
