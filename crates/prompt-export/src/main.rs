//! Export a JSONL translation dataset as a prompt artifact.
//!
//! # Examples
//!
//! ```sh
//! # Default experiment name ("translator")
//! prompt-export --input data/train.jsonl --output artifacts/translator.json
//!
//! # Named experiment, with debug logging
//! prompt-export --input data/train.jsonl --output out/ja-en.json \
//!   --experiment ja-en-v2 --verbose
//! ```

use std::path::PathBuf;
use std::process;

use clap::Parser;
use prompt_export::{DEFAULT_EXPERIMENT, ExportConfig};
use tracing_subscriber::EnvFilter;

/// Export a JSONL dataset as a prompt artifact.
#[derive(Parser)]
#[command(name = "prompt-export")]
struct Cli {
    /// Dataset JSONL
    #[arg(long)]
    input: PathBuf,

    /// Artifact JSON path
    #[arg(long)]
    output: PathBuf,

    /// Experiment name
    #[arg(long, default_value = DEFAULT_EXPERIMENT)]
    experiment: String,

    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = ExportConfig::new(cli.input, cli.output).with_experiment(cli.experiment);
    match prompt_export::run(&config) {
        Ok(_) => println!("wrote artifact to {}", config.output.display()),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
