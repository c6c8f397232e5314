//! netfilt - configuration-driven batch filtering of weighted networks.

use clap::Parser;
use netfilt::config::RunConfig;
use netfilt::error::{NetfiltError, Result};
use netfilt::pipeline::{run_adjacency_pipeline, run_network_pipeline};
use std::path::{Path, PathBuf};

/// Configuration-driven filtering and normalization of weighted networks
#[derive(Parser)]
#[command(name = "netfilt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(default_value = "config.json")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli.config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(config_path: &Path) -> Result<()> {
    eprintln!("Loading configuration from {:?}...", config_path);
    let config = RunConfig::from_file(config_path)?;
    let output_dir = Path::new("output");

    let mut ran = false;

    if config.has_network_pipeline() {
        eprintln!("Filtering network collection...");
        let summary = run_network_pipeline(&config, output_dir)?;
        eprintln!(
            "Done! {} networks ({} filtered, {} edges removed)",
            summary.networks, summary.filtered, summary.edges_removed
        );
        ran = true;
    }

    if config.has_adjacency_pipeline() {
        eprintln!("Normalizing adjacency matrices...");
        let summary = run_adjacency_pipeline(&config, output_dir)?;
        eprintln!(
            "Done! {} manifest entries expanded to {} files",
            summary.entries, summary.files
        );
        ran = true;
    }

    if !ran {
        return Err(NetfiltError::InvalidParameter(
            "configuration selects no pipeline: set \"network\", or \"index\" and \"csv\""
                .to_string(),
        ));
    }

    Ok(())
}
