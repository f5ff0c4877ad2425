//! bmh-manifests
//!
//! Generate BMC credential Secrets and metal3 BareMetalHosts from a node
//! inventory file.

use anyhow::Context;
use bmh_manifests::{render, GeneratorConfig, ManifestGenerator, NodeInventory};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const USAGE: &str = "Usage: bmh-manifests <nodes_yaml> <output_yaml>";

#[derive(Parser)]
#[command(name = "bmh-manifests", disable_help_flag = true, disable_version_flag = true)]
#[command(about = "Generate BareMetalHost and BMC credential manifests from a node inventory")]
struct Cli {
    /// Node inventory YAML with a top-level `nodes` list
    #[arg(allow_hyphen_values = true)]
    nodes_file: PathBuf,

    /// Where to write the generated multi-document YAML
    #[arg(allow_hyphen_values = true)]
    output_file: PathBuf,
}

fn main() -> ExitCode {
    // Any argument shape other than exactly two paths is a usage error.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    if !cli.nodes_file.is_file() {
        eprintln!("Error: {} not found", cli.nodes_file.display());
        return ExitCode::FAILURE;
    }

    match run(&cli.nodes_file, &cli.output_file, GeneratorConfig::default()) {
        Ok(()) => {
            println!(
                "Generated BMC hosts configuration in {}",
                cli.output_file.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(nodes_file: &Path, output_file: &Path, config: GeneratorConfig) -> anyhow::Result<()> {
    info!(input = %nodes_file.display(), "Loading node inventory");
    let inventory = NodeInventory::load(nodes_file)
        .with_context(|| format!("Failed to load {}", nodes_file.display()))?;

    let resources = ManifestGenerator::new(config)
        .generate(&inventory)
        .context("Failed to generate manifests")?;

    render::write(&resources, output_file)?;
    Ok(())
}
