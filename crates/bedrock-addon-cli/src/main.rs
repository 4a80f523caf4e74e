mod config;
mod demo;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use bedrock_addon_pack::AddonManager;
use clap::Parser;
use config::CliConfig;
use tracing::info;

/// Generate a Bedrock behaviour pack and resource pack pair.
#[derive(Debug, Parser)]
#[command(name = "bedrock-addon")]
#[command(version)]
struct Cli {
    /// Defaults file (TOML, or flat JSON when the extension is `.json`)
    #[arg(short, long, default_value = "addon.toml")]
    config: PathBuf,

    /// Output directory, overrides `[output] directory`
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Don't ask before erasing the output directory
    #[arg(short, long)]
    yes: bool,
}

fn main() {
    let cli = Cli::parse();
    let config = CliConfig::load_or_default(&cli.config);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    if let Err(e) = run(&cli, &config) {
        eprintln!("ERROR: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli, config: &CliConfig) -> anyhow::Result<()> {
    let addon_config = config.addon_config(cli.out.clone());
    let out = addon_config.output_dir.clone();

    if out.exists() && !out.is_dir() {
        bail!("'{}' must be a directory!", out.display());
    }
    if !cli.yes && !confirm_erase(&out)? {
        info!("Aborted, nothing was written");
        return Ok(());
    }

    let mut manager =
        AddonManager::new(addon_config).context("Failed to initialize AddonManager")?;
    demo::register(&mut manager)?;
    manager.generate().context("Failed to generate addon")?;

    println!("\nFinished!");
    Ok(())
}

fn confirm_erase(out: &Path) -> anyhow::Result<bool> {
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(format!(
            "WARNING: If you continue, any files in '{}' will be erased! Continue?",
            out.display()
        ))
        .default(false)
        .interact()?;
    Ok(confirmed)
}
