use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::AsyncWriteExt;
use tracing::info;
use tracing_subscriber::EnvFilter;

use showcase_core::ManifestBuilder;

/// Collect the bundled example projects into a JSON manifest on stdout.
#[derive(Parser, Debug)]
#[command(name = "showcase", version)]
struct Args {
    /// Directory holding one subdirectory per example
    root: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the manifest, so logs go to stderr and stay quiet by default.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let manifest = ManifestBuilder::new(&args.root)
        .build()
        .await
        .with_context(|| format!("failed to build manifest from {}", args.root.display()))?;

    let json = manifest
        .to_json_pretty()
        .context("failed to serialize manifest")?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(json.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    info!("Wrote manifest with {} examples", manifest.len());

    Ok(())
}
