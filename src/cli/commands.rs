use crate::core::bundler;
use crate::domain::models::BundleConfig;
use crate::infra::file_system::LocalFileSystem;
use crate::infra::logger::setup_logger;
use crate::infra::output::{ClipboardWriter, print_summary};
use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "context-paste")]
#[command(about = "Bundle project sources and docs onto the clipboard", long_about = None)]
pub struct Cli {
    /// Project root to bundle (defaults to the current directory)
    pub path: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logger(cli.verbose)?;

    info!("Starting bundle command");
    debug!("Command parameters: path={:?}", cli.path);

    let root = resolve_root(cli.path)?;
    let config = BundleConfig::default();

    let bundle = bundler::run(&LocalFileSystem, &ClipboardWriter, &config, &root)?;

    print_summary(&mut std::io::stdout(), &bundle)
}

fn resolve_root(path: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    path.canonicalize()
        .with_context(|| format!("Failed to resolve project root {}", path.display()))
}
