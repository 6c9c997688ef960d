use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use isort::sorter::{FileSorter, SortMode};
use isort::walk;

/// Sort and group Ruby dependency declarations in place.
#[derive(Parser)]
#[command(name = "isort", version, about = "Sort and group Ruby import declarations")]
#[command(group = clap::ArgGroup::new("target").required(true))]
struct Cli {
    /// File to sort
    #[arg(short, long, group = "target")]
    file: Option<PathBuf>,

    /// Directory to sort recursively
    #[arg(short, long, group = "target")]
    directory: Option<PathBuf>,

    /// Use the legacy single-block sorter instead of kind grouping
    #[arg(long)]
    simple: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mode = if cli.simple {
        SortMode::Simple
    } else {
        SortMode::Grouping
    };

    if let Some(file) = cli.file {
        FileSorter::new(&file)
            .sort_with(mode)
            .with_context(|| format!("failed to sort {}", file.display()))?;
        println!("Imports sorted in {}", file.display());
    } else if let Some(dir) = cli.directory {
        let count = walk::sort_directory(&dir, mode)
            .with_context(|| format!("failed to sort directory {}", dir.display()))?;
        println!(
            "Sorted imports in {} files in directory: {}",
            count,
            dir.display()
        );
    }

    Ok(())
}
