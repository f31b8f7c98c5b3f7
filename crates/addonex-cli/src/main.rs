use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "addonex")]
#[command(about = "Addon content extractor for plugin record snapshots")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan plugin snapshots and export their addon content
    Scan {
        /// Record snapshot files, one per plugin
        #[arg(required = true)]
        snapshots: Vec<PathBuf>,

        /// Scan configuration (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Directory to write `<plugin>.json` files into
        #[arg(long)]
        json_dir: Option<PathBuf>,

        /// Mod listing metadata (JSON) attached to the matching plugin
        #[arg(long)]
        metadata: Option<PathBuf>,

        /// Log item kinds and scripts that are not exported
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print one record of a snapshot
    Inspect {
        /// Record snapshot file
        snapshot: PathBuf,

        /// Record key, as `XXXXXX:File.esm`
        key: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("addonex=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Scan {
            snapshots,
            config,
            json_dir,
            metadata,
            verbose,
        } => commands::scan::run(
            &snapshots,
            config.as_deref(),
            json_dir.as_deref(),
            metadata.as_deref(),
            verbose,
        ),
        Command::Inspect { snapshot, key } => commands::inspect::run(&snapshot, &key),
    }
}
