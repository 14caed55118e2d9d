//! Contains the indexer CLI.

use crate::replay;
use bridge_cli::{LogArgs, MetricsArgs};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Replays recorded bridge events into entities.
#[derive(Parser, Clone, Debug)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// Logging arguments.
    #[command(flatten)]
    pub(crate) log_args: LogArgs,
    /// Prometheus CLI arguments.
    #[command(flatten)]
    pub(crate) metrics: MetricsArgs,
    /// Path to the indexer config JSON.
    #[arg(long, short = 'c', env = "BRIDGE_INDEXER_CONFIG")]
    pub(crate) config: PathBuf,
    /// Path to the JSON-lines event file.
    #[arg(long, short = 'e', env = "BRIDGE_INDEXER_EVENTS")]
    pub(crate) events: PathBuf,
    /// Where to write the entities. Defaults to stdout.
    #[arg(long, short = 'o', env = "BRIDGE_INDEXER_OUTPUT")]
    pub(crate) output: Option<PathBuf>,
}

impl Cli {
    /// Runs the replay.
    pub(crate) fn run(self) -> anyhow::Result<()> {
        self.log_args.init_tracing()?;
        self.metrics.init_metrics()?;

        let summary = replay::run(&self.config, &self.events, self.output.as_deref())?;
        info!(
            target: "bridge_indexer",
            processed = summary.processed,
            ignored = summary.ignored,
            failed = summary.failed,
            "Replay finished"
        );
        Ok(())
    }
}
