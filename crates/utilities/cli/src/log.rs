//! Logging arguments and tracing subscriber setup.

use crate::{CliError, CliResult};
use clap::{ArgAction, Parser};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Logging arguments shared by the binaries.
///
/// `RUST_LOG` directives take precedence over the level chosen here.
#[derive(Parser, Default, Clone, Debug, PartialEq, Eq)]
pub struct LogArgs {
    /// Increases log verbosity: `-v` for debug, `-vv` for trace.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,
    /// Only log warnings and errors.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbosity")]
    pub quiet: bool,
    /// Disables ANSI colors in log output.
    #[arg(long = "log.no-color", global = true)]
    pub no_color: bool,
}

impl LogArgs {
    /// The default level selected by the flags.
    pub const fn level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::WARN;
        }
        match self.verbosity {
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Installs a global fmt subscriber writing to stderr.
    pub fn init_tracing(&self) -> CliResult<()> {
        let filter =
            EnvFilter::builder().with_default_directive(self.level().into()).from_env_lossy();
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(!self.no_color)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|err| CliError::TracingInitialization(err.to_string()))
    }
}
