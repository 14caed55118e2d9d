//! Utilities shared by the bridge indexer binaries.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod error;
pub use error::{CliError, CliResult, PrometheusError};

pub mod log;
pub use log::LogArgs;

pub mod metrics_args;
pub use metrics_args::MetricsArgs;

mod prometheus;
pub use prometheus::init_prometheus_server;
