//! Prometheus CLI arguments.

use crate::{CliResult, init_prometheus_server};
use clap::Parser;
use std::net::IpAddr;

/// Configuration for the Prometheus metrics server.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
pub struct MetricsArgs {
    /// Serves Prometheus metrics when set.
    #[arg(long = "metrics.enabled", global = true, env = "BRIDGE_METRICS_ENABLED")]
    pub enabled: bool,
    /// The address the metrics server listens on.
    #[arg(
        long = "metrics.addr",
        global = true,
        default_value = "0.0.0.0",
        env = "BRIDGE_METRICS_ADDR"
    )]
    pub addr: IpAddr,
    /// The port the metrics server listens on. `0` picks a free port.
    #[arg(
        long = "metrics.port",
        global = true,
        default_value_t = 9090,
        env = "BRIDGE_METRICS_PORT"
    )]
    pub port: u16,
}

impl Default for MetricsArgs {
    fn default() -> Self {
        Self { enabled: false, addr: IpAddr::from([0, 0, 0, 0]), port: 9090 }
    }
}

impl MetricsArgs {
    /// Starts the metrics server if enabled.
    pub fn init_metrics(&self) -> CliResult<()> {
        if self.enabled {
            init_prometheus_server(self.addr, self.port)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_args() {
        let args = MetricsArgs::try_parse_from(["test"]).unwrap();
        assert_eq!(args, MetricsArgs::default());
    }

    #[test]
    fn test_metrics_args() {
        let args = MetricsArgs::try_parse_from([
            "test",
            "--metrics.enabled",
            "--metrics.addr",
            "127.0.0.1",
            "--metrics.port",
            "0",
        ])
        .unwrap();
        assert!(args.enabled);
        assert_eq!(args.addr, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(args.port, 0);
    }

    #[test]
    fn test_disabled_metrics_is_noop() {
        MetricsArgs::default().init_metrics().unwrap();
    }
}
