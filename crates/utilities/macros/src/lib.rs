//! Metric recording macros.
//!
//! Each macro expands to a call into the `metrics` crate guarded by `#[cfg(feature = "metrics")]`.
//! The guard is evaluated in the calling crate, so callers record metrics unconditionally and
//! only pay for them when their own `metrics` feature is enabled.
#![no_std]

/// Increments a counter or gauge by one.
///
/// ```ignore
/// bridge_macros::inc!(counter, Metrics::EVENTS_PROCESSED, "event" => "GatewaySet");
/// ```
#[macro_export]
macro_rules! inc {
    ($instrument:ident, $metric:expr $(, $key:expr => $value:expr)* $(,)?) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric $(, $key => $value)*).increment(1);
    };
}

/// Sets a gauge, optionally under a single label.
///
/// ```ignore
/// bridge_macros::set!(gauge, Metrics::LAST_BLOCK, block.number as f64);
/// bridge_macros::set!(gauge, Metrics::LAST_BLOCK, "era", era.to_string(), block.number as f64);
/// ```
#[macro_export]
macro_rules! set {
    ($instrument:ident, $metric:expr, $value:expr $(,)?) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric).set($value);
    };
    ($instrument:ident, $metric:expr, $key:expr, $label:expr, $value:expr $(,)?) => {
        #[cfg(feature = "metrics")]
        metrics::$instrument!($metric, $key => $label).set($value);
    };
}
