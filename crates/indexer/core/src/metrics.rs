//! Metrics for the bridge indexer.

/// Container for the metric names recorded by the indexer.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Events handled to completion, labelled by event name.
    pub const EVENTS_PROCESSED: &'static str = "bridge_indexer_events_processed_total";
    /// Events dropped after a handler error, labelled by event name.
    pub const EVENTS_FAILED: &'static str = "bridge_indexer_events_failed_total";
    /// Duplicate events skipped, labelled by entity kind.
    pub const DUPLICATES_SKIPPED: &'static str = "bridge_indexer_duplicates_skipped_total";
    /// Entities written to the store, labelled by entity kind.
    pub const ENTITIES_SAVED: &'static str = "bridge_indexer_entities_saved_total";
    /// The number of the block of the last processed event.
    pub const LAST_BLOCK: &'static str = "bridge_indexer_last_block";

    /// Describes and zeroes every indexer metric.
    pub fn init() {
        Self::describe();
        Self::zero();
    }

    fn describe() {
        metrics::describe_counter!(
            Self::EVENTS_PROCESSED,
            metrics::Unit::Count,
            "Bridge events handled to completion",
        );
        metrics::describe_counter!(
            Self::EVENTS_FAILED,
            metrics::Unit::Count,
            "Bridge events dropped after a handler error",
        );
        metrics::describe_counter!(
            Self::DUPLICATES_SKIPPED,
            metrics::Unit::Count,
            "Duplicate ticket and deposit events skipped",
        );
        metrics::describe_counter!(
            Self::ENTITIES_SAVED,
            metrics::Unit::Count,
            "Entities written to the store",
        );
        metrics::describe_gauge!(
            Self::LAST_BLOCK,
            metrics::Unit::Count,
            "Block number of the last processed bridge event",
        );
    }

    fn zero() {
        metrics::counter!(Self::EVENTS_PROCESSED).increment(0);
        metrics::counter!(Self::EVENTS_FAILED).increment(0);
        metrics::counter!(Self::DUPLICATES_SKIPPED).increment(0);
        metrics::counter!(Self::ENTITIES_SAVED).increment(0);
        metrics::gauge!(Self::LAST_BLOCK).set(0.0);
    }
}
