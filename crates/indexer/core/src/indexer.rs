//! Bridge event handlers.

#[cfg(feature = "metrics")]
use crate::Metrics;
use crate::{BridgeEvent, EventSource, IndexerConfig, IndexerError};
use alloy_primitives::Address;
use bridge_indexer_storage::{ContractRegistry, EntityStore};
use bridge_indexer_types::{
    Entity, EntityKind, EventRecord, Gateway, GatewayDepositData, GatewayWithdrawalData,
    L1ToL2Message, L2ToL1Message, Token, TokenGatewayJoin, address_id, join_id, tx_hash_id,
};
use bridge_protocol::{
    BlockContext, DepositFinalized, EraClassifier, GatewaySet, L2ToL1MessageId, L2ToL1Transaction,
    L2ToL1Tx, ProtocolEra, StateRootClassifier, TicketCreated, TicketFields, TransactionContext,
    WithdrawalInitiated, allocate_message_id,
};
use std::{fmt::Debug, sync::Arc};
use tracing::{debug, error, info, trace, warn};

/// Counts of the outcomes of [`BridgeIndexer::process_all`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSummary {
    /// Events handled to completion.
    pub processed: usize,
    /// Logs that were not bridge events, or not emitted by the expected contract.
    pub ignored: usize,
    /// Events dropped after a handler error.
    pub failed: usize,
}

/// Turns bridge events into entities.
///
/// Events are processed one at a time, each to completion. A failing event is dropped without
/// affecting the events after it.
#[derive(Debug)]
pub struct BridgeIndexer<C = StateRootClassifier> {
    config: IndexerConfig,
    classifier: C,
    store: Arc<dyn EntityStore>,
    registry: Arc<dyn ContractRegistry>,
}

impl BridgeIndexer {
    /// Creates an indexer classifying eras as described by `config`.
    pub fn new(
        config: IndexerConfig,
        store: Arc<dyn EntityStore>,
        registry: Arc<dyn ContractRegistry>,
    ) -> Self {
        Self::with_classifier(config, config.classifier(), store, registry)
    }
}

impl<C> BridgeIndexer<C>
where
    C: EraClassifier + Debug,
{
    /// Creates an indexer with a custom era classifier.
    pub fn with_classifier(
        config: IndexerConfig,
        classifier: C,
        store: Arc<dyn EntityStore>,
        registry: Arc<dyn ContractRegistry>,
    ) -> Self {
        Self { config, classifier, store, registry }
    }

    /// Returns the indexer config.
    pub const fn config(&self) -> &IndexerConfig {
        &self.config
    }

    /// Prepares the indexer for its first event.
    ///
    /// The standard gateway never announces itself through `GatewaySet`, so it is watched from
    /// the start.
    pub fn bootstrap(&self) -> Result<(), IndexerError> {
        #[cfg(feature = "metrics")]
        Metrics::init();

        self.registry.register_watched_contract(self.config.l2_standard_gateway)?;
        info!(
            target: "indexer",
            standard_gateway = %self.config.l2_standard_gateway,
            router = %self.config.l2_gateway_router,
            nitro_genesis = ?self.config.nitro_genesis_block,
            "Bridge indexer ready"
        );
        Ok(())
    }

    /// Processes a single record.
    ///
    /// Returns `Ok(false)` if the log is not a bridge event or was not emitted by the contract
    /// expected to emit it.
    ///
    /// The emitter is checked before the log is decoded, so a malformed log from an unrelated
    /// contract is ignored rather than failing.
    pub fn process(&self, record: &EventRecord) -> Result<bool, IndexerError> {
        let emitter = record.log.address;
        let Some(source) = record.log.topics().first().and_then(EventSource::of_topic) else {
            trace!(target: "indexer", address = %emitter, "Ignoring unrecognized log");
            return Ok(false);
        };

        if !self.is_expected_emitter(source, &emitter)? {
            debug!(target: "indexer", ?source, %emitter, "Ignoring event from unexpected emitter");
            return Ok(false);
        }

        let Some(event) = BridgeEvent::decode(&record.log)? else {
            return Ok(false);
        };

        if let Err(err) = self.dispatch(&event, emitter, &record.block, &record.transaction) {
            bridge_macros::inc!(counter, Metrics::EVENTS_FAILED, "event" => event.name());
            return Err(err);
        }

        bridge_macros::inc!(counter, Metrics::EVENTS_PROCESSED, "event" => event.name());
        bridge_macros::set!(gauge, Metrics::LAST_BLOCK, record.block.number as f64);
        Ok(true)
    }

    /// Processes `records` in order, logging and skipping the ones that fail.
    pub fn process_all<'a>(
        &self,
        records: impl IntoIterator<Item = &'a EventRecord>,
    ) -> ProcessSummary {
        let mut summary = ProcessSummary::default();
        for record in records {
            match self.process(record) {
                Ok(true) => summary.processed += 1,
                Ok(false) => summary.ignored += 1,
                Err(err) => {
                    summary.failed += 1;
                    error!(
                        target: "indexer",
                        block = record.block.number,
                        tx = %record.transaction.hash,
                        %err,
                        "Dropping event"
                    );
                }
            }
        }
        summary
    }

    fn is_expected_emitter(
        &self,
        source: EventSource,
        emitter: &Address,
    ) -> Result<bool, IndexerError> {
        Ok(match source {
            EventSource::Router => *emitter == self.config.l2_gateway_router,
            EventSource::Gateway => self.registry.is_watched(emitter)?,
            EventSource::ArbSys => *emitter == self.config.arb_sys,
            EventSource::ArbRetryableTx => *emitter == self.config.arb_retryable_tx,
        })
    }

    fn dispatch(
        &self,
        event: &BridgeEvent,
        emitter: Address,
        block: &BlockContext,
        tx: &TransactionContext,
    ) -> Result<(), IndexerError> {
        match event {
            BridgeEvent::GatewaySet(event) => self.handle_gateway_set(event, block),
            BridgeEvent::WithdrawalInitiated(event) => {
                self.handle_withdrawal(emitter, event, block)
            }
            BridgeEvent::DepositFinalized(event) => self.handle_deposit(emitter, event, block, tx),
            BridgeEvent::TicketCreated(event) => self.handle_ticket_created(event, block, tx),
            BridgeEvent::L2ToL1Transaction(event) => self.handle_classic_l2_to_l1(event, block, tx),
            BridgeEvent::L2ToL1Tx(event) => self.handle_nitro_l2_to_l1(event, block, tx),
        }
    }

    /// Records the gateway assigned to a token by the router.
    ///
    /// A zero gateway removes the assignment on chain. Removals are not tracked.
    pub fn handle_gateway_set(
        &self,
        event: &GatewaySet,
        block: &BlockContext,
    ) -> Result<(), IndexerError> {
        if event.gateway.is_zero() {
            debug!(target: "indexer", l1_token = %event.l1Token, "Ignoring gateway removal");
            return Ok(());
        }
        self.create_token_gateway_pair(event.gateway, event.l1Token, block)?;
        Ok(())
    }

    /// Records a withdrawal initiated through `gateway`.
    ///
    /// The withdrawal is keyed by the gateway's `_l2ToL1Id`, the counter `ArbSys` assigned to the
    /// L2 to L1 message carrying it. The counter is untagged, so the message is looked up in the
    /// era of `block`. An id that already carries the classic tag is taken as packed.
    pub fn handle_withdrawal(
        &self,
        gateway: Address,
        event: &WithdrawalInitiated,
        block: &BlockContext,
    ) -> Result<(), IndexerError> {
        let token_gateway_join = self.ensure_token_gateway_pair(gateway, event.l1Token, block)?;
        let message = if event._l2ToL1Id.bit(63) {
            L2ToL1MessageId::from_packed(event._l2ToL1Id)
        } else {
            L2ToL1MessageId::new(self.classifier.classify(block), event._l2ToL1Id)
        };

        let withdrawal = GatewayWithdrawalData {
            id: format!("{:#x}", event._l2ToL1Id),
            from: event._from,
            to: event._to,
            amount: event._amount,
            exit_num: event._exitNum,
            token_gateway_join,
            l2_to_l1_message: message.to_string(),
        };
        debug!(
            target: "indexer",
            id = %withdrawal.id,
            era = %message.era(),
            counter = %message.counter(),
            "Recording withdrawal"
        );
        self.save(withdrawal)
    }

    /// Records a deposit finalized by `gateway`. Only the first deposit of a transaction is kept.
    pub fn handle_deposit(
        &self,
        gateway: Address,
        event: &DepositFinalized,
        block: &BlockContext,
        tx: &TransactionContext,
    ) -> Result<(), IndexerError> {
        let token_gateway_join = self.ensure_token_gateway_pair(gateway, event.l1Token, block)?;

        let id = tx_hash_id(&tx.hash);
        if self.store.load(EntityKind::GatewayDepositData, &id)?.is_some() {
            warn!(target: "indexer", %id, "Deposit finalized twice in one transaction, skipping");
            bridge_macros::inc!(
                counter,
                Metrics::DUPLICATES_SKIPPED,
                "kind" => "GatewayDepositData"
            );
            return Ok(());
        }

        self.save(GatewayDepositData {
            id,
            from: event._from,
            to: event._to,
            amount: event._amount,
            l2_block_num: block.number,
            l2_tx_hash: tx.hash,
            token_gateway_join,
        })
    }

    /// Records the retryable ticket created by `tx`. Only the first ticket of a transaction is
    /// kept.
    ///
    /// The ticket fields are parsed from the call data of the creating transaction, using the
    /// layout of the era `block` belongs to. Nothing is saved if parsing fails.
    pub fn handle_ticket_created(
        &self,
        event: &TicketCreated,
        block: &BlockContext,
        tx: &TransactionContext,
    ) -> Result<(), IndexerError> {
        let id = tx_hash_id(&tx.hash);
        if self.store.load(EntityKind::L1ToL2Message, &id)?.is_some() {
            warn!(target: "indexer", %id, "Duplicate retryable ticket, skipping");
            bridge_macros::inc!(counter, Metrics::DUPLICATES_SKIPPED, "kind" => "L1ToL2Message");
            return Ok(());
        }

        let era = self.classifier.classify(block);
        let fields = TicketFields::parse(&tx.input, tx.value, era)?;
        debug!(
            target: "indexer",
            ticket_id = %event.ticketId,
            %era,
            calldata_len = fields.l2_calldata.len(),
            "Recording retryable ticket"
        );

        self.save(L1ToL2Message {
            id,
            is_classic: fields.is_classic_era,
            l1_from_aliased: tx.from,
            deposit: fields.deposit_amount,
            l2_callvalue: fields.l2_call_value,
            l2_calldata: fields.l2_calldata,
            l2_to: fields.l2_destination,
            l2_block_num: block.number,
            l2_tx_hash: tx.hash,
        })
    }

    /// Records a classic L2 to L1 message.
    pub fn handle_classic_l2_to_l1(
        &self,
        event: &L2ToL1Transaction,
        block: &BlockContext,
        tx: &TransactionContext,
    ) -> Result<(), IndexerError> {
        self.save(L2ToL1Message {
            id: allocate_message_id(ProtocolEra::Classic, event.uniqueId),
            from: event.caller,
            to: event.destination,
            unique_id: event.uniqueId,
            batch_number: Some(event.batchNumber),
            index_in_batch: Some(event.indexInBatch),
            l2_block_num: block.number,
            l2_tx_hash: tx.hash,
            l1_block_num: event.ethBlockNum,
            l2_timestamp: event.timestamp,
            l1_callvalue: event.callvalue,
            l1_calldata: event.data.clone(),
            is_classic: true,
        })
    }

    /// Records a nitro L2 to L1 message. Nitro messages are numbered by their position in the
    /// outbox merkle tree and carry no batch.
    pub fn handle_nitro_l2_to_l1(
        &self,
        event: &L2ToL1Tx,
        block: &BlockContext,
        tx: &TransactionContext,
    ) -> Result<(), IndexerError> {
        self.save(L2ToL1Message {
            id: allocate_message_id(ProtocolEra::Nitro, event.position),
            from: event.caller,
            to: event.destination,
            unique_id: event.position,
            batch_number: None,
            index_in_batch: None,
            l2_block_num: block.number,
            l2_tx_hash: tx.hash,
            l1_block_num: event.ethBlockNum,
            l2_timestamp: event.timestamp,
            l1_callvalue: event.callvalue,
            l1_calldata: event.data.clone(),
            is_classic: false,
        })
    }

    /// Records that `token` is bridged through `gateway`, returning the join id.
    ///
    /// A non-standard gateway seen for the first time is recorded and watched from then on.
    pub fn create_token_gateway_pair(
        &self,
        gateway: Address,
        token: Address,
        block: &BlockContext,
    ) -> Result<String, IndexerError> {
        let gateway_id = address_id(&gateway);
        let token_id = address_id(&token);
        let id = join_id(&gateway_id, &token_id);

        if !self.config.is_standard_gateway(&gateway) &&
            self.store.load(EntityKind::Gateway, &gateway_id)?.is_none()
        {
            self.save(Gateway { id: gateway_id.clone() })?;
            self.registry.register_watched_contract(gateway)?;
            info!(target: "indexer", %gateway, "Tracking new gateway");
        }

        if self.store.load(EntityKind::Token, &token_id)?.is_none() {
            self.save(Token { id: token_id.clone() })?;
        }

        self.save(TokenGatewayJoin {
            id: id.clone(),
            gateway: gateway_id,
            token: token_id,
            l2_block_num: block.number,
        })?;
        Ok(id)
    }

    /// Returns the join id of the pair, creating the pair if it was never seen.
    ///
    /// Tokens bridged through the standard gateway are first seen on their first transfer.
    fn ensure_token_gateway_pair(
        &self,
        gateway: Address,
        token: Address,
        block: &BlockContext,
    ) -> Result<String, IndexerError> {
        let id = join_id(&address_id(&gateway), &address_id(&token));
        if self.store.load(EntityKind::TokenGatewayJoin, &id)?.is_some() {
            return Ok(id);
        }
        debug!(target: "indexer", %gateway, %token, "First transfer through an unseen pair");
        self.create_token_gateway_pair(gateway, token, block)
    }

    fn save(&self, entity: impl Into<Entity>) -> Result<(), IndexerError> {
        let entity = entity.into();
        let key = entity.key();
        self.store.save(entity)?;
        trace!(target: "indexer", %key, "Saved entity");
        bridge_macros::inc!(counter, Metrics::ENTITIES_SAVED, "kind" => key.kind.to_string());
        Ok(())
    }
}
