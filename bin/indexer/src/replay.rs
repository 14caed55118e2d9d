//! Replays a recorded event stream through the indexer.

use anyhow::Context;
use bridge_indexer_core::{BridgeIndexer, IndexerConfig, ProcessSummary};
use bridge_indexer_storage::InMemoryStore;
use bridge_indexer_types::EventRecord;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    sync::Arc,
};
use tracing::{debug, info};

/// Loads the indexer config from a JSON file.
pub(crate) fn load_config(path: &Path) -> anyhow::Result<IndexerConfig> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open indexer config {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse indexer config {}", path.display()))
}

/// Reads event records from JSON lines. Blank lines are skipped.
pub(crate) fn read_events<R: BufRead>(reader: R) -> anyhow::Result<Vec<EventRecord>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read event line {}", index + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("Malformed event record on line {}", index + 1))?;
        records.push(record);
    }
    Ok(records)
}

/// Replays the events at `events` with the config at `config`, then writes the store contents
/// to `output`, or to stdout when no output is given.
pub(crate) fn run(
    config: &Path,
    events: &Path,
    output: Option<&Path>,
) -> anyhow::Result<ProcessSummary> {
    let config = load_config(config)?;
    debug!(target: "bridge_indexer", ?config, "Loaded indexer config");

    let file = File::open(events)
        .with_context(|| format!("Failed to open event file {}", events.display()))?;
    let records = read_events(BufReader::new(file))?;
    info!(target: "bridge_indexer", count = records.len(), "Replaying events");

    let store = Arc::new(InMemoryStore::new());
    let indexer = BridgeIndexer::new(config, store.clone(), store.clone());
    indexer.bootstrap()?;
    let summary = indexer.process_all(&records);

    match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            store.write_json(&mut writer)?;
            writer.flush()?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            store.write_json(&mut stdout)?;
            writeln!(stdout)?;
        }
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{Address, B256, Bytes, Log, U256, address};
    use alloy_sol_types::{SolCall, SolEvent};
    use bridge_indexer_storage::StoreDump;
    use bridge_indexer_types::{Entity, EntityKind};
    use bridge_protocol::{
        BlockContext, L2ToL1Tx, Precompiles, TicketCreated, TransactionContext,
        createRetryableTicketCall,
    };
    use rstest::rstest;
    use std::io::Cursor;
    use tempfile::TempDir;

    const STANDARD_GATEWAY: Address = address!("0x09e9222e96e7b4ae2a407b98d48e330053351eee");
    const ROUTER: Address = address!("0x5288c571fd7ad117bea99bf60fe0846c4e84f933");

    fn nitro_message_record() -> EventRecord {
        let data = L2ToL1Tx {
            caller: Address::repeat_byte(0x01),
            destination: Address::repeat_byte(0x02),
            hash: U256::from(1),
            position: U256::from(42),
            arbBlockNum: U256::from(10),
            ethBlockNum: U256::from(20),
            timestamp: U256::from(30),
            callvalue: U256::ZERO,
            data: Bytes::new(),
        }
        .encode_log_data();
        EventRecord {
            block: BlockContext {
                number: 10,
                state_root: B256::repeat_byte(0x01),
                ..Default::default()
            },
            transaction: TransactionContext { hash: B256::repeat_byte(0x0a), ..Default::default() },
            log: Log { address: Precompiles::ARB_SYS, data },
        }
    }

    fn malformed_ticket_record() -> EventRecord {
        let input = createRetryableTicketCall::SELECTOR.to_vec();
        EventRecord {
            block: BlockContext { number: 11, ..Default::default() },
            transaction: TransactionContext {
                hash: B256::repeat_byte(0x0b),
                input: input.into(),
                ..Default::default()
            },
            log: Log {
                address: Precompiles::ARB_RETRYABLE_TX,
                data: TicketCreated { ticketId: B256::ZERO }.encode_log_data(),
            },
        }
    }

    fn write_config(dir: &TempDir) -> std::path::PathBuf {
        let path = dir.path().join("indexer.json");
        let config = IndexerConfig::new(STANDARD_GATEWAY, ROUTER);
        std::fs::write(&path, serde_json::to_string(&config).unwrap()).unwrap();
        path
    }

    #[rstest]
    #[case::empty("", 0)]
    #[case::single("{record}", 1)]
    #[case::blank_lines("{record}\n\n{record}\n", 2)]
    #[case::whitespace_only("  \n{record}\n\t\n", 1)]
    fn test_read_events_skips_blank_lines(#[case] template: &str, #[case] count: usize) {
        let line = serde_json::to_string(&nitro_message_record()).unwrap();
        let input = template.replace("{record}", &line);

        let records = read_events(Cursor::new(input)).unwrap();
        assert_eq!(records, vec![nitro_message_record(); count]);
    }

    #[rstest]
    #[case::first_line("not json\n{record}\n", "line 1")]
    #[case::missing_fields("{record}\n{\"block\": 1}\n", "line 2")]
    #[case::after_blank_line("{record}\n\n{record", "line 3")]
    fn test_read_events_reports_line(#[case] template: &str, #[case] expected: &str) {
        let line = serde_json::to_string(&nitro_message_record()).unwrap();
        let input = template.replace("{record}", &line);

        let err = read_events(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().contains(expected), "{err}");
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_config(&dir.path().join("missing.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to open indexer config"));
    }

    #[test]
    fn test_replay_writes_entities() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        let events = dir.path().join("events.jsonl");
        let output = dir.path().join("entities.json");

        let lines = [nitro_message_record(), malformed_ticket_record()]
            .iter()
            .map(|record| serde_json::to_string(record).unwrap())
            .collect::<Vec<_>>()
            .join("\n");
        std::fs::write(&events, lines).unwrap();

        let summary = run(&config, &events, Some(&output)).unwrap();
        assert_eq!(summary, ProcessSummary { processed: 1, ignored: 0, failed: 1 });

        let dump: StoreDump = serde_json::from_reader(File::open(&output).unwrap()).unwrap();
        assert_eq!(dump.entities.len(), 1);
        assert_eq!(dump.entities[0].kind(), EntityKind::L2ToL1Message);
        assert_eq!(dump.entities[0].id(), "0x2a");
        assert!(matches!(&dump.entities[0], Entity::L2ToL1Message(m) if !m.is_classic));
        assert_eq!(dump.watched_contracts, vec![STANDARD_GATEWAY]);
    }
}
