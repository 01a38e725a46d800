//! Input stream ingestion.
//!
//! Reads `go test -json` lines, decodes each into a [`TestEvent`] and folds
//! it into the shared [`TestStore`]. Runs as its own task; the render loop
//! only hears about end of stream and rejected lines.

use std::sync::Arc;

use sift_core::prelude::*;
use sift_core::TestEvent;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::config::InputMode;
use crate::message::Message;
use crate::store::TestStore;

/// Line counts of a finished ingestion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub lines: usize,
    pub events: usize,
    pub rejected: usize,
}

/// Read `reader` to EOF into `store`.
///
/// Blank lines are skipped. A line that is not a test event is reported on
/// `tx` and skipped in lenient mode, and ends ingestion with
/// [`Error::InvalidInput`] in strict mode. The store's run is marked
/// finished either way.
pub async fn ingest<R>(
    reader: R,
    store: &TestStore,
    mode: InputMode,
    tx: &mpsc::Sender<Message>,
) -> Result<IngestReport>
where
    R: AsyncRead + Unpin,
{
    let result = read_events(reader, store, mode, tx).await;
    store.mark_finished();
    result
}

async fn read_events<R>(
    reader: R,
    store: &TestStore,
    mode: InputMode,
    tx: &mpsc::Sender<Message>,
) -> Result<IngestReport>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut report = IngestReport::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        report.lines += 1;

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() {
            continue;
        }

        match TestEvent::parse(line) {
            Ok(event) => {
                trace!("event: {:?} {:?}", event.action, event.test);
                store.add_event(&event);
                report.events += 1;
            }
            Err(e) if mode == InputMode::Strict => {
                return Err(Error::invalid_input(report.lines, e.to_string()));
            }
            Err(e) => {
                report.rejected += 1;
                warn!("Skipping line {}: {}", report.lines, e);
                let msg = Message::InputRejected {
                    line: report.lines,
                    error: e.to_string(),
                };
                if tx.send(msg).await.is_err() {
                    debug!("message channel closed, stopping ingestion");
                    break;
                }
            }
        }
    }

    debug!(
        "ingestion finished: {} lines, {} events, {} rejected",
        report.lines, report.events, report.rejected
    );
    Ok(report)
}

/// Spawn [`ingest`] as a task that reports completion on `tx`
pub fn spawn_ingest<R>(
    reader: R,
    store: Arc<TestStore>,
    mode: InputMode,
    tx: mpsc::Sender<Message>,
) -> JoinHandle<Result<IngestReport>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let result = ingest(reader, &store, mode, &tx).await;
        let msg = match &result {
            Ok(_) => Message::IngestFinished,
            Err(e) => {
                error!("Ingestion failed: {}", e);
                Message::IngestFailed {
                    error: e.to_string(),
                }
            }
        };
        // The receiver is gone once the UI quit first
        let _ = tx.send(msg).await;
        result
    })
}
