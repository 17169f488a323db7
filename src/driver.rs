//! Driver spawns and manages the feed-loop task.

use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use crate::TelemetryError;
use crate::provider::ChunkSource;
use crate::scanner::{FrameScanner, ScannerConfig};
use crate::types::{LinkHealth, TelemetryRecord};

/// Capacity of the decode-event channel. Events are a health signal the
/// consumer must not miss, so they flow through a bounded mpsc (with
/// back-pressure) rather than a latest-wins watch.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// One decode event: a record, a recoverable framing error, or (as the
/// terminal event of a session) a transport failure.
pub type StreamEvent = Result<TelemetryRecord, TelemetryError>;

/// Result of spawning the driver task.
pub struct DriverChannels {
    /// Receiver for decode events.
    pub events: mpsc::Receiver<StreamEvent>,
    /// Receiver for link health updates.
    pub health: watch::Receiver<LinkHealth>,
    /// Cancellation token for graceful shutdown.
    pub cancel: CancellationToken,
}

/// Driver spawns and manages the feed-loop task.
///
/// The spawned task owns both the chunk source and the scanner: it pulls
/// chunks, feeds the scanner, forwards every decode event, and folds the
/// event stream into a [`LinkHealth`] watch channel. The scanner is
/// single-owner state and this task is its only call site.
pub struct Driver;

impl Driver {
    /// Spawn the feed loop for the given source.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<S>(source: S, config: ScannerConfig) -> DriverChannels
    where
        S: ChunkSource,
    {
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        let (health_tx, health_rx) = watch::channel(LinkHealth::Acquiring);
        let cancel = CancellationToken::new();

        let cancel_feed = cancel.clone();
        tokio::spawn(async move {
            Self::feed_task(source, config, event_tx, health_tx, cancel_feed).await;
        });

        DriverChannels { events: event_rx, health: health_rx, cancel }
    }

    /// Feed loop: chunks in, decode events and health out.
    async fn feed_task<S>(
        mut source: S,
        config: ScannerConfig,
        event_tx: mpsc::Sender<StreamEvent>,
        health_tx: watch::Sender<LinkHealth>,
        cancel: CancellationToken,
    ) where
        S: ChunkSource,
    {
        info!("Feed task started ({}Hz source)", source.cadence_hz());
        let mut scanner = FrameScanner::with_config(config);

        loop {
            // Allow cancellation while waiting on the transport.
            let chunk = tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Feed task cancelled");
                    break;
                }
                chunk = source.next_chunk() => chunk,
            };

            match chunk {
                Ok(Some(chunk)) => {
                    trace!("Chunk received: {} bytes", chunk.len());
                    for event in scanner.feed(&chunk) {
                        let health = match &event {
                            Ok(_) => LinkHealth::Synced,
                            Err(_) => LinkHealth::Resyncing,
                        };
                        health_tx.send_replace(health);

                        if event_tx.send(event.map_err(Into::into)).await.is_err() {
                            debug!("Event consumer dropped; feed task exiting");
                            return;
                        }
                    }
                }
                Ok(None) => {
                    info!(
                        "End of stream: {} frames decoded, {} bytes discarded",
                        scanner.frames_decoded(),
                        scanner.bytes_discarded()
                    );
                    break;
                }
                Err(error) => {
                    // Transport failures are fatal to the session: surface
                    // the error as the terminal event, mark the link lost,
                    // and stop. Reconnecting is the host's decision.
                    warn!("Transport failure: {error}");
                    health_tx.send_replace(LinkHealth::Lost { reason: error.to_string() });
                    let _ = event_tx.send(Err(error)).await;
                    return;
                }
            }
        }

        if scanner.buffered() > 0 {
            debug!("Dropping {} unframed trailing bytes", scanner.buffered());
        }
    }
}
