//! Consumer-facing connection over a running telemetry session.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::{mpsc, watch};
use tokio_stream::wrappers::{ReceiverStream, WatchStream};
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::debug;

use crate::driver::{Driver, DriverChannels, StreamEvent};
use crate::provider::ChunkSource;
use crate::scanner::ScannerConfig;
use crate::types::LinkHealth;

/// Handle to one running telemetry stream session.
///
/// The core has no opinion about how events are consumed: pull them one at
/// a time with [`next_event`](Self::next_event), or take the whole session
/// as a [`Stream`] with [`into_stream`](Self::into_stream) and plug it into
/// a channel, queue, or callback of the host's choosing.
///
/// Dropping the connection (or the stream taken from it) cancels the feed
/// task.
#[derive(Debug)]
pub struct StreamConnection {
    events: mpsc::Receiver<StreamEvent>,
    health: watch::Receiver<LinkHealth>,
    cancel: CancellationToken,
    cancel_guard: DropGuard,
}

impl StreamConnection {
    /// Spawn a session over the given chunk source.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn<S>(source: S, config: ScannerConfig) -> Self
    where
        S: ChunkSource,
    {
        let DriverChannels { events, health, cancel } = Driver::spawn(source, config);
        let cancel_guard = cancel.clone().drop_guard();
        Self { events, health, cancel, cancel_guard }
    }

    /// Receive the next decode event, or `None` once the stream has ended.
    pub async fn next_event(&mut self) -> Option<StreamEvent> {
        self.events.recv().await
    }

    /// Current link health.
    pub fn health(&self) -> LinkHealth {
        self.health.borrow().clone()
    }

    /// Link health as a stream of updates.
    pub fn health_updates(&self) -> impl Stream<Item = LinkHealth> + 'static {
        WatchStream::new(self.health.clone())
    }

    /// Stop the session's feed task. Idempotent; in-flight events remain
    /// readable until the channel drains.
    pub fn close(&self) {
        debug!("Closing stream connection");
        self.cancel.cancel();
    }

    /// Consume the connection into a decode-event stream.
    ///
    /// The stream carries the session's cancellation guard: dropping it
    /// cancels the feed task, the same as dropping the connection.
    pub fn into_stream(self) -> impl Stream<Item = StreamEvent> + 'static {
        EventStream {
            inner: ReceiverStream::new(self.events),
            _cancel_guard: self.cancel_guard,
        }
    }
}

/// Decode-event stream keeping the session's cancel-on-drop guard alive.
struct EventStream {
    inner: ReceiverStream<StreamEvent>,
    _cancel_guard: DropGuard,
}

impl Stream for EventStream {
    type Item = StreamEvent;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }
}
