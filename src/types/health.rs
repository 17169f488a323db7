//! Link health reported by the driver task.

use serde::{Deserialize, Serialize};

/// Health of one telemetry stream session.
///
/// `Resyncing` is expected transient noise (the scanner is sliding over
/// corrupted bytes and will re-lock within one frame length); `Lost` means
/// the byte source itself failed and the session is over; reconnecting is
/// the embedding host's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkHealth {
    /// No frame decoded yet.
    Acquiring,
    /// Last window decoded cleanly.
    Synced,
    /// Last window was rejected; the scanner is sliding to re-lock.
    Resyncing,
    /// The transport failed. Fatal to this session.
    Lost { reason: String },
}

impl LinkHealth {
    /// Whether the stream can still produce frames.
    pub fn is_live(&self) -> bool {
        !matches!(self, LinkHealth::Lost { .. })
    }
}
