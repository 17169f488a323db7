//! Error types for telemetry stream processing.
//!
//! Two layers, matching how failures propagate:
//!
//! - [`crate::wire::DecodeError`]: a candidate window failed framing
//!   checks. Recoverable and stream-local: the scanner slides one byte and
//!   keeps going, and the event is surfaced so consumers can watch resync
//!   activity.
//! - [`TelemetryError`]: everything session-fatal or environmental (a
//!   failed byte source, an unreadable capture file, a closed channel).
//!   Transport failures terminate the feed loop and are surfaced,
//!   never swallowed; whether to reconnect is the embedding host's call.

use std::path::PathBuf;
use thiserror::Error;

use crate::wire::DecodeError;

/// Result type alias for telemetry operations.
pub type Result<T, E = TelemetryError> = std::result::Result<T, E>;

/// Main error type for telemetry stream sessions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TelemetryError {
    #[error("transport failure: {reason}")]
    Transport {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("capture file error: {path}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("event channel closed before the stream ended")]
    ChannelClosed,
}

impl TelemetryError {
    /// Whether a new session attempt could plausibly succeed.
    ///
    /// Decode errors never appear here in practice (the scanner recovers
    /// from them internally), but classify them as retryable for callers
    /// that route every event through one handler.
    pub fn is_retryable(&self) -> bool {
        match self {
            TelemetryError::Transport { .. } => true,
            TelemetryError::Decode(_) => true,
            TelemetryError::File { .. } => false,
            TelemetryError::ChannelClosed => false,
        }
    }

    /// Helper constructor for transport failures.
    pub fn transport(reason: impl Into<String>) -> Self {
        TelemetryError::Transport { reason: reason.into(), source: None }
    }

    /// Helper constructor for transport failures with a source error.
    pub fn transport_with_source(
        reason: impl Into<String>,
        source: Box<dyn std::error::Error + Send + Sync>,
    ) -> Self {
        TelemetryError::Transport { reason: reason.into(), source: Some(source) }
    }

    /// Helper constructor for capture file errors with path context.
    pub fn file_error(path: PathBuf, source: std::io::Error) -> Self {
        TelemetryError::File { path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::FramingFault;

    #[test]
    fn error_traits_validation() {
        fn assert_send_sync_static<T: Send + Sync + 'static>() {}
        assert_send_sync_static::<TelemetryError>();

        let error = TelemetryError::transport("port unplugged");
        let _: &dyn std::error::Error = &error;
    }

    #[test]
    fn retry_classification() {
        assert!(TelemetryError::transport("test").is_retryable());
        assert!(!TelemetryError::ChannelClosed.is_retryable());
        assert!(
            !TelemetryError::file_error(
                PathBuf::from("/capture.bin"),
                std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
            )
            .is_retryable()
        );
    }

    #[test]
    fn decode_errors_convert_transparently() {
        let decode = DecodeError::InvalidFraming(FramingFault::Trailer);
        let wrapped: TelemetryError = decode.clone().into();
        assert_eq!(wrapped.to_string(), decode.to_string());
        assert!(matches!(wrapped, TelemetryError::Decode(_)));
    }

    #[test]
    fn messages_carry_context() {
        let error = TelemetryError::transport("device disconnected");
        assert!(error.to_string().contains("device disconnected"));

        let error = TelemetryError::file_error(
            PathBuf::from("/tmp/session.raw"),
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(error.to_string().contains("/tmp/session.raw"));
    }
}
