//! Clipboard seam and copy acknowledgment.
//!
//! The actual clipboard write belongs to the embedding frontend and is
//! reached through [`ClipboardSink`]. Write failures (permission denial,
//! clipboard locked by another app) follow a log-and-continue policy:
//! they go to the diagnostic channel, never to a distinct UI state.

use std::time::{Duration, Instant};

/// How long a successful copy reads as acknowledged before the
/// "copied" indicator clears.
pub const COPY_ACK_DURATION: Duration = Duration::from_millis(1500);

/// Destination for clipboard writes, supplied by the embedding shell.
pub trait ClipboardSink {
    /// Write `text` to the system clipboard.
    ///
    /// # Errors
    ///
    /// Returns an error string if the write is rejected. Callers log the
    /// error and continue.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Transient "copied" acknowledgment recorded after a successful write.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CopyAcknowledgment {
    acknowledged_at: Instant,
}

impl CopyAcknowledgment {
    pub(crate) fn now() -> Self {
        Self {
            acknowledged_at: Instant::now(),
        }
    }

    /// Whether the acknowledgment is still showing.
    pub(crate) fn is_active(&self) -> bool {
        self.acknowledged_at.elapsed() < COPY_ACK_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_acknowledgment_is_active() {
        assert!(CopyAcknowledgment::now().is_active());
    }
}
