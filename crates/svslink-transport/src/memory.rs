use bytes::Bytes;

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Transport that keeps every frame it is given.
#[derive(Debug, Default)]
pub struct MemoryTransport {
    sent: Vec<Bytes>,
    closed: bool,
}

impl MemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames written so far, oldest first.
    pub fn sent(&self) -> &[Bytes] {
        &self.sent
    }

    /// Take the recorded frames, leaving the log empty.
    pub fn take(&mut self) -> Vec<Bytes> {
        std::mem::take(&mut self.sent)
    }

    /// Refuse further writes.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Transport for MemoryTransport {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        if self.closed {
            return Err(TransportError::Closed);
        }
        self.sent.push(Bytes::copy_from_slice(frame));
        Ok(())
    }
}
