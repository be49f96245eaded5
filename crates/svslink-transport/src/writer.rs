use std::io::{ErrorKind, Write};

use crate::error::{Result, TransportError};
use crate::traits::Transport;

/// Writes each frame to any `Write` sink and flushes it.
///
/// Useful for piping frames into a serial bridge, a file or a socket
/// that stands in for the characteristic.
#[derive(Debug)]
pub struct WriteTransport<W> {
    inner: W,
}

impl<W: Write> WriteTransport<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the transport and return the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }

    fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }
}

impl<W: Write> Transport for WriteTransport<W> {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < frame.len() {
            match self.inner.write(&frame[offset..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
        tracing::trace!(len = frame.len(), "frame written");
        self.flush()
    }
}
