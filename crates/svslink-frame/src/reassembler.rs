use bytes::BytesMut;

use crate::codec::{Hex, PREAMBLE};
use crate::decoder::{Decoded, Decoder};

const INITIAL_BUFFER_CAPACITY: usize = 256;

/// Rebuilds frames from notification chunks.
///
/// A chunk whose first byte is the preamble starts a new candidate frame and
/// replaces whatever was buffered; any other chunk is appended. After every
/// chunk the whole candidate is run through the [`Decoder`].
///
/// The transport must deliver the chunks of one frame in order, without
/// interleaving chunks from another frame, and must start every frame with
/// a fresh chunk.
#[derive(Debug)]
pub struct Reassembler {
    buf: BytesMut,
    in_sync: bool,
    decoder: Decoder,
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reassembler {
    /// Create a reassembler using the standard register map.
    pub fn new() -> Self {
        Self::with_decoder(Decoder::default())
    }

    /// Create a reassembler with an explicit decoder.
    pub fn with_decoder(decoder: Decoder) -> Self {
        Self {
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            in_sync: true,
            decoder,
        }
    }

    /// Feed one chunk and decode the resulting candidate buffer.
    pub fn push(&mut self, chunk: &[u8]) -> Decoded {
        if chunk.first() == Some(&PREAMBLE) {
            if !self.in_sync {
                tracing::warn!(stale = %Hex(&self.buf), "frame fragment out of sync");
            }
            self.buf.clear();
        }
        self.buf.extend_from_slice(chunk);

        let decoded = self.decoder.decode(&self.buf);
        self.in_sync = decoded.recognized;
        decoded
    }

    /// Whether the last candidate buffer was a well-formed frame.
    pub fn is_in_sync(&self) -> bool {
        self.in_sync
    }

    /// Current candidate buffer.
    pub fn buffered(&self) -> &[u8] {
        &self.buf
    }

    /// Drop any buffered bytes and return to the initial state.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.in_sync = true;
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use svslink_registry::AttributeValue;

    use super::*;
    use crate::encoder::{Encoder, Request};
    use crate::frame_type::FrameType;

    fn frame(request: Request) -> Bytes {
        Encoder::default().build(&request).unwrap()
    }

    #[test]
    fn starts_in_sync() {
        let reassembler = Reassembler::new();
        assert!(reassembler.is_in_sync());
        assert!(reassembler.buffered().is_empty());
    }

    #[test]
    fn single_chunk_frame() {
        let mut reassembler = Reassembler::new();
        let decoded = reassembler.push(&frame(Request::write("VOLUME", -30)));
        assert!(decoded.recognized);
        assert!(reassembler.is_in_sync());
        assert_eq!(decoded.values["VOLUME"], AttributeValue::Integer(-30));
    }

    #[test]
    fn split_frame_matches_unsplit() {
        let full = frame(Request::write("PRESET1NAME", "Cinema"));
        let unsplit = Reassembler::new().push(&full);

        let mut reassembler = Reassembler::new();
        let first = reassembler.push(&full[..10]);
        assert!(!first.recognized);
        assert!(!reassembler.is_in_sync());

        let second = reassembler.push(&full[10..]);
        assert!(second.recognized);
        assert!(reassembler.is_in_sync());
        assert_eq!(second, unsplit);
    }

    #[test]
    fn many_small_chunks() {
        let full = frame(Request::write("PHASE", 120));
        let mut reassembler = Reassembler::new();
        let mut last = Decoded::default();
        for chunk in full.chunks(3) {
            last = reassembler.push(chunk);
        }
        assert!(last.recognized);
        assert_eq!(last.values["PHASE"], AttributeValue::Integer(120));
    }

    #[test]
    fn new_frame_start_discards_stale_candidate() {
        let stale = frame(Request::write("VOLUME", -10));
        let fresh = frame(Request::write("PHASE", 60));

        let mut reassembler = Reassembler::new();
        assert!(!reassembler.push(&stale[..8]).recognized);

        assert!(!reassembler.push(&fresh[..8]).recognized);
        assert_eq!(reassembler.buffered(), &fresh[..8]);

        let decoded = reassembler.push(&fresh[8..]);
        assert!(decoded.recognized);
        assert_eq!(decoded.values.len(), 1);
        assert_eq!(decoded.values["PHASE"], AttributeValue::Integer(60));
    }

    #[test]
    fn buffer_is_kept_after_recognized_frame() {
        let full = frame(Request::Info(crate::frame_type::InfoKind::First));
        let mut reassembler = Reassembler::new();
        let decoded = reassembler.push(&full);
        assert_eq!(decoded.frame_type, Some(FrameType::SubInfo1));
        assert_eq!(reassembler.buffered(), &full[..]);

        // A stray continuation corrupts the candidate until the next frame start.
        assert!(!reassembler.push(&[0x01]).recognized);
        assert!(reassembler.push(&full).recognized);
    }

    #[test]
    fn empty_chunk_is_a_continuation() {
        let full = frame(Request::reset("VOLUME"));
        let mut reassembler = Reassembler::new();
        reassembler.push(&full[..4]);
        assert!(!reassembler.push(&[]).recognized);
        assert!(reassembler.push(&full[4..]).recognized);
    }

    #[test]
    fn continuation_without_start_is_not_recognized() {
        let mut reassembler = Reassembler::new();
        let decoded = reassembler.push(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]);
        assert!(!decoded.recognized);
        assert!(!reassembler.is_in_sync());
    }

    #[test]
    fn reset_clears_state() {
        let mut reassembler = Reassembler::new();
        reassembler.push(&[PREAMBLE, 0x01]);
        reassembler.reset();
        assert!(reassembler.is_in_sync());
        assert!(reassembler.buffered().is_empty());
    }
}
