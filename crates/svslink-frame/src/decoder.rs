use svslink_registry::{transcoder, Descriptor, Registry, ValueSet, STANDARD};

use crate::codec::{check, CHECKSUM_SIZE};
use crate::frame_type::FrameType;

/// Size of the memory window header: bank (4) + start (2) + size (2).
pub const WINDOW_SIZE: usize = 8;

/// Step between scanned offsets in a memory window.
const WINDOW_STEP: usize = 2;

/// Result of decoding one candidate buffer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// The buffer is a well-formed frame (length and checksum match).
    pub recognized: bool,
    /// Resolved type of a recognized frame.
    pub frame_type: Option<FrameType>,
    /// Validated attribute values carried by the frame.
    pub values: ValueSet,
}

/// Memory region addressed by a read, write or read-response frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryWindow {
    pub group_id: u32,
    pub start: u16,
    pub size: u16,
}

impl MemoryWindow {
    /// Parse the window header at `position`, if the buffer is long enough.
    pub fn parse(buf: &[u8], position: usize) -> Option<Self> {
        let header = buf.get(position..position + WINDOW_SIZE)?;
        Some(Self {
            group_id: u32::from_le_bytes([header[0], header[1], header[2], header[3]]),
            start: u16::from_le_bytes([header[4], header[5]]),
            size: u16::from_le_bytes([header[6], header[7]]),
        })
    }
}

/// Validates candidate buffers and extracts the attributes they carry.
#[derive(Debug, Clone, Copy)]
pub struct Decoder {
    registry: &'static Registry,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(&STANDARD)
    }
}

impl Decoder {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    /// Decode a candidate buffer.
    ///
    /// Malformed buffers come back unrecognized with no values. Readings
    /// that fail domain validation or text decoding are left out of the
    /// value set; the rest of the frame is still used.
    pub fn decode(&self, buf: &[u8]) -> Decoded {
        let header = match check(buf) {
            Ok(header) => header,
            Err(integrity) => {
                tracing::trace!(%integrity, len = buf.len(), "candidate frame not recognized");
                return Decoded::default();
            }
        };

        let mut decoded = Decoded {
            recognized: true,
            frame_type: header.frame_type,
            values: ValueSet::new(),
        };

        let Some(frame_type) = header.frame_type else {
            return decoded;
        };
        let Some(position) = frame_type.window_offset() else {
            return decoded;
        };

        let body = &buf[..buf.len() - CHECKSUM_SIZE];
        let Some(window) = MemoryWindow::parse(body, position) else {
            return decoded;
        };

        if !frame_type.carries_values() {
            return decoded;
        }

        let mut cursor = position + WINDOW_SIZE;
        for descriptor in self.covered(&window) {
            let width = usize::from(descriptor.width());
            let data = body
                .get(cursor..)
                .map(|rest| &rest[..width.min(rest.len())])
                .unwrap_or_default();
            match transcoder::decode(descriptor, data) {
                Ok(Some(value)) => {
                    decoded.values.insert(descriptor.name(), value);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::debug!(error = %err, "dropping undecodable attribute");
                }
            }
            cursor += width;
        }

        decoded
    }

    /// Leaf descriptors that start inside `window`, in address order.
    ///
    /// The window is scanned in 2-byte steps; a step that lands inside a
    /// descriptor without matching its start belongs to an earlier match.
    pub fn covered(&self, window: &MemoryWindow) -> Vec<&'static Descriptor> {
        (0..usize::from(window.size))
            .step_by(WINDOW_STEP)
            .filter_map(|step| {
                let offset = u32::from(window.start) + step as u32;
                self.registry
                    .resolve(window.group_id, offset)
                    .filter(|descriptor| u32::from(descriptor.offset()) == offset)
            })
            .collect()
    }
}
