use svslink_registry::RegistryError;

/// Reasons a candidate buffer is not a well-formed frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Integrity {
    /// Fewer bytes than the fixed header.
    #[error("frame too short ({len} bytes)")]
    TooShort { len: usize },

    /// The first byte is not the preamble marker.
    #[error("invalid preamble {found:#04x} (expected 0xaa)")]
    Preamble { found: u8 },

    /// The declared length does not match the buffer length.
    #[error("declared length {declared} but buffer holds {actual} bytes")]
    Length { declared: usize, actual: usize },

    /// The trailing checksum does not match the recomputed one.
    #[error("checksum mismatch (computed {computed:#06x}, received {received:#06x})")]
    Checksum { computed: u16, received: u16 },
}

/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The buffer failed length or checksum validation.
    #[error("frame integrity failure: {0}")]
    Integrity(#[from] Integrity),

    /// Registry lookup or value transcoding failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The operation cannot be applied to this attribute.
    #[error("{operation} not supported for {name}")]
    Unsupported {
        operation: &'static str,
        name: &'static str,
    },

    /// The payload does not fit the 16-bit length field.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, FrameError>;
