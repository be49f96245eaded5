//! Frame-type codes.
//!
//! Requests sent to the device carry `0x1f` in the second code byte;
//! responses carry `0x00`.

/// Offset of the memory window header in request-shaped frames.
pub const REQUEST_WINDOW_OFFSET: usize = 5;

/// Offset of the memory window header in read responses, which carry four
/// extra status/echo bytes ahead of it.
pub const RESPONSE_WINDOW_OFFSET: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    PresetLoadSave,
    MemoryWrite,
    MemoryRead,
    ReadResponse,
    Reset,
    SubInfo1,
    SubInfo1Response,
    SubInfo2,
    SubInfo2Response,
    SubInfo3,
    SubInfo3Response,
}

impl FrameType {
    pub const ALL: [FrameType; 11] = [
        FrameType::PresetLoadSave,
        FrameType::MemoryWrite,
        FrameType::MemoryRead,
        FrameType::ReadResponse,
        FrameType::Reset,
        FrameType::SubInfo1,
        FrameType::SubInfo1Response,
        FrameType::SubInfo2,
        FrameType::SubInfo2Response,
        FrameType::SubInfo3,
        FrameType::SubInfo3Response,
    ];

    /// The two code bytes as they appear on the wire.
    pub const fn code(self) -> [u8; 2] {
        match self {
            FrameType::PresetLoadSave => [0x07, 0x04],
            FrameType::MemoryWrite => [0xf0, 0x1f],
            FrameType::MemoryRead => [0xf1, 0x1f],
            FrameType::ReadResponse => [0xf2, 0x00],
            FrameType::Reset => [0xf3, 0x1f],
            FrameType::SubInfo1 => [0xf4, 0x1f],
            FrameType::SubInfo1Response => [0xf5, 0x00],
            FrameType::SubInfo2 => [0xfc, 0x1f],
            FrameType::SubInfo2Response => [0xfd, 0x00],
            FrameType::SubInfo3 => [0xfe, 0x1f],
            FrameType::SubInfo3Response => [0xff, 0x00],
        }
    }

    /// Resolve a code by exact match.
    pub fn from_code(code: [u8; 2]) -> Option<Self> {
        Self::ALL.into_iter().find(|ty| ty.code() == code)
    }

    /// Protocol name of the frame type.
    pub const fn name(self) -> &'static str {
        match self {
            FrameType::PresetLoadSave => "PRESETLOADSAVE",
            FrameType::MemoryWrite => "MEMWRITE",
            FrameType::MemoryRead => "MEMREAD",
            FrameType::ReadResponse => "READ_RESP",
            FrameType::Reset => "RESET",
            FrameType::SubInfo1 => "SUB_INFO1",
            FrameType::SubInfo1Response => "SUB_INFO1_RESP",
            FrameType::SubInfo2 => "SUB_INFO2",
            FrameType::SubInfo2Response => "SUB_INFO2_RESP",
            FrameType::SubInfo3 => "SUB_INFO3",
            FrameType::SubInfo3Response => "SUB_INFO3_RESP",
        }
    }

    /// Where the memory window header starts, for memory-oriented frames.
    pub const fn window_offset(self) -> Option<usize> {
        match self {
            FrameType::MemoryWrite | FrameType::MemoryRead => Some(REQUEST_WINDOW_OFFSET),
            FrameType::ReadResponse => Some(RESPONSE_WINDOW_OFFSET),
            _ => None,
        }
    }

    /// Whether the frame carries attribute data after its memory window.
    pub const fn carries_values(self) -> bool {
        matches!(self, FrameType::MemoryWrite | FrameType::ReadResponse)
    }
}

impl std::fmt::Display for FrameType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The three device information queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    First,
    Second,
    Third,
}

impl InfoKind {
    /// Request frame type for this query.
    pub const fn request(self) -> FrameType {
        match self {
            InfoKind::First => FrameType::SubInfo1,
            InfoKind::Second => FrameType::SubInfo2,
            InfoKind::Third => FrameType::SubInfo3,
        }
    }

    /// Frame type the device answers with.
    pub const fn response(self) -> FrameType {
        match self {
            InfoKind::First => FrameType::SubInfo1Response,
            InfoKind::Second => FrameType::SubInfo2Response,
            InfoKind::Third => FrameType::SubInfo3Response,
        }
    }

    /// Query by 1-based index.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(InfoKind::First),
            2 => Some(InfoKind::Second),
            3 => Some(InfoKind::Third),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for ty in FrameType::ALL {
            assert_eq!(FrameType::from_code(ty.code()), Some(ty));
        }
        assert_eq!(FrameType::from_code([0x00, 0x00]), None);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in FrameType::ALL.iter().enumerate() {
            for b in &FrameType::ALL[i + 1..] {
                assert_ne!(a.code(), b.code(), "{a} and {b} share a code");
            }
        }
    }

    #[test]
    fn window_offsets() {
        assert_eq!(FrameType::MemoryRead.window_offset(), Some(5));
        assert_eq!(FrameType::MemoryWrite.window_offset(), Some(5));
        assert_eq!(FrameType::ReadResponse.window_offset(), Some(9));
        assert_eq!(FrameType::Reset.window_offset(), None);
        assert!(!FrameType::MemoryRead.carries_values());
        assert!(FrameType::ReadResponse.carries_values());
    }

    #[test]
    fn info_kinds_pair_up() {
        assert_eq!(InfoKind::from_index(2), Some(InfoKind::Second));
        assert_eq!(InfoKind::from_index(4), None);
        assert_eq!(InfoKind::Third.request().code(), [0xfe, 0x1f]);
        assert_eq!(InfoKind::Third.response().code(), [0xff, 0x00]);
    }
}
