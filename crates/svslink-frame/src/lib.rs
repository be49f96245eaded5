//! Frame layer of the SVS subwoofer control protocol.
//!
//! Every message exchanged with the device is framed as:
//! - a 1-byte preamble (`0xAA`)
//! - a 2-byte frame-type code
//! - a 2-byte little-endian total length, counted from the preamble
//! - a type-dependent payload
//! - a 2-byte little-endian CRC-16/XMODEM over everything before it
//!
//! Notifications from the device arrive in transport-sized chunks; the
//! [`Reassembler`] stitches them back together and hands each candidate
//! buffer to the [`Decoder`].

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod frame_type;
pub mod reassembler;

pub use codec::{check, checksum, encode_frame, Header, Hex, CHECKSUM_SIZE, HEADER_SIZE, PREAMBLE};
pub use decoder::{Decoded, Decoder, MemoryWindow};
pub use encoder::{Encoder, Request};
pub use error::{FrameError, Integrity, Result};
pub use frame_type::{FrameType, InfoKind};
pub use reassembler::Reassembler;
