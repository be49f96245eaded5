//! Outbound transport abstraction.
//!
//! The codec never performs I/O itself. A session hands every encoded frame
//! to a [`Transport`], which is expected to write it to the device's control
//! characteristic in one piece. Inbound notifications travel the other way:
//! the host's BLE stack delivers them to the session directly.
//!
//! Two implementations ship here:
//! - [`MemoryTransport`] records frames, for tests and offline tooling
//! - [`WriteTransport`] forwards frames to any [`std::io::Write`] sink

pub mod error;
pub mod link;
pub mod memory;
pub mod traits;
pub mod writer;

pub use error::{Result, TransportError};
pub use link::{LinkConfig, CONTROL_CHARACTERISTIC_UUID, CONTROL_SERVICE_UUID};
pub use memory::MemoryTransport;
pub use traits::Transport;
pub use writer::WriteTransport;
