//! Control-plane codec for SVS subwoofers over BLE GATT.
//!
//! The device exchanges small checksummed binary frames with its host over
//! one GATT characteristic. This crate bundles the layers that produce and
//! consume those frames.
//!
//! # Crate Structure
//!
//! - [`registry`]: Register map and fixed-point value transcoding
//! - [`frame`]: Frame encoding, validation, decoding and chunk reassembly
//! - [`transport`]: Outbound transport seam and link identifiers
//! - [`session`]: Per-device session with observers and high-level commands

/// Re-export registry types.
pub mod registry {
    pub use svslink_registry::*;
}

/// Re-export frame types.
pub mod frame {
    pub use svslink_frame::*;
}

/// Re-export transport types.
pub mod transport {
    pub use svslink_transport::*;
}

/// Re-export session types.
pub mod session {
    pub use svslink_session::*;
}
