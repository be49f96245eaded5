//! Device session management for the SVS subwoofer control plane.
//!
//! A [`Session`] owns everything one connected device needs: the frame
//! reassembler fed by notifications, the outbound [`Transport`], the set of
//! observers interested in decoded values and a merged [`DeviceState`].
//!
//! High-level operations are available both as methods on the session and
//! as serializable [`Command`]s.

pub mod command;
pub mod config;
pub mod error;
pub mod observer;
pub mod session;
pub mod state;

pub use command::{Command, Polarity, StandbyMode, DEFAULT_READ_ALL};
pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use observer::{Delivery, Observer};
pub use session::Session;
pub use state::DeviceState;

pub use svslink_frame::{Decoded, InfoKind, Request};
pub use svslink_registry::{AttributeValue, ValueSet};
pub use svslink_transport::{LinkConfig, MemoryTransport, Transport, WriteTransport};
