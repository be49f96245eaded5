//! Parameter registry and value transcoder for the SVS subwoofer control plane.
//!
//! The device exposes its settings as a register map split into numbered
//! banks. Every addressable attribute is described by a [`Descriptor`]:
//! - the bank it lives in (a settings/name bank or an action bank)
//! - its byte offset and width inside that bank
//! - the domain its values must fall in
//!
//! The [`transcoder`] converts between typed [`AttributeValue`]s and the
//! signed fixed-point bytes the device stores.

pub mod descriptor;
pub mod error;
pub mod registry;
pub mod table;
pub mod transcoder;
pub mod value;

pub use descriptor::{ActionBank, Bank, Descriptor, Domain, MemoryBank};
pub use error::{RegistryError, Result};
pub use registry::{Registry, STANDARD};
pub use value::{AttributeValue, ValueSet};
