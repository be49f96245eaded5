use std::fmt;

use bytes::{BufMut, Bytes, BytesMut};
use svslink_registry::{transcoder, AttributeValue, Bank, Descriptor, Registry, STANDARD};

use crate::codec::encode_frame;
use crate::error::{FrameError, Result};
use crate::frame_type::{FrameType, InfoKind};

/// One outbound operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Read an attribute or a whole group from a memory bank.
    MemoryRead { name: String },
    /// Store a value in a memory bank.
    MemoryWrite { name: String, value: AttributeValue },
    /// Restore the attribute's reset cluster to factory defaults.
    Reset { name: String },
    /// Trigger a preset load or save action.
    PresetLoadSave { name: String },
    /// Ask for one of the device information blocks.
    Info(InfoKind),
}

impl Request {
    pub fn read(name: impl Into<String>) -> Self {
        Request::MemoryRead { name: name.into() }
    }

    pub fn write(name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Request::MemoryWrite {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn reset(name: impl Into<String>) -> Self {
        Request::Reset { name: name.into() }
    }

    pub fn preset(name: impl Into<String>) -> Self {
        Request::PresetLoadSave { name: name.into() }
    }

    /// Frame type the request is sent as.
    pub fn frame_type(&self) -> FrameType {
        match self {
            Request::MemoryRead { .. } => FrameType::MemoryRead,
            Request::MemoryWrite { .. } => FrameType::MemoryWrite,
            Request::Reset { .. } => FrameType::Reset,
            Request::PresetLoadSave { .. } => FrameType::PresetLoadSave,
            Request::Info(kind) => kind.request(),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::MemoryRead { name }
            | Request::Reset { name }
            | Request::PresetLoadSave { name } => write!(f, "{} {name}", self.frame_type()),
            Request::MemoryWrite { name, value } => {
                write!(f, "{} {name} {value}", self.frame_type())
            }
            Request::Info(_) => write!(f, "{}", self.frame_type()),
        }
    }
}

/// Builds checksummed request frames from registry lookups.
#[derive(Debug, Clone, Copy)]
pub struct Encoder {
    registry: &'static Registry,
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(&STANDARD)
    }
}

impl Encoder {
    pub fn new(registry: &'static Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &'static Registry {
        self.registry
    }

    /// Build a complete frame for `request`.
    ///
    /// Any failure is logged and returned; nothing should be transmitted in
    /// that case.
    pub fn build(&self, request: &Request) -> Result<Bytes> {
        let mut dst = BytesMut::new();
        match self.encode(request, &mut dst) {
            Ok(()) => Ok(dst.freeze()),
            Err(err) => {
                tracing::error!(request = %request, error = %err, "cannot encode request");
                Err(err)
            }
        }
    }

    /// Encode `request` and append the frame to `dst`.
    ///
    /// `dst` is left untouched on error.
    pub fn encode(&self, request: &Request, dst: &mut BytesMut) -> Result<()> {
        let mut payload = BytesMut::with_capacity(16);
        match request {
            Request::MemoryRead { name } => {
                let descriptor = self.memory_descriptor(name, "memory read")?;
                put_address(descriptor, &mut payload);
            }
            Request::MemoryWrite { name, value } => {
                let descriptor = self.memory_descriptor(name, "memory write")?;
                if !descriptor.is_leaf() {
                    return Err(unsupported("memory write", descriptor));
                }
                put_address(descriptor, &mut payload);
                transcoder::encode(descriptor, value, &mut payload)?;
            }
            Request::Reset { name } => {
                let descriptor = self.memory_descriptor(name, "reset")?;
                let group = descriptor
                    .reset_group()
                    .ok_or_else(|| unsupported("reset", descriptor))?;
                payload.put_u8(group);
            }
            Request::PresetLoadSave { name } => {
                let descriptor = self.registry.lookup(name)?;
                if !matches!(descriptor.bank(), Bank::Action(_)) {
                    return Err(unsupported("preset load/save", descriptor));
                }
                put_address(descriptor, &mut payload);
            }
            Request::Info(_) => payload.put_u8(0),
        }
        encode_frame(request.frame_type(), &payload, dst)
    }

    fn memory_descriptor(&self, name: &str, operation: &'static str) -> Result<&'static Descriptor> {
        let descriptor = self.registry.lookup(name)?;
        match descriptor.bank() {
            Bank::Memory(_) => Ok(descriptor),
            Bank::Action(_) => Err(unsupported(operation, descriptor)),
        }
    }
}

/// Bank id (4B LE) + offset (2B LE) + width (2B LE).
fn put_address(descriptor: &Descriptor, dst: &mut BytesMut) {
    dst.put_u32_le(u32::from(descriptor.group_id()));
    dst.put_u16_le(descriptor.offset());
    dst.put_u16_le(descriptor.width());
}

fn unsupported(operation: &'static str, descriptor: &Descriptor) -> FrameError {
    FrameError::Unsupported {
        operation,
        name: descriptor.name(),
    }
}
