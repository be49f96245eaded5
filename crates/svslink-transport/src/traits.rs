use crate::error::Result;

/// Sink for complete outbound frames.
///
/// Each call carries exactly one frame. Implementations must deliver it
/// as a single write to the control characteristic; splitting it across
/// writes is the BLE stack's business, not the caller's.
pub trait Transport {
    /// Send one encoded frame.
    fn write(&mut self, frame: &[u8]) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        (**self).write(frame)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn write(&mut self, frame: &[u8]) -> Result<()> {
        (**self).write(frame)
    }
}
