//! GATT identifiers of the subwoofer control link.

/// Characteristic that accepts request frames and notifies responses.
pub const CONTROL_CHARACTERISTIC_UUID: &str = "6409d79d-cd28-479c-a639-92f9e1948b43";

/// Service that owns the control characteristic.
pub const CONTROL_SERVICE_UUID: &str = "1fee6acf-a826-4e37-9635-4d8a01642c5d";

/// Where on the device the control channel lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkConfig {
    pub service_uuid: String,
    pub characteristic_uuid: String,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            service_uuid: CONTROL_SERVICE_UUID.to_string(),
            characteristic_uuid: CONTROL_CHARACTERISTIC_UUID.to_string(),
        }
    }
}
