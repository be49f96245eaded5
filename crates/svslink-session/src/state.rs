use serde::Serialize;
use svslink_registry::{AttributeValue, ValueSet};

use crate::command::{Polarity, StandbyMode};

/// Lowest and highest master volume in dB.
const VOLUME_RANGE_DB: (f64, f64) = (-60.0, 0.0);

/// Last known value of every attribute a session has decoded.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceState {
    values: ValueSet,
}

impl DeviceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite known attributes with the values from one frame.
    pub fn merge(&mut self, values: &ValueSet) {
        for (name, value) in values {
            self.values.insert(*name, value.clone());
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.values.get(name)
    }

    pub fn values(&self) -> &ValueSet {
        &self.values
    }

    pub fn standby(&self) -> Option<StandbyMode> {
        self.get("STANDBY").and_then(StandbyMode::from_value)
    }

    pub fn polarity(&self) -> Option<Polarity> {
        self.get("POLARITY").and_then(Polarity::from_value)
    }

    pub fn volume_db(&self) -> Option<f64> {
        self.get("VOLUME").and_then(AttributeValue::as_f64)
    }

    /// Volume mapped linearly onto `0.0..=1.0`.
    pub fn volume_level(&self) -> Option<f64> {
        let (min, max) = VOLUME_RANGE_DB;
        self.volume_db().map(|db| (db - min) / (max - min))
    }

    /// Preset slot name, 1-based.
    pub fn preset_name(&self, preset: u8) -> Option<&str> {
        self.get(&crate::command::preset_attribute(preset, "NAME"))
            .and_then(AttributeValue::as_text)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
