use std::fmt;
use std::sync::mpsc;

use svslink_frame::{Decoded, Encoder, Hex, InfoKind, Reassembler, Request};
use svslink_registry::{AttributeValue, ValueSet};
use svslink_transport::Transport;

use crate::command::{info_kind, preset_attribute, Command, Polarity, StandbyMode};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::observer::{Delivery, Observer};
use crate::state::DeviceState;

/// One connected subwoofer.
///
/// Inbound notification chunks go to [`Session::handle_chunk`]; every
/// frame that carries values updates the [`DeviceState`] and is handed to
/// each subscribed observer once. Outbound operations are encoded against
/// the standard register map and written to the transport.
pub struct Session<T> {
    transport: T,
    encoder: Encoder,
    reassembler: Reassembler,
    observers: Vec<Box<dyn Observer>>,
    state: DeviceState,
    config: SessionConfig,
}

impl<T: Transport> Session<T> {
    /// Create a session with default configuration.
    pub fn new(transport: T) -> Self {
        Self::with_config(transport, SessionConfig::default())
    }

    /// Create a session with explicit configuration.
    pub fn with_config(transport: T, config: SessionConfig) -> Self {
        Self {
            transport,
            encoder: Encoder::default(),
            reassembler: Reassembler::new(),
            observers: Vec::new(),
            state: DeviceState::new(),
            config,
        }
    }

    /// Register an observer for decoded value sets.
    pub fn subscribe(&mut self, observer: impl Observer + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Register an event channel and return its receiving end.
    ///
    /// The channel is dropped from the session the first time a delivery
    /// finds the receiver gone.
    pub fn subscribe_channel(&mut self) -> mpsc::Receiver<ValueSet> {
        let (tx, rx) = mpsc::channel();
        self.subscribe(tx);
        rx
    }

    /// Feed one notification chunk from the control characteristic.
    pub fn handle_chunk(&mut self, chunk: &[u8]) -> Decoded {
        let decoded = self.reassembler.push(chunk);
        if decoded.values.is_empty() {
            return decoded;
        }

        tracing::debug!(
            session = %self.config.label,
            frame_type = ?decoded.frame_type,
            count = decoded.values.len(),
            "received values"
        );
        self.state.merge(&decoded.values);
        self.observers
            .retain_mut(|observer| observer.on_values(&decoded.values) == Delivery::Continue);
        decoded
    }

    /// Encode `request` and write it to the transport.
    pub fn send(&mut self, request: &Request) -> Result<()> {
        let frame = self.encoder.build(request)?;
        tracing::debug!(
            session = %self.config.label,
            request = %request,
            frame = %Hex(&frame),
            "sending frame"
        );
        self.transport.write(&frame)?;
        Ok(())
    }

    /// Carry out a high-level command.
    pub fn execute(&mut self, command: &Command) -> Result<()> {
        if matches!(command, Command::ReadAllSettings) {
            return self.read_all_settings();
        }
        for request in command.requests()? {
            self.send(&request)?;
        }
        Ok(())
    }

    /// Request every configured read-all attribute.
    pub fn read_all_settings(&mut self) -> Result<()> {
        let names = self.config.read_all.clone();
        for name in names {
            self.send(&Request::read(name))?;
        }
        Ok(())
    }

    pub fn set_volume(&mut self, db: f64) -> Result<()> {
        self.write("VOLUME", db)
    }

    pub fn set_phase(&mut self, degrees: f64) -> Result<()> {
        self.write("PHASE", degrees)
    }

    pub fn set_polarity(&mut self, polarity: Polarity) -> Result<()> {
        self.write("POLARITY", polarity)
    }

    pub fn set_standby(&mut self, mode: StandbyMode) -> Result<()> {
        self.write("STANDBY", mode)
    }

    pub fn set_low_pass_filter(&mut self, enabled: bool) -> Result<()> {
        self.write("LOW_PASS_FILTER_ENABLE", enabled)
    }

    pub fn set_low_pass_frequency(&mut self, hz: f64) -> Result<()> {
        self.write("LOW_PASS_FILTER_FREQ", hz)
    }

    pub fn set_low_pass_slope(&mut self, db_per_octave: u8) -> Result<()> {
        self.write("LOW_PASS_FILTER_SLOPE", db_per_octave)
    }

    pub fn set_room_gain(&mut self, enabled: bool) -> Result<()> {
        self.write("ROOM_GAIN_ENABLE", enabled)
    }

    pub fn set_room_gain_frequency(&mut self, hz: u8) -> Result<()> {
        self.write("ROOM_GAIN_FREQ", hz)
    }

    pub fn set_room_gain_slope(&mut self, db_per_octave: u8) -> Result<()> {
        self.write("ROOM_GAIN_SLOPE", db_per_octave)
    }

    pub fn set_port_tuning(&mut self, hz: u8) -> Result<()> {
        self.write("PORTTUNING", hz)
    }

    /// Rename preset slot `preset` (1-based). Longer names are truncated.
    pub fn set_preset_name(&mut self, preset: u8, name: &str) -> Result<()> {
        self.write(&preset_attribute(preset, "NAME"), name)
    }

    pub fn load_preset(&mut self, preset: u8) -> Result<()> {
        self.send(&Request::preset(preset_attribute(preset, "LOAD")))
    }

    pub fn save_preset(&mut self, preset: u8) -> Result<()> {
        self.send(&Request::preset(preset_attribute(preset, "SAVE")))
    }

    /// Restore the settings group that `parameter` belongs to.
    pub fn reset(&mut self, parameter: &str) -> Result<()> {
        self.send(&Request::reset(parameter))
    }

    /// Ask for device information block 1, 2 or 3.
    pub fn request_info(&mut self, kind: u8) -> Result<()> {
        let kind: InfoKind = info_kind(kind)?;
        self.send(&Request::Info(kind))
    }

    fn write(&mut self, name: &str, value: impl Into<AttributeValue>) -> Result<()> {
        self.send(&Request::write(name, value))
    }

    /// Whether the last chunk completed a well-formed frame.
    pub fn is_in_sync(&self) -> bool {
        self.reassembler.is_in_sync()
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Borrow the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Mutably borrow the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consume the session and return the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("label", &self.config.label)
            .field("in_sync", &self.reassembler.is_in_sync())
            .field("observers", &self.observers.len())
            .field("known_values", &self.state.len())
            .finish()
    }
}
