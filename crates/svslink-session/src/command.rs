use serde::{Deserialize, Serialize};
use svslink_frame::{InfoKind, Request};
use svslink_registry::AttributeValue;

use crate::error::{Result, SessionError};

/// Attributes a read-all-settings operation asks for by default.
pub const DEFAULT_READ_ALL: [&str; 4] = ["FULL_SETTINGS", "PRESET1NAME", "PRESET2NAME", "PRESET3NAME"];

/// How the amplifier leaves standby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandbyMode {
    /// Wakes on signal detection.
    AutoOn,
    /// Follows the 12 V trigger input.
    Trigger,
    /// Always on.
    On,
}

impl StandbyMode {
    pub const fn raw(self) -> u8 {
        match self {
            StandbyMode::AutoOn => 0,
            StandbyMode::Trigger => 1,
            StandbyMode::On => 2,
        }
    }

    pub fn from_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Integer(0) => Some(StandbyMode::AutoOn),
            AttributeValue::Integer(1) => Some(StandbyMode::Trigger),
            AttributeValue::Integer(2) => Some(StandbyMode::On),
            _ => None,
        }
    }
}

impl From<StandbyMode> for AttributeValue {
    fn from(mode: StandbyMode) -> Self {
        AttributeValue::from(mode.raw())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Normal,
    Inverted,
}

impl Polarity {
    pub const fn raw(self) -> u8 {
        match self {
            Polarity::Normal => 0,
            Polarity::Inverted => 1,
        }
    }

    pub fn from_value(value: &AttributeValue) -> Option<Self> {
        match value {
            AttributeValue::Integer(0) => Some(Polarity::Normal),
            AttributeValue::Integer(1) => Some(Polarity::Inverted),
            _ => None,
        }
    }
}

impl From<Polarity> for AttributeValue {
    fn from(polarity: Polarity) -> Self {
        AttributeValue::from(polarity.raw())
    }
}

/// A user-level operation on the subwoofer.
///
/// Serialized with a `command` tag, e.g.
/// `{"command":"set_volume","db":-20}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    ReadAllSettings,
    SetVolume { db: f64 },
    SetPhase { degrees: f64 },
    SetPolarity { polarity: Polarity },
    SetStandby { mode: StandbyMode },
    SetLowPassFilter { enabled: bool },
    SetLowPassFrequency { hz: f64 },
    SetLowPassSlope { db_per_octave: u8 },
    SetRoomGain { enabled: bool },
    SetRoomGainFrequency { hz: u8 },
    SetRoomGainSlope { db_per_octave: u8 },
    SetPortTuning { hz: u8 },
    SetPresetName { preset: u8, name: String },
    LoadPreset { preset: u8 },
    SavePreset { preset: u8 },
    Reset { parameter: String },
    RequestInfo { kind: u8 },
}

impl Command {
    /// Parse a command from its JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Requests that carry out this command, in sending order.
    ///
    /// Attribute names and values are checked only when the requests are
    /// encoded; the one exception is an info kind outside `1..=3`.
    pub fn requests(&self) -> Result<Vec<Request>> {
        let request = match self {
            Command::ReadAllSettings => {
                return Ok(DEFAULT_READ_ALL.iter().map(|name| Request::read(*name)).collect());
            }
            Command::SetVolume { db } => Request::write("VOLUME", *db),
            Command::SetPhase { degrees } => Request::write("PHASE", *degrees),
            Command::SetPolarity { polarity } => Request::write("POLARITY", *polarity),
            Command::SetStandby { mode } => Request::write("STANDBY", *mode),
            Command::SetLowPassFilter { enabled } => {
                Request::write("LOW_PASS_FILTER_ENABLE", *enabled)
            }
            Command::SetLowPassFrequency { hz } => Request::write("LOW_PASS_FILTER_FREQ", *hz),
            Command::SetLowPassSlope { db_per_octave } => {
                Request::write("LOW_PASS_FILTER_SLOPE", *db_per_octave)
            }
            Command::SetRoomGain { enabled } => Request::write("ROOM_GAIN_ENABLE", *enabled),
            Command::SetRoomGainFrequency { hz } => Request::write("ROOM_GAIN_FREQ", *hz),
            Command::SetRoomGainSlope { db_per_octave } => {
                Request::write("ROOM_GAIN_SLOPE", *db_per_octave)
            }
            Command::SetPortTuning { hz } => Request::write("PORTTUNING", *hz),
            Command::SetPresetName { preset, name } => {
                Request::write(preset_attribute(*preset, "NAME"), name.as_str())
            }
            Command::LoadPreset { preset } => Request::preset(preset_attribute(*preset, "LOAD")),
            Command::SavePreset { preset } => Request::preset(preset_attribute(*preset, "SAVE")),
            Command::Reset { parameter } => Request::reset(parameter.as_str()),
            Command::RequestInfo { kind } => Request::Info(info_kind(*kind)?),
        };
        Ok(vec![request])
    }
}

/// Attribute name of a preset slot, e.g. `PRESET2LOAD`.
pub(crate) fn preset_attribute(preset: u8, suffix: &str) -> String {
    format!("PRESET{preset}{suffix}")
}

pub(crate) fn info_kind(kind: u8) -> Result<InfoKind> {
    InfoKind::from_index(kind)
        .ok_or_else(|| SessionError::InvalidCommand(format!("info kind {kind} is not 1, 2 or 3")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tagged_json() {
        let command = Command::from_json(r#"{"command":"set_volume","db":-12.5}"#).unwrap();
        assert_eq!(command, Command::SetVolume { db: -12.5 });

        let command = Command::from_json(r#"{"command":"set_standby","mode":"auto_on"}"#).unwrap();
        assert_eq!(
            command,
            Command::SetStandby {
                mode: StandbyMode::AutoOn
            }
        );

        let command = Command::from_json(r#"{"command":"read_all_settings"}"#).unwrap();
        assert_eq!(command, Command::ReadAllSettings);
    }

    #[test]
    fn unknown_command_is_rejected() {
        let err = Command::from_json(r#"{"command":"set_bass","db":3}"#).unwrap_err();
        assert!(matches!(err, SessionError::Json(_)));
    }

    #[test]
    fn serializes_with_command_tag() {
        let json = serde_json::to_value(Command::SetPresetName {
            preset: 2,
            name: "Music".to_string(),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"command": "set_preset_name", "preset": 2, "name": "Music"})
        );
    }

    #[test]
    fn read_all_expands_to_settings_and_names() {
        let requests = Command::ReadAllSettings.requests().unwrap();
        assert_eq!(
            requests,
            vec![
                Request::read("FULL_SETTINGS"),
                Request::read("PRESET1NAME"),
                Request::read("PRESET2NAME"),
                Request::read("PRESET3NAME"),
            ]
        );
    }

    #[test]
    fn single_writes_map_to_attributes() {
        let cases = [
            (Command::SetPhase { degrees: 90.0 }, Request::write("PHASE", 90)),
            (
                Command::SetPolarity {
                    polarity: Polarity::Inverted,
                },
                Request::write("POLARITY", 1),
            ),
            (
                Command::SetStandby {
                    mode: StandbyMode::On,
                },
                Request::write("STANDBY", 2),
            ),
            (
                Command::SetLowPassFilter { enabled: true },
                Request::write("LOW_PASS_FILTER_ENABLE", 1),
            ),
            (
                Command::SetRoomGainSlope { db_per_octave: 12 },
                Request::write("ROOM_GAIN_SLOPE", 12),
            ),
            (Command::SetPortTuning { hz: 20 }, Request::write("PORTTUNING", 20)),
            (Command::LoadPreset { preset: 4 }, Request::preset("PRESET4LOAD")),
            (Command::SavePreset { preset: 1 }, Request::preset("PRESET1SAVE")),
            (
                Command::Reset {
                    parameter: "PHASE".to_string(),
                },
                Request::reset("PHASE"),
            ),
        ];
        for (command, expected) in cases {
            assert_eq!(command.requests().unwrap(), vec![expected], "{command:?}");
        }
    }

    #[test]
    fn info_kind_must_be_one_to_three() {
        assert_eq!(
            Command::RequestInfo { kind: 3 }.requests().unwrap(),
            vec![Request::Info(InfoKind::Third)]
        );
        assert!(matches!(
            Command::RequestInfo { kind: 0 }.requests(),
            Err(SessionError::InvalidCommand(_))
        ));
    }

    #[test]
    fn enum_values_round_trip_through_attribute_values() {
        for mode in [StandbyMode::AutoOn, StandbyMode::Trigger, StandbyMode::On] {
            assert_eq!(StandbyMode::from_value(&mode.into()), Some(mode));
        }
        assert_eq!(Polarity::from_value(&AttributeValue::Integer(5)), None);
        assert_eq!(Polarity::from_value(&Polarity::Normal.into()), Some(Polarity::Normal));
    }
}
