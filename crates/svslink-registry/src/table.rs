//! The SVS subwoofer register map.

use crate::descriptor::{ActionBank, Descriptor, Domain, MemoryBank};

/// Main settings bank.
pub const SETTINGS: MemoryBank = MemoryBank::new(4);

const ON_OFF: &[f64] = &[0.0, 1.0];
const ZERO_TO_TWO: &[f64] = &[0.0, 1.0, 2.0];

const fn group(name: &'static str, offset: u16, width: u16, reset: Option<u8>) -> Descriptor {
    Descriptor::parameter(name, SETTINGS, offset, width, Domain::Group, reset)
}

const fn discrete(name: &'static str, offset: u16, values: &'static [f64], reset: u8) -> Descriptor {
    Descriptor::parameter(name, SETTINGS, offset, 2, Domain::Discrete(values), Some(reset))
}

const fn range(name: &'static str, offset: u16, min: f64, max: f64, reset: u8) -> Descriptor {
    Descriptor::parameter(name, SETTINGS, offset, 2, Domain::Range { min, max }, Some(reset))
}

const fn preset_name(name: &'static str, bank: u8) -> Descriptor {
    Descriptor::parameter(name, MemoryBank::new(bank), 0, 8, Domain::Text, Some(13))
}

const fn action(name: &'static str, bank: u8) -> Descriptor {
    Descriptor::action(name, ActionBank::new(bank), 1)
}

/// Every known attribute, in register order.
pub static PARAMETERS: &[Descriptor] = &[
    group("FULL_SETTINGS", 0x00, 52, None),
    discrete("DISPLAY", 0x00, ZERO_TO_TWO, 0),
    discrete("DISPLAY_TIMEOUT", 0x02, &[0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 1),
    discrete("STANDBY", 0x04, ZERO_TO_TWO, 2),
    discrete("BRIGHTNESS", 0x06, &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], 14),
    group("LOW_PASS_FILTER_ALL_SETTINGS", 0x08, 6, Some(3)),
    discrete("LOW_PASS_FILTER_ENABLE", 0x08, ON_OFF, 3),
    range("LOW_PASS_FILTER_FREQ", 0x0a, 30.0, 200.0, 3),
    discrete("LOW_PASS_FILTER_SLOPE", 0x0c, &[6.0, 12.0, 18.0, 24.0], 3),
    group("PEQ1_ALL_SETTINGS", 0x0e, 8, Some(5)),
    discrete("PEQ1_ENABLE", 0x0e, ON_OFF, 5),
    range("PEQ1_FREQ", 0x10, 20.0, 200.0, 5),
    range("PEQ1_BOOST", 0x12, -12.0, 6.0, 5),
    range("PEQ1_QFACTOR", 0x14, 0.2, 10.0, 5),
    group("PEQ2_ALL_SETTINGS", 0x16, 8, Some(5)),
    discrete("PEQ2_ENABLE", 0x16, ON_OFF, 5),
    range("PEQ2_FREQ", 0x18, 20.0, 200.0, 5),
    range("PEQ2_BOOST", 0x1a, -12.0, 6.0, 5),
    range("PEQ2_QFACTOR", 0x1c, 0.2, 10.0, 5),
    group("PEQ3_ALL_SETTINGS", 0x1e, 8, Some(5)),
    discrete("PEQ3_ENABLE", 0x1e, ON_OFF, 5),
    range("PEQ3_FREQ", 0x20, 20.0, 200.0, 5),
    range("PEQ3_BOOST", 0x22, -12.0, 6.0, 5),
    range("PEQ3_QFACTOR", 0x24, 0.2, 10.0, 5),
    group("ROOM_GAIN_ALL_SETTINGS", 0x26, 6, Some(8)),
    discrete("ROOM_GAIN_ENABLE", 0x26, ON_OFF, 8),
    discrete("ROOM_GAIN_FREQ", 0x28, &[25.0, 31.0, 40.0], 8),
    discrete("ROOM_GAIN_SLOPE", 0x2a, &[6.0, 12.0], 8),
    range("VOLUME", 0x2c, -60.0, 0.0, 12),
    range("PHASE", 0x2e, 0.0, 180.0, 9),
    discrete("POLARITY", 0x30, ON_OFF, 10),
    discrete("PORTTUNING", 0x32, &[20.0, 30.0], 11),
    preset_name("PRESET1NAME", 0x08),
    preset_name("PRESET2NAME", 0x09),
    preset_name("PRESET3NAME", 0x0A),
    action("PRESET1LOAD", 0x18),
    action("PRESET2LOAD", 0x19),
    action("PRESET3LOAD", 0x1A),
    action("PRESET4LOAD", 0x1B),
    action("PRESET1SAVE", 0x1C),
    action("PRESET2SAVE", 0x1D),
    action("PRESET3SAVE", 0x1E),
];
