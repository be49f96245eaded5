//! Attribute descriptors and the banks they live in.
//!
//! Banks 0x00-0x0A hold stored settings and preset names. Banks 0x18 and up
//! are action banks: addressing one triggers a device-side effect (load or
//! save a preset) and stores nothing.

/// A bank of stored values that read, write and reset requests can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemoryBank(u8);

impl MemoryBank {
    /// Highest id of a memory bank.
    pub const MAX_ID: u8 = 0x0A;

    /// Create a memory bank.
    ///
    /// Panics if `id` is above [`MemoryBank::MAX_ID`]; in a `static` table
    /// that panic is a compile error.
    pub const fn new(id: u8) -> Self {
        assert!(id <= Self::MAX_ID, "memory bank id must be <= 0x0A");
        Self(id)
    }

    /// Create a memory bank, returning `None` for ids outside the range.
    pub const fn try_new(id: u8) -> Option<Self> {
        if id <= Self::MAX_ID {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

/// A bank addressed by preset load/save requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionBank(u8);

impl ActionBank {
    /// Lowest id of an action bank.
    pub const MIN_ID: u8 = 0x18;

    /// Create an action bank.
    ///
    /// Panics if `id` is below [`ActionBank::MIN_ID`].
    pub const fn new(id: u8) -> Self {
        assert!(id >= Self::MIN_ID, "action bank id must be >= 0x18");
        Self(id)
    }

    /// Create an action bank, returning `None` for ids outside the range.
    pub const fn try_new(id: u8) -> Option<Self> {
        if id >= Self::MIN_ID {
            Some(Self(id))
        } else {
            None
        }
    }

    pub const fn id(self) -> u8 {
        self.0
    }
}

/// Where a descriptor lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Memory(MemoryBank),
    Action(ActionBank),
}

impl Bank {
    /// Numeric bank id as carried on the wire.
    pub const fn id(self) -> u8 {
        match self {
            Bank::Memory(bank) => bank.id(),
            Bank::Action(bank) => bank.id(),
        }
    }
}

/// The set of values an attribute may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Domain {
    /// Continuous numeric range, both ends inclusive.
    Range { min: f64, max: f64 },
    /// Explicit set of allowed numeric values.
    Discrete(&'static [f64]),
    /// Fixed-width text, zero padded.
    Text,
    /// Aggregate of contiguous leaf descriptors, bulk reads only.
    Group,
    /// No stored value; addressing it triggers a device-side effect.
    Action,
}

impl Domain {
    /// Whether a numeric value is allowed by this domain.
    ///
    /// Always false for text, group and action domains.
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Domain::Range { min, max } => *min <= value && value <= *max,
            Domain::Discrete(values) => values.iter().any(|allowed| *allowed == value),
            Domain::Text | Domain::Group | Domain::Action => false,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Domain::Range { .. } | Domain::Discrete(_))
    }

    /// Short label used in listings.
    pub fn kind(&self) -> &'static str {
        match self {
            Domain::Range { .. } => "range",
            Domain::Discrete(_) => "discrete",
            Domain::Text => "text",
            Domain::Group => "group",
            Domain::Action => "action",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Domain::Range { min, max } => write!(f, "[{min}, {max}]"),
            Domain::Discrete(values) => {
                let list = values
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{list}}}")
            }
            Domain::Text => f.write_str("text"),
            Domain::Group => f.write_str("group"),
            Domain::Action => f.write_str("action"),
        }
    }
}

/// One addressable attribute of the device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Descriptor {
    name: &'static str,
    bank: Bank,
    offset: u16,
    width: u16,
    domain: Domain,
    reset_group: Option<u8>,
}

impl Descriptor {
    /// A stored attribute (numeric, text or group) in a memory bank.
    pub const fn parameter(
        name: &'static str,
        bank: MemoryBank,
        offset: u16,
        width: u16,
        domain: Domain,
        reset_group: Option<u8>,
    ) -> Self {
        assert!(
            !matches!(domain, Domain::Action),
            "action descriptors belong in an action bank"
        );
        Self {
            name,
            bank: Bank::Memory(bank),
            offset,
            width,
            domain,
            reset_group,
        }
    }

    /// An action entry. Actions carry no value and cannot be reset.
    pub const fn action(name: &'static str, bank: ActionBank, offset: u16) -> Self {
        Self {
            name,
            bank: Bank::Action(bank),
            offset,
            width: 0,
            domain: Domain::Action,
            reset_group: None,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn bank(&self) -> Bank {
        self.bank
    }

    /// Numeric bank id (`group_id` on the wire).
    pub const fn group_id(&self) -> u8 {
        self.bank.id()
    }

    pub const fn offset(&self) -> u16 {
        self.offset
    }

    pub const fn width(&self) -> u16 {
        self.width
    }

    pub const fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Reset cluster id, or `None` when the attribute is not resettable.
    pub const fn reset_group(&self) -> Option<u8> {
        self.reset_group
    }

    pub const fn is_group(&self) -> bool {
        matches!(self.domain, Domain::Group)
    }

    /// True for descriptors that hold a single stored value.
    pub const fn is_leaf(&self) -> bool {
        !matches!(self.domain, Domain::Group | Domain::Action)
    }

    /// One past the last byte covered by this descriptor.
    pub const fn end(&self) -> u32 {
        self.offset as u32 + self.width as u32
    }

    /// Whether `offset` falls inside `[offset, offset + width)`.
    pub const fn contains(&self, offset: u32) -> bool {
        self.offset as u32 <= offset && offset < self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_ranges_are_enforced() {
        assert!(MemoryBank::try_new(0x0A).is_some());
        assert!(MemoryBank::try_new(0x0B).is_none());
        assert!(ActionBank::try_new(0x17).is_none());
        assert!(ActionBank::try_new(0x18).is_some());
    }

    #[test]
    #[should_panic(expected = "memory bank id")]
    fn memory_bank_constructor_panics_out_of_range() {
        let _ = MemoryBank::new(0x18);
    }

    #[test]
    #[should_panic(expected = "action bank id")]
    fn action_bank_constructor_panics_out_of_range() {
        let _ = ActionBank::new(4);
    }

    #[test]
    fn range_domain_is_inclusive() {
        let domain = Domain::Range {
            min: -60.0,
            max: 0.0,
        };
        assert!(domain.contains(-60.0));
        assert!(domain.contains(0.0));
        assert!(!domain.contains(0.1));
        assert!(!domain.contains(-60.5));
    }

    #[test]
    fn discrete_domain_requires_exact_membership() {
        let domain = Domain::Discrete(&[6.0, 12.0]);
        assert!(domain.contains(12.0));
        assert!(!domain.contains(12.1));
        assert!(!Domain::Text.contains(0.0));
    }

    #[test]
    fn action_descriptor_has_no_width() {
        let descriptor = Descriptor::action("LOAD", ActionBank::new(0x18), 1);
        assert_eq!(descriptor.width(), 0);
        assert!(!descriptor.is_leaf());
        assert!(!descriptor.contains(1));
        assert_eq!(descriptor.group_id(), 0x18);
    }

    #[test]
    fn contains_uses_half_open_range() {
        let descriptor = Descriptor::parameter(
            "X",
            MemoryBank::new(4),
            0x2c,
            2,
            Domain::Range {
                min: 0.0,
                max: 1.0,
            },
            None,
        );
        assert!(descriptor.contains(0x2c));
        assert!(descriptor.contains(0x2d));
        assert!(!descriptor.contains(0x2e));
        assert!(!descriptor.contains(0x2b));
    }
}
