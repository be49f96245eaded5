use std::collections::HashSet;

use crate::descriptor::Descriptor;
use crate::error::{RegistryError, Result};
use crate::table::PARAMETERS;

/// The device's register map.
pub static STANDARD: Registry = Registry::new(PARAMETERS);

/// Name- and address-keyed view over a static descriptor table.
#[derive(Debug, Clone, Copy)]
pub struct Registry {
    descriptors: &'static [Descriptor],
}

impl Registry {
    /// Wrap a descriptor table. Use [`Registry::check`] to verify its layout.
    pub const fn new(descriptors: &'static [Descriptor]) -> Self {
        Self { descriptors }
    }

    /// The standard SVS register map.
    pub fn standard() -> &'static Registry {
        &STANDARD
    }

    /// Look up a descriptor by name.
    pub fn lookup(&self, name: &str) -> Result<&'static Descriptor> {
        self.get(name)
            .ok_or_else(|| RegistryError::UnknownAttribute(name.to_string()))
    }

    /// Look up a descriptor by name, returning `None` when absent.
    pub fn get(&self, name: &str) -> Option<&'static Descriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    /// Find the leaf descriptor whose byte range contains `offset` in bank `group_id`.
    ///
    /// Group descriptors are skipped. Returns `None` for unmapped gaps.
    pub fn resolve(&self, group_id: u32, offset: u32) -> Option<&'static Descriptor> {
        self.descriptors.iter().find(|d| {
            !d.is_group() && u32::from(d.group_id()) == group_id && d.contains(offset)
        })
    }

    /// All descriptors in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Descriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Verify the table layout.
    ///
    /// Names must be unique, leaf ranges within a bank must not overlap, and
    /// every group must be exactly tiled by the leaves inside it.
    pub fn check(&self) -> Result<()> {
        let mut names = HashSet::new();
        for descriptor in self.descriptors {
            if !names.insert(descriptor.name()) {
                return Err(RegistryError::InvalidTable(format!(
                    "duplicate name {}",
                    descriptor.name()
                )));
            }
        }

        let leaves: Vec<&Descriptor> = self.descriptors.iter().filter(|d| d.is_leaf()).collect();
        for (index, first) in leaves.iter().enumerate() {
            if first.width() == 0 {
                return Err(RegistryError::InvalidTable(format!(
                    "{} has zero width",
                    first.name()
                )));
            }
            for second in &leaves[index + 1..] {
                if first.group_id() == second.group_id() && overlaps(first, second) {
                    return Err(RegistryError::InvalidTable(format!(
                        "{} overlaps {}",
                        first.name(),
                        second.name()
                    )));
                }
            }
        }

        for group in self.descriptors.iter().filter(|d| d.is_group()) {
            check_group(group, &leaves)?;
        }

        Ok(())
    }
}

fn overlaps(a: &Descriptor, b: &Descriptor) -> bool {
    u32::from(a.offset()) < b.end() && u32::from(b.offset()) < a.end()
}

fn check_group(group: &Descriptor, leaves: &[&Descriptor]) -> Result<()> {
    let mut members: Vec<&Descriptor> = leaves
        .iter()
        .copied()
        .filter(|leaf| leaf.group_id() == group.group_id() && overlaps(group, leaf))
        .collect();
    members.sort_by_key(|leaf| leaf.offset());

    let mut cursor = u32::from(group.offset());
    for member in &members {
        if u32::from(member.offset()) != cursor || member.end() > group.end() {
            return Err(RegistryError::InvalidTable(format!(
                "group {} is not tiled by its members at {}",
                group.name(),
                member.name()
            )));
        }
        cursor = member.end();
    }

    if cursor != group.end() {
        return Err(RegistryError::InvalidTable(format!(
            "group {} ends at {:#x} but its members stop at {cursor:#x}",
            group.name(),
            group.end()
        )));
    }
    Ok(())
}
