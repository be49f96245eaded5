use svslink_transport::LinkConfig;

use crate::command::DEFAULT_READ_ALL;

/// Per-session settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name used in log fields to tell sessions apart.
    pub label: String,
    /// GATT location of the control characteristic.
    pub link: LinkConfig,
    /// Attributes requested, in order, by a read-all-settings operation.
    pub read_all: Vec<&'static str>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            label: "svs".to_string(),
            link: LinkConfig::default(),
            read_all: DEFAULT_READ_ALL.to_vec(),
        }
    }
}
