/// Errors raised by registry lookups and value transcoding.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No descriptor is registered under the given name.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// The value lies outside the descriptor's domain.
    #[error("value {value} out of domain for {name}")]
    OutOfDomain { name: &'static str, value: String },

    /// The stored bytes could not be turned into a value.
    #[error("failed to decode {name}: {reason}")]
    Decode { name: &'static str, reason: String },

    /// A parameter table breaks one of the layout invariants.
    #[error("invalid parameter table: {0}")]
    InvalidTable(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
