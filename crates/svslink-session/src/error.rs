/// Errors that can occur in session operations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Registry lookup or value validation failed.
    #[error("registry error: {0}")]
    Registry(#[from] svslink_registry::RegistryError),

    /// A request could not be encoded.
    #[error("frame error: {0}")]
    Frame(#[from] svslink_frame::FrameError),

    /// The transport refused the frame.
    #[error("transport error: {0}")]
    Transport(#[from] svslink_transport::TransportError),

    /// A command carried an argument no request can express.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
