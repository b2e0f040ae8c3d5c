//! Error types for the decision wheel.

use thiserror::Error;

/// Result type for wheel operations.
pub type WheelResult<T> = Result<T, WheelError>;

/// Errors surfaced to the user by wheel operations.
///
/// Blank input and spins attempted without enough options are not errors:
/// those operations are silent no-ops and report `false`.
#[derive(Debug, Error)]
pub enum WheelError {
    /// An imported session document could not be parsed.
    #[error("invalid wheel file: {0}")]
    MalformedSession(#[source] serde_json::Error),

    /// A color string is not a `#RRGGBB` hex value.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// No built-in or saved category has this id.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// An operation needed a winner but no spin has resolved yet.
    #[error("no winner to share yet")]
    NoWinner,

    /// The screen capture collaborator rejected the request.
    #[error("could not capture the wheel: {0}")]
    CaptureFailure(String),

    /// The share sheet or clipboard rejected the request.
    #[error("could not share the result: {0}")]
    ShareFailure(String),

    /// The file download collaborator failed.
    #[error("could not save file: {0}")]
    Download(String),

    /// The preference store could not be written.
    #[error("preference store error: {0}")]
    Store(String),

    /// A value could not be encoded as JSON.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
