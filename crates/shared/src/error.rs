//! Error types for profile editing.

use thiserror::Error;

/// Reasons a profile draft edit is rejected. The draft is left unchanged
/// whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The key does not name an editable profile field
    #[error("Unknown profile field: {0}")]
    UnknownField(String),

    /// The value does not parse for the field's type
    #[error("Invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Unknown background: {0}")]
    UnknownBackground(String),

    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    #[error("Unknown avatar: {0}")]
    UnknownAvatar(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;
