use thiserror::Error;

/// Failures that happen before a status code is known.
///
/// Both variants are shown to the user as the generic error message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("preview request failed: {0}")]
    Transport(String),

    #[error("watched control is not inside a form")]
    MissingForm,
}
