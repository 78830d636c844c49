use thiserror::Error;

/// Failures surfaced by the generation engine.
///
/// `MissingRequiredField` and `UnrecognizedUtteranceType` are caller bugs and are
/// never retried. `RealizerUnavailable` is only returned after the retry budget
/// is spent. `MalformedQuery` and `MalformedFrame` are raised before any realizer call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NlgError {
    #[error("missing required frame field `{0}`")]
    MissingRequiredField(&'static str),

    #[error("unrecognized utterance type `{0}`")]
    UnrecognizedUtteranceType(String),

    #[error("surface realizer unavailable: {0}")]
    RealizerUnavailable(String),

    #[error("malformed query field `{field}`: {reason}")]
    MalformedQuery { field: String, reason: String },

    #[error("malformed keyword frame: {0}")]
    MalformedFrame(String),
}

impl NlgError {
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        NlgError::MalformedQuery {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, NlgError>;
