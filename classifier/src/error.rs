use thiserror::Error;

/// Result type alias for token ingestion
pub type Result<T> = std::result::Result<T, ClassifierError>;

/// Errors raised while turning a request payload into tokens.
///
/// Classification itself never fails; only ingestion can reject a payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClassifierError {
    #[error("Invalid input: {field} must be an array.")]
    NotASequence { field: String },

    #[error("Invalid input: request body must be a JSON object.")]
    NotAnObject,
}

impl ClassifierError {
    /// Create a new "not a sequence" error for the given payload field
    pub fn not_a_sequence<S: Into<String>>(field: S) -> Self {
        Self::NotASequence {
            field: field.into(),
        }
    }

    /// Get a user-friendly message for the failure envelope
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
