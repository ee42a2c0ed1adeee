//! Client-side validation errors.

use thiserror::Error;

/// A required form field is missing or blank after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("topic is required")]
    MissingTopic,

    #[error("category is required")]
    MissingCategory,

    #[error("applied skill type is required")]
    MissingType,

    #[error("no learning is selected")]
    MissingLearningId,
}

impl ValidationError {
    /// Text for the toast shown to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::MissingTopic | ValidationError::MissingCategory => {
                "Topic and category are required."
            }
            ValidationError::MissingType => "Type is required.",
            ValidationError::MissingLearningId => "Open a learning before adding an applied skill.",
        }
    }
}
