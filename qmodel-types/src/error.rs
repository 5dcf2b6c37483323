/// Error type for question traversal.
#[derive(Debug, thiserror::Error)]
pub enum QuestionError {
    /// User cancelled the traversal (closed the prompt, pressed Ctrl+C, or went
    /// back from the first question).
    #[error("Traversal cancelled by user")]
    Cancelled,

    /// A select question resolved to zero options.
    #[error("Question '{name}' has no options to choose from")]
    EmptyOptions { name: String },

    /// The user interaction returned an option id that is not on offer.
    #[error("Question '{name}' has no option with id '{id}'")]
    UnknownOption { name: String, id: String },

    /// A `func` question or a dynamic option list failed.
    #[error("Callback for question '{name}' failed: {source}")]
    Callback {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// Backend-specific failure (I/O, terminal crash, missing scripted answer, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl QuestionError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Structural problems found by [`QuestionNode::validate`](crate::QuestionNode::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Question has an empty name")]
    EmptyName,

    #[error("Question name '{0}' is used more than once")]
    DuplicateName(String),
}
