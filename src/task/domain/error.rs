//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing validated task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskValidationError {
    /// The title is empty.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The title exceeds the character limit.
    #[error("task title has {length} characters, the limit is {max}")]
    TitleTooLong {
        /// Character count of the rejected title.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },

    /// The description exceeds the character limit.
    #[error("task description has {length} characters, the limit is {max}")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
        /// Maximum permitted character count.
        max: usize,
    },
}

/// Error returned while parsing task priorities from persistence or input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
