use thiserror::Error;

/// Internal failures of the field controller.
///
/// None of these reach the owning screen: the formatter degrades to an empty
/// string and the edit handler turns them into a rejected edit.
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("failed to compile phone pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("edit range {start}..{end} is outside text of {len} characters")]
    InvalidRange { start: usize, end: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, FieldError>;
