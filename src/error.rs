//! List Errors
//!
//! Error taxonomy for list mutations.

use crate::models::ItemId;

/// Common result type for list operations
pub type ListResult<T> = Result<T, ListError>;

/// Errors produced by list mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListError {
    /// Submitted text was empty or whitespace only
    BlankText,
    /// No item with this id is in the list
    NotFound(ItemId),
}

impl std::fmt::Display for ListError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListError::BlankText => write!(f, "Invalid input: item text is blank"),
            ListError::NotFound(id) => write!(f, "Not found: item {}", id),
        }
    }
}

impl std::error::Error for ListError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ListError::BlankText.to_string(), "Invalid input: item text is blank");
        assert_eq!(ListError::NotFound(ItemId(4)).to_string(), "Not found: item #4");
    }
}
