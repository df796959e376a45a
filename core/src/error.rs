use alloc::string::String;
use thiserror::Error;

use crate::CategoryId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("Trivia service unreachable: {0}")]
    Unreachable(String),
    #[error("Trivia service answered with status {0}")]
    Status(u16),
    #[error("Could not decode trivia service response: {0}")]
    Decode(String),
    #[error("Category {0} has no clues")]
    EmptyCategory(CategoryId),
    #[error("Category {0} has no title")]
    MissingTitle(CategoryId),
    #[error("Only {found} usable categories available, {needed} required")]
    NotEnoughCategories { found: usize, needed: usize },
    #[error("Board needs exactly {expected} categories, got {actual}")]
    InvalidBoardShape { expected: usize, actual: usize },
}

impl TriviaError {
    /// Transport or HTTP status failures, the only errors worth retrying.
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Unreachable(_) | Self::Status(_))
    }

    /// Service data that can't be turned into a category.
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::Decode(_) | Self::EmptyCategory(_) | Self::MissingTitle(_)
        )
    }
}

pub type Result<T> = core::result::Result<T, TriviaError>;
