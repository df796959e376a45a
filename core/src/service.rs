use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Entry of the service's category listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub id: CategoryId,
    #[serde(default)]
    pub title: Option<String>,
}

/// Category metadata embedded in every clue record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueCategory {
    #[serde(default)]
    pub title: Option<String>,
}

/// One clue as returned by the service's clue listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueRecord {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub category: Option<ClueCategory>,
}

/// Remote source of categories and clues.
#[allow(async_fn_in_trait)]
pub trait TriviaService {
    /// Lists up to `count` categories.
    async fn categories(&self, count: u16) -> Result<Vec<CategorySummary>>;

    /// Lists every clue of one category.
    async fn clues(&self, category: CategoryId) -> Result<Vec<ClueRecord>>;
}
