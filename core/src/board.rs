use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// The six categories of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.len() != CATEGORY_COUNT {
            return Err(TriviaError::InvalidBoardShape {
                expected: CATEGORY_COUNT,
                actual: categories.len(),
            });
        }
        Ok(Self { categories })
    }

    pub const fn size(&self) -> Coord2 {
        BOARD_SIZE
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::title)
    }

    pub fn clue_at(&self, coords: Coord2) -> Option<&Clue> {
        let (x, y) = coords.to_index();
        self.categories.get(x)?.clue(y)
    }

    fn clue_at_mut(&mut self, coords: Coord2) -> Option<&mut Clue> {
        let (x, y) = coords.to_index();
        self.categories.get_mut(x)?.clue_mut(y)
    }

    pub fn state_at(&self, coords: Coord2) -> Option<RevealState> {
        self.clue_at(coords).map(Clue::state)
    }

    /// Text for the cell at `coords`, the placeholder when nothing resolves.
    pub fn cell_text(&self, coords: Coord2) -> &str {
        self.clue_at(coords).map_or(PLACEHOLDER, Clue::display_text)
    }

    /// Advances the clue under `coords`; coordinates off the board do nothing.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        let Some(clue) = self.clue_at_mut(coords) else {
            log::trace!("no clue at {:?}", coords);
            return RevealOutcome::NoChange;
        };
        clue.advance()
    }
}
