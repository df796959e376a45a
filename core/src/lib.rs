#![no_std]

extern crate alloc;

pub use board::*;
pub use category::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use service::*;
pub use session::*;
pub use types::*;

mod board;
mod category;
mod clue;
mod error;
mod loader;
mod service;
mod session;
mod types;

/// Number of categories (columns) on every board.
pub const CATEGORY_COUNT: usize = 6;

/// Number of clue rows rendered per category.
pub const CLUES_PER_CATEGORY: usize = 5;

/// Grid size as `(columns, rows)`.
pub const BOARD_SIZE: Coord2 = (CATEGORY_COUNT as Coord, CLUES_PER_CATEGORY as Coord);

/// Text shown in a clue cell before it is revealed.
pub const PLACEHOLDER: &str = "?";
