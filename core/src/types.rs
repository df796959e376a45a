/// Single coordinate axis used for board columns and rows.
pub type Coord = u8;

/// Two-dimensional cell coordinates `(x, y)`, that is `(category, clue)`.
pub type Coord2 = (Coord, Coord);

/// Identifier of a category on the trivia service.
pub type CategoryId = u64;

pub trait ToIndex {
    type Output;
    fn to_index(self) -> Self::Output;
}

impl ToIndex for Coord2 {
    type Output = (usize, usize);

    fn to_index(self) -> Self::Output {
        (self.0.into(), self.1.into())
    }
}

/// Iterates every cell of a grid row by row, `(0, 0), (1, 0), ..., (0, 1), ...`.
pub fn iter_cells((cols, rows): Coord2) -> impl Iterator<Item = Coord2> {
    (0..rows).flat_map(move |y| (0..cols).map(move |x| (x, y)))
}
