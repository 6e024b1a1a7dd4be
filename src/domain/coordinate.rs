/// Immutable (row, column) position on a board.
/// Used as the key of the interest set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

/// Offsets of the Moore neighbourhood, row-major, centre excluded.
#[rustfmt::skip]
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Neighbours of this coordinate on a `rows x cols` grid.
    ///
    /// With `wrap` the grid is a torus and every cell has eight neighbours
    /// (some may coincide on grids narrower than three cells). Without it,
    /// positions outside the grid are omitted.
    pub fn neighbours(
        self,
        rows: usize,
        cols: usize,
        wrap: bool,
    ) -> impl Iterator<Item = Coordinate> {
        MOORE_OFFSETS
            .into_iter()
            .filter_map(move |(dr, dc)| {
                let row = offset(self.row, dr, rows, wrap)?;
                let col = offset(self.col, dc, cols, wrap)?;
                Some(Coordinate { row, col })
            })
    }
}

/// Move `index` by `delta` inside `0..len`, wrapping or bailing out at the edges.
#[inline]
fn offset(index: usize, delta: isize, len: usize, wrap: bool) -> Option<usize> {
    if len == 0 {
        return None;
    }
    match (delta, wrap) {
        (0, _) => Some(index),
        (-1, true) => Some(if index == 0 { len - 1 } else { index - 1 }),
        (1, true) => Some(if index + 1 == len { 0 } else { index + 1 }),
        (-1, false) => index.checked_sub(1),
        (1, false) => (index + 1 < len).then_some(index + 1),
        _ => unreachable!("Moore offsets are within -1..=1"),
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
