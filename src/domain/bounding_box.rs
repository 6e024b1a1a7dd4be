/// Minimal rectangle enclosing every live cell, with inclusive bounds.
///
/// A snapshot: it goes stale on the next mutation of the board it was
/// computed from. An empty box has `first > last` on both axes and must be
/// treated as a zero-size pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundingBox {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl BoundingBox {
    /// Box of a board with no live cells
    pub const EMPTY: BoundingBox = BoundingBox {
        first_row: 1,
        first_col: 1,
        last_row: 0,
        last_col: 0,
    };

    /// Scan row-major `(row, col, alive)` triples and keep the extremes of
    /// the live ones.
    pub fn enclosing(cells: impl IntoIterator<Item = (usize, usize, bool)>) -> Self {
        cells
            .into_iter()
            .filter(|&(_, _, alive)| alive)
            .fold(Self::EMPTY, |bb, (row, col, _)| bb.including(row, col))
    }

    /// Grow the box to cover `(row, col)`
    pub fn including(self, row: usize, col: usize) -> Self {
        if self.is_empty() {
            return Self {
                first_row: row,
                first_col: col,
                last_row: row,
                last_col: col,
            };
        }
        Self {
            first_row: self.first_row.min(row),
            first_col: self.first_col.min(col),
            last_row: self.last_row.max(row),
            last_col: self.last_col.max(col),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.first_row > self.last_row || self.first_col > self.last_col
    }

    pub const fn height(&self) -> usize {
        if self.is_empty() { 0 } else { self.last_row - self.first_row + 1 }
    }

    pub const fn width(&self) -> usize {
        if self.is_empty() { 0 } else { self.last_col - self.first_col + 1 }
    }

    pub const fn contains(&self, row: usize, col: usize) -> bool {
        !self.is_empty()
            && self.first_row <= row
            && row <= self.last_row
            && self.first_col <= col
            && col <= self.last_col
    }
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_box_is_degenerate() {
        let bb = BoundingBox::enclosing([(0, 0, false), (3, 3, false)]);
        assert!(bb.is_empty());
        assert!(bb.first_row >= bb.last_row && bb.first_col >= bb.last_col);
        assert_eq!((bb.height(), bb.width()), (0, 0));
        assert!(!bb.contains(0, 0));
    }

    #[test]
    fn test_single_cell() {
        let bb = BoundingBox::enclosing([(2, 5, true)]);
        assert_eq!(
            bb,
            BoundingBox { first_row: 2, first_col: 5, last_row: 2, last_col: 5 }
        );
        assert_eq!((bb.height(), bb.width()), (1, 1));
    }

    #[test]
    fn test_enclosing_tracks_extremes() {
        let bb = BoundingBox::enclosing([
            (1, 4, true),
            (0, 0, false),
            (3, 2, true),
            (2, 7, true),
            (9, 9, false),
        ]);
        assert_eq!(
            bb,
            BoundingBox { first_row: 1, first_col: 2, last_row: 3, last_col: 7 }
        );
        assert_eq!((bb.height(), bb.width()), (3, 6));
        assert!(bb.contains(2, 2));
        assert!(!bb.contains(0, 4));
    }
}
