use std::fmt;

use crate::error::{LifeError, Result};

/// Rectangular, row-major matrix of live/dead flags.
///
/// This is the exchange format between pattern sources and the board.
/// It is rectangular by construction: ragged input is rejected when the
/// matrix is built, never when it is inserted.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct CellMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl CellMatrix {
    /// All-dead matrix of the given size
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Zero-size matrix (what an empty board extracts to)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from rows of 0/1 values. Any non-zero value counts as alive.
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<u8>,
    {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut cells = Vec::with_capacity(width * rows.len());
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width {
                return Err(LifeError::RaggedMatrix {
                    row: index,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row.iter().map(|&v| Into::<u8>::into(v) != 0));
        }
        // A matrix with rows but no columns has no cells at all
        let rows = if width == 0 { 0 } else { rows.len() };
        Ok(Self {
            rows,
            cols: width,
            cells,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell at `(row, col)`; out of range reads as dead
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.cells[row * self.cols + col]
    }

    /// Set a cell; writes outside the matrix are ignored
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = alive;
        }
    }

    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Rows as slices, top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks_exact panics on zero; an empty matrix has no rows anyway
        self.cells.chunks_exact(self.cols.max(1)).take(self.rows)
    }

    /// Rows as 0/1 vectors
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(|&alive| alive as u8).collect())
            .collect()
    }

    /// Copy of the inclusive sub-rectangle, renumbered from zero
    pub fn crop(
        &self,
        first_row: usize,
        first_col: usize,
        last_row: usize,
        last_col: usize,
    ) -> Self {
        if first_row > last_row || first_col > last_col {
            return Self::empty();
        }
        let mut out = Self::new(last_row - first_row + 1, last_col - first_col + 1);
        for r in 0..out.rows {
            for c in 0..out.cols {
                out.set(r, c, self.get(first_row + r, first_col + c));
            }
        }
        out
    }

    /// Minimal sub-matrix containing every live cell
    pub fn trimmed(&self) -> Self {
        let mut bounds: Option<(usize, usize, usize, usize)> = None;
        for (r, row) in self.iter_rows().enumerate() {
            for (c, _) in row.iter().enumerate().filter(|&(_, &alive)| alive) {
                bounds = Some(match bounds {
                    None => (r, c, r, c),
                    Some((r0, c0, r1, c1)) => (r0.min(r), c0.min(c), r1.max(r), c1.max(c)),
                });
            }
        }
        match bounds {
            Some((r0, c0, r1, c1)) => self.crop(r0, c0, r1, c1),
            None => Self::empty(),
        }
    }
}

impl fmt::Debug for CellMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMatrix {}x{}", self.rows, self.cols)?;
        for row in self.iter_rows() {
            let line: String = row.iter().map(|&a| if a { 'O' } else { '.' }).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
