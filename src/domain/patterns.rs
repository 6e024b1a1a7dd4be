use super::matrix::CellMatrix;

/// A named seed pattern from the built-in library
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>,  // (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// The pattern as a rectangular 0/1 matrix, ready for `Board::insert_pattern`
    pub fn matrix(&self) -> CellMatrix {
        let mut matrix = CellMatrix::new(self.rows, self.cols);
        for &(r, c) in &self.cells {
            matrix.set(r, c, true);
        }
        matrix
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1), (0, 2),
            ]
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ]
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ]
        )
    }

    /// Pulsar - period 3 oscillator
    pub fn pulsar() -> Pattern {
        Pattern::new(
            "Pulsar",
            "Oscillator (period 3)",
            vec![
                // Top
                (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
                // Upper middle
                (2, 0), (2, 5), (2, 7), (2, 12),
                (3, 0), (3, 5), (3, 7), (3, 12),
                (4, 0), (4, 5), (4, 7), (4, 12),
                // Center
                (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
                (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
                // Lower middle
                (8, 0), (8, 5), (8, 7), (8, 12),
                (9, 0), (9, 5), (9, 7), (9, 12),
                (10, 0), (10, 5), (10, 7), (10, 12),
                // Bottom
                (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
            ]
        )
    }

    /// Lightweight Spaceship (LWSS)
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1), (0, 4),
                (1, 0),
                (2, 0), (2, 4),
                (3, 0), (3, 1), (3, 2), (3, 3),
            ]
        )
    }

    /// Gosper Glider Gun - produces gliders indefinitely
    pub fn glider_gun() -> Pattern {
        Pattern::new(
            "Gosper Glider Gun",
            "Produces gliders (period 30)",
            vec![
                // Left square
                (4, 0), (5, 0),
                (4, 1), (5, 1),

                // Left circle
                (4, 10), (5, 10), (6, 10),
                (3, 11), (7, 11),
                (2, 12), (8, 12),
                (2, 13), (8, 13),
                (5, 14),
                (3, 15), (7, 15),
                (4, 16), (5, 16), (6, 16),
                (5, 17),

                // Middle pieces
                (2, 20), (3, 20), (4, 20),
                (2, 21), (3, 21), (4, 21),
                (1, 22), (5, 22),
                (0, 24), (1, 24), (5, 24), (6, 24),

                // Right square
                (2, 34), (3, 34),
                (2, 35), (3, 35),
            ]
        )
    }

    /// R-pentomino - classic methuselah (stabilizes after 1103 generations)
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah - stabilizes at gen 1103",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ]
        )
    }

    /// Acorn - small methuselah that stabilizes after 5206 generations
    pub fn acorn() -> Pattern {
        Pattern::new(
            "Acorn",
            "Methuselah - stabilizes at gen 5206",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ]
        )
    }

    /// Look a preset up by name, ignoring case
    pub fn find(name: &str) -> Option<Pattern> {
        let name = name.trim();
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            pulsar(),
            lwss(),
            glider_gun(),
            r_pentomino(),
            acorn(),
            block(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, RuleSet};

    #[test]
    fn test_glider_matrix() {
        let glider = presets::glider().matrix();
        assert_eq!(glider.to_rows(), vec![vec![0, 1, 0], vec![0, 0, 1], vec![1, 1, 1]]);
    }

    #[test]
    fn test_names_are_unique() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
        assert_eq!(names.len(), 10);
    }

    #[test]
    fn test_matrices_are_tight() {
        for pattern in presets::all_patterns() {
            let matrix = pattern.matrix();
            assert_eq!(matrix.trimmed(), matrix, "{} has blank margins", pattern.name);
            assert_eq!(matrix.count_alive(), pattern.cells.len());
        }
    }

    #[test]
    fn test_find_ignores_case() {
        assert_eq!(presets::find("lwss").unwrap().name, "LWSS");
        assert_eq!(presets::find(" Glider ").unwrap().rows, 3);
        assert!(presets::find("unicorn").is_none());
    }

    #[test]
    fn test_oscillator_periods() {
        for (pattern, period) in [
            (presets::blinker(), 2),
            (presets::toad(), 2),
            (presets::beacon(), 2),
            (presets::pulsar(), 3),
        ] {
            let mut board = Board::new(32, 32, RuleSet::conway());
            board.insert_pattern(&pattern.matrix());
            let start = board.snapshot();
            board.advance(1);
            assert_ne!(board.snapshot(), start, "{} did not move", pattern.name);
            board.advance(period - 1);
            assert_eq!(board.snapshot(), start, "{} period mismatch", pattern.name);
        }
    }

    #[test]
    fn test_lwss_keeps_shape() {
        let lwss = presets::lwss().matrix();
        let mut board = Board::new(16, 32, RuleSet::conway());
        board.insert_pattern(&lwss);
        board.advance(4);
        assert_eq!(board.extract_pattern(), lwss);
    }
}
