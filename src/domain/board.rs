//! The generation-stepping engine.
//!
//! A board keeps two equally sized grids, `current` and `previous`, and swaps
//! them on every step. Only coordinates in the interest set (live cells of
//! the previous generation and their Moore neighbours) are evaluated; every
//! other cell of the new generation stays dead.

use std::collections::HashSet;
use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use super::bounding_box::BoundingBox;
use super::cell::Cell;
use super::coordinate::Coordinate;
use super::matrix::CellMatrix;
use super::registry::RuleRegistry;
use super::rules::RuleSet;
use crate::error::Result;

/// Emitted after a dynamic board added rows or columns.
/// Each delta is 0 or 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthEvent {
    /// Height after growing
    pub rows: usize,
    /// Width after growing
    pub cols: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

/// Callback registered through [`Board::on_growth`]
pub type GrowthObserver = Box<dyn FnMut(&GrowthEvent) + Send>;

/// Board owns both generations, the active rule set and the counters.
pub struct Board {
    rows: usize,
    cols: usize,
    current: Vec<Cell>,
    previous: Vec<Cell>,
    rule_set: RuleSet,
    /// Grow at the edges instead of wrapping around them
    dynamic: bool,
    generation: u64,
    alive: usize,
    observers: Vec<GrowthObserver>,
}

/// Read-only view of the previous generation used while evaluating a step.
/// Shared by the sequential path and by every concurrent worker.
pub(super) struct StepContext<'a> {
    pub(super) previous: &'a [Cell],
    pub(super) rows: usize,
    pub(super) cols: usize,
    pub(super) wrap: bool,
    pub(super) rule_set: &'a RuleSet,
}

impl StepContext<'_> {
    /// Count live neighbours of `coord` in the previous generation
    #[inline]
    pub(super) fn live_neighbours(&self, coord: Coordinate) -> u8 {
        coord
            .neighbours(self.rows, self.cols, self.wrap)
            .filter(|n| self.previous[n.row * self.cols + n.col].is_alive())
            .count() as u8
    }

    /// Next state of `coord` under the active rule set
    #[inline]
    pub(super) fn next_state(&self, coord: Coordinate) -> bool {
        let alive = self.previous[coord.row * self.cols + coord.col].is_alive();
        self.rule_set.evaluate(alive, self.live_neighbours(coord))
    }
}

/// Live cells of `grid` plus their neighbours, deduplicated.
fn collect_interest(grid: &[Cell], rows: usize, cols: usize, wrap: bool) -> HashSet<Coordinate> {
    let mut interest = HashSet::new();
    for (index, _) in grid.iter().enumerate().filter(|(_, cell)| cell.is_alive()) {
        let coord = Coordinate::new(index / cols, index % cols);
        interest.insert(coord);
        interest.extend(coord.neighbours(rows, cols, wrap));
    }
    interest
}

/// Copy `grid` into a larger all-dead grid, shifted by the given offsets.
fn regrid(
    grid: &[Cell],
    cols: usize,
    new_rows: usize,
    new_cols: usize,
    row_offset: usize,
    col_offset: usize,
) -> Vec<Cell> {
    let mut out = vec![Cell::DEAD; new_rows * new_cols];
    for (r, row) in grid.chunks_exact(cols).enumerate() {
        let start = (r + row_offset) * new_cols + col_offset;
        out[start..start + cols].copy_from_slice(row);
    }
    out
}

impl Board {
    /// Create a wrapping (toroidal) board with all cells dead.
    /// Zero dimensions are raised to one.
    pub fn new(rows: usize, cols: usize, rule_set: RuleSet) -> Self {
        let rows = rows.max(1);
        let cols = cols.max(1);
        info!(rows, cols, rule = %rule_set, "creating board");
        Self {
            rows,
            cols,
            current: vec![Cell::DEAD; rows * cols],
            previous: vec![Cell::DEAD; rows * cols],
            rule_set,
            dynamic: false,
            generation: 0,
            alive: 0,
            observers: Vec::new(),
        }
    }

    /// Create a non-wrapping board that grows at its edges
    pub fn dynamic(rows: usize, cols: usize, rule_set: RuleSet) -> Self {
        Self::new(rows, cols, rule_set).with_dynamic(true)
    }

    /// Switch growth mode (builder pattern)
    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub const fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Steps taken since creation or the last [`Board::clear`]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Live cells in the current generation
    pub const fn alive_count(&self) -> usize {
        self.alive
    }

    pub fn rule_set(&self) -> &RuleSet {
        &self.rule_set
    }

    /// Replace the active rule set. Only call between steps.
    pub fn set_rule_set(&mut self, rule_set: RuleSet) {
        info!(from = %self.rule_set, to = %rule_set, "changing rule set");
        self.rule_set = rule_set;
    }

    /// Replace the active rule set by registry name
    pub fn set_rule_set_by_name(&mut self, registry: &RuleRegistry, name: &str) -> Result<()> {
        let rule_set = registry.get(name)?.clone();
        self.set_rule_set(rule_set);
        Ok(())
    }

    /// Register a callback run after each growth, on the stepping thread
    pub fn on_growth(&mut self, observer: impl FnMut(&GrowthEvent) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    #[inline]
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at `(row, col)`; outside the board reads as dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols && self.current[self.index(row, col)].is_alive()
    }

    /// Set a single cell in both generations. Writes outside the board are ignored.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row >= self.rows || col >= self.cols {
            return;
        }
        let idx = self.index(row, col);
        let was_alive = self.current[idx].is_alive();
        self.current[idx].set_alive(alive);
        self.previous[idx].set_alive(alive);
        match (was_alive, alive) {
            (false, true) => self.alive += 1,
            (true, false) => self.alive -= 1,
            _ => {}
        }
    }

    /// Flip a single cell
    pub fn toggle(&mut self, row: usize, col: usize) {
        let alive = self.get(row, col);
        self.set(row, col, !alive);
    }

    /// Current generation as row-major booleans
    pub fn cells(&self) -> impl Iterator<Item = bool> + '_ {
        self.current.iter().map(|cell| cell.is_alive())
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let cols = self.cols;
        self.current
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell.is_alive()))
    }

    /// Full copy of the current generation
    pub fn snapshot(&self) -> CellMatrix {
        let mut matrix = CellMatrix::new(self.rows, self.cols);
        for (row, col, alive) in self.iter_cells().filter(|&(_, _, alive)| alive) {
            matrix.set(row, col, alive);
        }
        matrix
    }

    /// Kill every cell and reset both counters
    pub fn clear(&mut self) {
        self.current.fill(Cell::DEAD);
        self.previous.fill(Cell::DEAD);
        self.generation = 0;
        self.alive = 0;
    }

    /// Fill the board at random, each cell alive with probability `density`
    pub fn randomize<R: Rng>(&mut self, density: f64, rng: &mut R) {
        let density = density.clamp(0.0, 1.0);
        for (current, previous) in self.current.iter_mut().zip(self.previous.iter_mut()) {
            let alive = rng.random_bool(density);
            current.set_alive(alive);
            previous.set_alive(alive);
        }
        self.alive = self.count_alive();
    }

    fn count_alive(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates the next step will evaluate
    pub fn interest_set(&self) -> HashSet<Coordinate> {
        collect_interest(&self.current, self.rows, self.cols, !self.dynamic)
    }

    /// Live neighbours of `(row, col)` in the current generation
    pub fn live_neighbours(&self, row: usize, col: usize) -> u8 {
        self.step_context_over(&self.current)
            .live_neighbours(Coordinate::new(row, col))
    }

    fn step_context_over<'a>(&'a self, grid: &'a [Cell]) -> StepContext<'a> {
        StepContext {
            previous: grid,
            rows: self.rows,
            cols: self.cols,
            wrap: !self.dynamic,
            rule_set: &self.rule_set,
        }
    }

    /// Swap generations, clear the new one and return what must be evaluated.
    pub(super) fn begin_step(&mut self) -> HashSet<Coordinate> {
        std::mem::swap(&mut self.current, &mut self.previous);
        self.current.fill(Cell::DEAD);
        collect_interest(&self.previous, self.rows, self.cols, !self.dynamic)
    }

    /// Split borrows for a step: the read-only context and the grid to write
    pub(super) fn step_parts(&mut self) -> (StepContext<'_>, &mut [Cell]) {
        let ctx = StepContext {
            previous: &self.previous,
            rows: self.rows,
            cols: self.cols,
            wrap: !self.dynamic,
            rule_set: &self.rule_set,
        };
        (ctx, self.current.as_mut_slice())
    }

    /// Record the counters of a finished step and grow if needed
    pub(super) fn finish_step(&mut self, alive: usize, evaluated: usize) {
        self.alive = alive;
        self.generation += 1;
        debug!(
            generation = self.generation,
            alive = self.alive,
            evaluated,
            "generation complete"
        );
        if self.dynamic {
            self.grow_if_needed();
        }
    }

    /// Advance one generation on the calling thread
    pub fn next_generation(&mut self) {
        let interest = self.begin_step();
        let (ctx, current) = self.step_parts();
        let cols = ctx.cols;
        let mut alive = 0;
        for &coord in &interest {
            if ctx.next_state(coord) {
                current[coord.row * cols + coord.col].resurrect();
                alive += 1;
            }
        }
        self.finish_step(alive, interest.len());
    }

    /// Advance `n` generations sequentially
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.next_generation();
        }
    }

    /// Add one dead row/column on every edge holding a live cell.
    /// Returns the growth that happened, after notifying observers.
    pub fn grow_if_needed(&mut self) -> Option<GrowthEvent> {
        let (rows, cols) = (self.rows, self.cols);
        let row_alive = |r: usize| {
            self.current[r * cols..(r + 1) * cols]
                .iter()
                .any(|c| c.is_alive())
        };
        let col_alive = |c: usize| (0..rows).any(|r| self.current[r * cols + c].is_alive());

        let top = row_alive(0) as usize;
        let bottom = row_alive(rows - 1) as usize;
        let left = col_alive(0) as usize;
        let right = col_alive(cols - 1) as usize;
        if top + bottom + left + right == 0 {
            return None;
        }

        self.resize_to(rows + top + bottom, cols + left + right, top, left);
        let event = GrowthEvent {
            rows: self.rows,
            cols: self.cols,
            top,
            right,
            bottom,
            left,
        };
        info!(
            rows = event.rows,
            cols = event.cols,
            top, right, bottom, left,
            "board grew"
        );
        for observer in &mut self.observers {
            observer(&event);
        }
        Some(event)
    }

    /// Reallocate both grids, keeping content at the given offset
    fn resize_to(&mut self, rows: usize, cols: usize, row_offset: usize, col_offset: usize) {
        self.current = regrid(&self.current, self.cols, rows, cols, row_offset, col_offset);
        self.previous = regrid(&self.previous, self.cols, rows, cols, row_offset, col_offset);
        self.rows = rows;
        self.cols = cols;
    }

    /// Place `pattern` in the centre of the board.
    ///
    /// An axis too short for the pattern is doubled until it fits. The
    /// pattern is written to both generations so the first step sees correct
    /// neighbour counts. Dynamic boards run the growth check afterwards.
    pub fn insert_pattern(&mut self, pattern: &CellMatrix) {
        if pattern.is_empty() {
            return;
        }
        let (mut rows, mut cols) = (self.rows, self.cols);
        while pattern.rows() > rows {
            rows *= 2;
        }
        while pattern.cols() > cols {
            cols *= 2;
        }
        if (rows, cols) != (self.rows, self.cols) {
            debug!(rows, cols, "doubling board to fit pattern");
            self.resize_to(rows, cols, 0, 0);
        }

        let origin_row = self.rows / 2 - pattern.rows() / 2;
        let origin_col = self.cols / 2 - pattern.cols() / 2;
        for (r, row) in pattern.iter_rows().enumerate() {
            for (c, &alive) in row.iter().enumerate() {
                let idx = self.index(origin_row + r, origin_col + c);
                self.current[idx].set_alive(alive);
                self.previous[idx].set_alive(alive);
            }
        }
        self.alive = self.count_alive();
        info!(
            pattern_rows = pattern.rows(),
            pattern_cols = pattern.cols(),
            origin_row,
            origin_col,
            alive = self.alive,
            "inserted pattern"
        );

        if self.dynamic {
            self.grow_if_needed();
        }
    }

    /// Minimal rectangle around the live cells of the current generation
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::enclosing(self.iter_cells())
    }

    /// Live content trimmed to its bounding box; empty boards give an empty matrix
    pub fn extract_pattern(&self) -> CellMatrix {
        let bb = self.bounding_box();
        if bb.is_empty() {
            return CellMatrix::empty();
        }
        let mut out = CellMatrix::new(bb.height(), bb.width());
        for r in 0..bb.height() {
            for c in 0..bb.width() {
                out.set(r, c, self.get(bb.first_row + r, bb.first_col + c));
            }
        }
        out
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("rule_set", &self.rule_set.rule_string())
            .field("dynamic", &self.dynamic)
            .field("generation", &self.generation)
            .field("alive", &self.alive)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn matrix(rows: &[&[u8]]) -> CellMatrix {
        CellMatrix::from_rows(rows).unwrap()
    }

    fn glider() -> CellMatrix {
        matrix(&[&[0, 1, 0], &[0, 0, 1], &[1, 1, 1]])
    }

    fn recorder(board: &mut Board) -> Arc<Mutex<Vec<GrowthEvent>>> {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        board.on_growth(move |event| sink.lock().unwrap().push(*event));
        events
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(10, 20, RuleSet::conway());
        assert_eq!(board.dimensions(), (10, 20));
        assert_eq!(board.alive_count(), 0);
        assert_eq!(board.generation(), 0);
        assert!(!board.is_dynamic());
        assert_eq!(board.cells().count(), 200);
        assert!(board.extract_pattern().is_empty());
    }

    #[test]
    fn test_zero_dimensions_are_raised() {
        let board = Board::new(0, 0, RuleSet::conway());
        assert_eq!(board.dimensions(), (1, 1));
    }

    #[test]
    fn test_isolated_cell_dies() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.set(5, 5, true);
        assert_eq!(board.alive_count(), 1);

        board.next_generation();
        assert_eq!(board.alive_count(), 0);
        assert!(!board.get(5, 5));
        assert_eq!(board.generation(), 1);
    }

    #[test]
    fn test_block_still_life() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        let block = matrix(&[&[1, 1], &[1, 1]]);
        board.insert_pattern(&block);
        let before = board.snapshot();

        for _ in 0..50 {
            board.next_generation();
            assert_eq!(board.snapshot(), before);
            assert_eq!(board.alive_count(), 4);
        }
        assert_eq!(board.generation(), 50);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.set(5, 4, true);
        board.set(5, 5, true);
        board.set(5, 6, true);

        board.next_generation();
        assert!(board.get(4, 5) && board.get(5, 5) && board.get(6, 5));
        assert!(!board.get(5, 4) && !board.get(5, 6));
        assert_eq!(board.alive_count(), 3);

        board.next_generation();
        assert!(board.get(5, 4) && board.get(5, 5) && board.get(5, 6));
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut board = Board::new(12, 12, RuleSet::conway());
        board.insert_pattern(&glider());
        let start = board.bounding_box();

        board.advance(4);

        let moved = board.bounding_box();
        assert_eq!(moved.first_row, start.first_row + 1);
        assert_eq!(moved.first_col, start.first_col + 1);
        assert_eq!(board.extract_pattern(), glider());
        assert_eq!(board.alive_count(), 5);
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let mut board = Board::new(8, 8, RuleSet::conway());
        board.insert_pattern(&glider());
        let start = board.snapshot();

        // A glider needs 4 * 8 generations to cross an 8x8 torus
        board.advance(32);

        assert_eq!(board.snapshot(), start);
        assert_eq!(board.alive_count(), 5);
    }

    #[test]
    fn test_bounded_edges_do_not_wrap() {
        // Same blinker on the left edge: wraps on a torus, clipped on a dynamic board
        let mut torus = Board::new(5, 5, RuleSet::conway());
        for r in 1..=3 {
            torus.set(r, 0, true);
        }
        torus.next_generation();
        assert!(torus.get(2, 4));

        let mut dynamic = Board::dynamic(5, 5, RuleSet::conway());
        for r in 1..=3 {
            dynamic.set(r, 0, true);
        }
        dynamic.next_generation();
        // Left column was alive after the step, so one column was prepended
        assert_eq!(dynamic.dimensions(), (5, 6));
        assert_eq!(dynamic.alive_count(), 2);
        assert!(dynamic.get(2, 1) && dynamic.get(2, 2));
    }

    #[test]
    fn test_interest_set_covers_live_cells_and_neighbours() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.set(5, 5, true);
        let interest = board.interest_set();
        assert_eq!(interest.len(), 9);
        assert!(interest.contains(&Coordinate::new(4, 4)));
        assert!(interest.contains(&Coordinate::new(6, 6)));

        board.set(5, 6, true);
        assert_eq!(board.interest_set().len(), 12);
    }

    #[test]
    fn test_interest_set_wraps_on_torus_only() {
        let mut torus = Board::new(5, 5, RuleSet::conway());
        torus.set(0, 0, true);
        assert!(torus.interest_set().contains(&Coordinate::new(4, 4)));

        let mut dynamic = Board::dynamic(5, 5, RuleSet::conway());
        dynamic.set(2, 2, true);
        dynamic.set(0, 0, true);
        let interest = dynamic.interest_set();
        assert!(!interest.contains(&Coordinate::new(4, 4)));
        assert_eq!(interest.len(), 12);
    }

    #[test]
    fn test_live_neighbours() {
        let mut board = Board::new(5, 5, RuleSet::conway());
        board.set(1, 1, true);
        board.set(1, 2, true);
        board.set(2, 1, true);
        assert_eq!(board.live_neighbours(2, 2), 3);
        assert_eq!(board.live_neighbours(1, 1), 2);
        // (0, 0) sees (1, 1) directly and nothing across the wrap
        assert_eq!(board.live_neighbours(0, 0), 1);
    }

    #[test]
    fn test_highlife_replicator_differs_from_conway() {
        // Birth on 6 neighbours is the only difference between the two rules
        let pattern = matrix(&[&[1, 1, 1], &[1, 0, 1], &[1, 0, 0]]);
        let mut conway = Board::new(9, 9, RuleSet::conway());
        let mut highlife = Board::new(9, 9, RuleSet::high_life());
        conway.insert_pattern(&pattern);
        highlife.insert_pattern(&pattern);

        conway.next_generation();
        highlife.next_generation();
        assert!(!conway.get(4, 4));
        assert!(highlife.get(4, 4));
    }

    #[test]
    fn test_set_rule_set_by_name() {
        let registry = RuleRegistry::with_builtins();
        let mut board = Board::new(5, 5, RuleSet::conway());
        board.set_rule_set_by_name(&registry, "highlife").unwrap();
        assert_eq!(board.rule_set(), &RuleSet::high_life());
        assert!(board.set_rule_set_by_name(&registry, "missing").is_err());
        assert_eq!(board.rule_set(), &RuleSet::high_life());
    }

    #[test]
    fn test_insert_centers_pattern() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.insert_pattern(&glider());
        // origin = (10/2 - 3/2, 10/2 - 3/2) = (4, 4)
        assert!(board.get(4, 5));
        assert!(board.get(5, 6));
        assert!(board.get(6, 4) && board.get(6, 5) && board.get(6, 6));
        assert_eq!(board.alive_count(), 5);
        // Both generations hold the pattern
        assert_eq!(board.interest_set(), collect_interest(&board.previous, 10, 10, true));
    }

    #[test]
    fn test_insert_doubles_short_axes() {
        let mut board = Board::new(4, 4, RuleSet::conway());
        let mut wide = CellMatrix::new(5, 9);
        wide.set(0, 0, true);
        wide.set(4, 8, true);

        board.insert_pattern(&wide);

        assert_eq!(board.dimensions(), (8, 16));
        // origin = (8/2 - 5/2, 16/2 - 9/2) = (2, 4)
        assert!(board.get(2, 4));
        assert!(board.get(6, 12));
        assert_eq!(board.alive_count(), 2);
    }

    #[test]
    fn test_insert_empty_pattern_is_noop() {
        let mut board = Board::new(4, 4, RuleSet::conway());
        board.insert_pattern(&CellMatrix::empty());
        assert_eq!(board.dimensions(), (4, 4));
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn test_extract_pattern_trims_to_bounding_box() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.set(2, 3, true);
        board.set(4, 6, true);
        let bb = board.bounding_box();
        assert_eq!(
            bb,
            BoundingBox { first_row: 2, first_col: 3, last_row: 4, last_col: 6 }
        );
        let extracted = board.extract_pattern();
        assert_eq!((extracted.rows(), extracted.cols()), (3, 4));
        assert!(extracted.get(0, 0));
        assert!(extracted.get(2, 3));
        assert_eq!(extracted.count_alive(), 2);
    }

    #[test]
    fn test_clear_resets_counters() {
        let mut board = Board::new(10, 10, RuleSet::conway());
        board.insert_pattern(&glider());
        board.advance(3);
        board.clear();
        assert_eq!(board.generation(), 0);
        assert_eq!(board.alive_count(), 0);
        assert!(board.cells().all(|alive| !alive));

        // Ready again after clearing
        board.insert_pattern(&glider());
        board.next_generation();
        assert_eq!(board.generation(), 1);
        assert_eq!(board.alive_count(), 5);
    }

    #[test]
    fn test_set_and_toggle_track_alive_count() {
        let mut board = Board::new(3, 3, RuleSet::conway());
        board.set(1, 1, true);
        board.set(1, 1, true);
        assert_eq!(board.alive_count(), 1);
        board.toggle(1, 1);
        assert_eq!(board.alive_count(), 0);
        board.set(9, 9, true);
        assert_eq!(board.alive_count(), 0);
    }

    #[test]
    fn test_insertion_growth_adds_one_per_edge() {
        let mut board = Board::dynamic(3, 3, RuleSet::conway());
        let events = recorder(&mut board);
        // Whole left column alive, plus top and bottom touched
        board.insert_pattern(&matrix(&[&[1, 0, 0], &[1, 0, 0], &[1, 0, 0]]));

        assert_eq!(board.dimensions(), (5, 4));
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![GrowthEvent { rows: 5, cols: 4, top: 1, right: 0, bottom: 1, left: 1 }]
        );
        assert!(board.get(1, 1) && board.get(2, 1) && board.get(3, 1));
    }

    #[test]
    fn test_step_growth_adds_one_per_offending_step() {
        let mut board = Board::dynamic(3, 3, RuleSet::conway());
        let events = recorder(&mut board);
        board.insert_pattern(&matrix(&[&[0, 1, 0], &[0, 1, 0], &[0, 1, 0]]));
        assert_eq!(board.dimensions(), (5, 3));

        // Vertical blinker turns horizontal and touches left and right
        board.next_generation();
        assert_eq!(board.dimensions(), (5, 5));
        assert_eq!(board.alive_count(), 3);

        // Back to vertical, well inside: no growth
        board.next_generation();
        assert_eq!(board.dimensions(), (5, 5));

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[1],
            GrowthEvent { rows: 5, cols: 5, top: 0, right: 1, bottom: 0, left: 1 }
        );
    }

    #[test]
    fn test_dynamic_glider_keeps_shape_and_grows() {
        let mut board = Board::dynamic(5, 5, RuleSet::conway());
        board.insert_pattern(&glider());
        for _ in 0..40 {
            board.next_generation();
            assert_eq!(board.alive_count(), 5);
        }
        assert_eq!(board.extract_pattern(), glider());
        // Glider travels down-right, so the board keeps growing that way
        assert!(board.rows() > 5 && board.cols() > 5);
    }

    #[test]
    fn test_non_dynamic_board_never_grows() {
        let mut board = Board::new(3, 3, RuleSet::conway());
        let events = recorder(&mut board);
        board.insert_pattern(&matrix(&[&[1, 1, 1], &[1, 0, 1], &[1, 1, 1]]));
        board.advance(5);
        assert_eq!(board.dimensions(), (3, 3));
        assert!(events.lock().unwrap().is_empty());
    }
}
