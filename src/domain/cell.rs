/// Binary life state: the single bit of truth a cell carries.
/// Equality is by aliveness only.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum State {
    #[default]
    Dead,
    Alive,
}

impl State {
    /// Check if the state is alive
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, State::Alive)
    }

    /// Overwrite the state in place
    #[inline]
    pub fn set(&mut self, alive: bool) {
        *self = State::from(alive);
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { State::Alive } else { State::Dead }
    }
}

/// Cell is the fundamental unit of a board.
/// It owns exactly one `State` for its whole lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[repr(transparent)]
pub struct Cell {
    state: State,
}

impl Cell {
    pub const DEAD: Cell = Cell { state: State::Dead };
    pub const ALIVE: Cell = Cell { state: State::Alive };

    pub const fn new(state: State) -> Self {
        Self { state }
    }

    /// Check if the cell is currently alive
    #[inline]
    pub const fn is_alive(self) -> bool {
        self.state.is_alive()
    }

    pub const fn state(self) -> State {
        self.state
    }

    #[inline]
    pub fn kill(&mut self) {
        self.state = State::Dead;
    }

    #[inline]
    pub fn resurrect(&mut self) {
        self.state = State::Alive;
    }

    /// Set aliveness directly (used when copying patterns in)
    #[inline]
    pub fn set_alive(&mut self, alive: bool) {
        self.state.set(alive);
    }

    /// Flip the cell between dead and alive
    pub fn toggle(&mut self) {
        let alive = self.is_alive();
        self.set_alive(!alive);
    }
}
