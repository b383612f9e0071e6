use crate::config::EdgePolicy;
use crate::error::GameError;
use crate::types::{Cell, Player, Position};

pub const GRID_SIZE: usize = 20;
pub const NUM_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// The four scan directions. Each one only moves forward in index order,
/// so scanning from every occupied cell covers every line exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// Flat index offset of one step.
    pub fn offset(self) -> usize {
        match self {
            Direction::Horizontal => 1,
            Direction::Vertical => GRID_SIZE,
            Direction::DiagonalDownRight => GRID_SIZE + 1,
            Direction::DiagonalDownLeft => GRID_SIZE - 1,
        }
    }

    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// Gomoku board: a flat row-major list of `GRID_SIZE * GRID_SIZE` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: vec![Cell::Empty; NUM_CELLS],
        }
    }

    /// Occupies `index` for `player`.
    /// Fails without touching the board if the index is off the board or taken.
    pub fn place_at(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        let len = self.cells.len();
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(GameError::OutOfRange { index, len })?;

        if !cell.is_empty() {
            return Err(GameError::CellOccupied { index });
        }

        *cell = Cell::Occupied(player);
        Ok(())
    }

    /// Empties `index`. Out-of-range indices are ignored.
    pub fn clear_at(&mut self, index: usize) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = Cell::Empty;
        }
    }

    /// Returns the cell at `index`, treating anything past the end as empty.
    pub fn cell_at(&self, index: usize) -> Cell {
        self.cells.get(index).copied().unwrap_or(Cell::Empty)
    }

    /// Reallocates the board to `NUM_CELLS` empty cells.
    pub fn reset(&mut self) {
        self.cells = vec![Cell::Empty; NUM_CELLS];
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn has_no_stones(&self) -> bool {
        self.occupied_count() == 0
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Index of the next cell along `direction`, or `None` when the step
    /// leaves the board under `policy`.
    pub fn step(&self, index: usize, direction: Direction, policy: EdgePolicy) -> Option<usize> {
        match policy {
            EdgePolicy::Wrapping => {
                let next = index + direction.offset();
                (next < self.cells.len()).then_some(next)
            }
            EdgePolicy::Bounded => {
                if index >= self.cells.len() {
                    return None;
                }
                let Position { row, col } = Self::position_of(index);
                let (dr, dc) = direction.delta();
                let row = row.checked_add_signed(dr)?;
                let col = col.checked_add_signed(dc)?;
                Self::index_of(row, col)
            }
        }
    }

    /// Converts a coordinate to a flat index. Returns `None` off the board.
    pub fn index_of(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    pub fn position_of(index: usize) -> Position {
        Position {
            row: index / GRID_SIZE,
            col: index % GRID_SIZE,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
