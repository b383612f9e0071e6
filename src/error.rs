/// Errors returned by the game core. None of them are fatal and none
/// leave the session in a partially updated state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("cell {index} is already occupied")]
    CellOccupied { index: usize },

    #[error("game is already over")]
    GameOver,

    #[error("cell index {index} is out of range (board has {len} cells)")]
    OutOfRange { index: usize, len: usize },

    #[error("row {row}, column {col} is off the board")]
    OffBoard { row: usize, col: usize },

    #[error("no moves to undo")]
    EmptyHistory,
}

impl GameError {
    /// Whether this error is a rejected placement, as opposed to an empty undo.
    pub fn is_illegal_move(&self) -> bool {
        !matches!(self, GameError::EmptyHistory)
    }
}
