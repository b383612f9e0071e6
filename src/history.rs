use crate::types::Move;

/// Append-only move log with single-level LIFO undo. There is no redo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Removes and returns the most recent move, or `None` when empty.
    pub fn undo(&mut self) -> Option<Move> {
        self.moves.pop()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn last(&self) -> Option<Move> {
        self.moves.last().copied()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves in the order they were played.
    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter()
    }
}
