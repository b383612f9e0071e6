use serde::{Serialize, Serializer};

/// One of the two sides. `X` always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of a single board square.
///
/// Serializes as `null` when empty and as the player name otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.player().serialize(serializer)
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// A single accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Move {
    pub index: usize,
    pub player: Player,
}

/// Win counts per player. Persists across resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Score {
    #[serde(rename = "X")]
    pub x: u32,
    #[serde(rename = "O")]
    pub o: u32,
}

impl Score {
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Successful result of a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The stone was placed and the turn passed to `next`.
    Placed { next: Player },
    /// The stone completed five in a row. `winner` stays current.
    Won { winner: Player },
}

/// Render-ready view of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub board: Vec<Cell>,
    pub current_player: Player,
    pub game_over: bool,
    pub score: Score,
    /// Contract:
    /// - `Some` only while `game_over` is `true`.
    /// - Cleared again when the winning move is undone.
    pub winner: Option<Player>,
    pub last_move: Option<Move>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn cells_serialize_as_nullable_player() {
        let cells = vec![Cell::Empty, Cell::Occupied(Player::X), Cell::Occupied(Player::O)];

        let json = serde_json::to_string(&cells).unwrap();

        assert_eq!(json, r#"[null,"X","O"]"#);
    }

    #[test]
    fn score_uses_player_keys() {
        let mut score = Score::default();
        score.increment(Player::O);
        score.increment(Player::O);

        assert_eq!(score.get(Player::O), 2);
        assert_eq!(score.get(Player::X), 0);
        assert_eq!(serde_json::to_string(&score).unwrap(), r#"{"X":0,"O":2}"#);
    }
}
