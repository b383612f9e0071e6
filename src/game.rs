use log::{debug, info};

use crate::board::Board;
use crate::config::RuleConfig;
use crate::error::GameError;
use crate::history::MoveHistory;
use crate::types::{GameStatus, Move, MoveOutcome, Player, Score, Snapshot};
use crate::win;

/// Receives the new state after every successful transition.
pub trait SessionObserver {
    fn on_change(&mut self, snapshot: &Snapshot);
}

/// One two-player game plus the running score.
///
/// Owns all game state. Calls must be serialized by the owner; nothing here
/// is shared or reentrant.
pub struct GameSession {
    board: Board,
    history: MoveHistory,
    score: Score,
    current_player: Player,
    winner: Option<Player>,
    config: RuleConfig,
    observers: Vec<Box<dyn SessionObserver>>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_config(RuleConfig::default())
    }

    pub fn with_config(config: RuleConfig) -> Self {
        Self {
            board: Board::new(),
            history: MoveHistory::new(),
            score: Score::default(),
            current_player: Player::X,
            winner: None,
            config,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn SessionObserver>) {
        self.observers.push(observer);
    }

    /// Places a stone for the current player at `index`.
    ///
    /// On a win the score is incremented and the winner stays current;
    /// otherwise the turn passes to the opponent.
    pub fn attempt_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        if self.is_over() {
            debug!("rejected move at {index}: game is over");
            return Err(GameError::GameOver);
        }

        let player = self.current_player;
        if let Err(err) = self.board.place_at(index, player) {
            debug!("rejected move at {index}: {err}");
            return Err(err);
        }
        self.history.record(Move { index, player });

        let outcome = match win::find_run(&self.board, self.config.edge_policy) {
            Some(run) => {
                // Play stops at the first run, so any run on the board was just completed.
                info!("{player:?} wins with {:?} run {:?}", run.direction, run.cells);
                self.score.increment(player);
                self.winner = Some(player);
                MoveOutcome::Won { winner: player }
            }
            None => {
                self.current_player = player.opponent();
                debug!("{player:?} placed at {index}");
                MoveOutcome::Placed {
                    next: self.current_player,
                }
            }
        };

        self.notify();
        Ok(outcome)
    }

    /// Row/column variant of [`GameSession::attempt_move`].
    pub fn attempt_move_at(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let index = Board::index_of(row, col).ok_or(GameError::OffBoard { row, col })?;
        self.attempt_move(index)
    }

    /// Takes back the most recent move and hands the turn back to its player.
    ///
    /// Undoing a winning move reopens the game. The score is left as is.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let mv = self.history.undo().ok_or(GameError::EmptyHistory)?;
        self.board.clear_at(mv.index);
        self.current_player = mv.player;
        self.winner = None;
        debug!("undid {:?} at {}", mv.player, mv.index);

        self.notify();
        Ok(mv)
    }

    /// Clears the board and history and gives X the first move. The score survives.
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.current_player = Player::X;
        self.winner = None;
        debug!("session reset, score {:?}", self.score);

        self.notify();
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.cells().to_vec(),
            current_player: self.current_player,
            game_over: self.is_over(),
            score: self.score,
            winner: self.winner,
            last_move: self.history.last(),
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.is_over() {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn config(&self) -> RuleConfig {
        self.config
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
