use log::{debug, warn};
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::board::GRID_SIZE;
use crate::config::RuleConfig;
use crate::error::GameError;
use crate::game::{GameSession, SessionObserver};
use crate::types::{MoveOutcome, Snapshot};

/// Machine-readable rejection kind, so the page can branch without parsing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RejectionKind {
    CellOccupied,
    GameOver,
    OutOfRange,
    OffBoard,
    EmptyHistory,
}

impl From<&GameError> for RejectionKind {
    fn from(err: &GameError) -> Self {
        match err {
            GameError::CellOccupied { .. } => RejectionKind::CellOccupied,
            GameError::GameOver => RejectionKind::GameOver,
            GameError::OutOfRange { .. } => RejectionKind::OutOfRange,
            GameError::OffBoard { .. } => RejectionKind::OffBoard,
            GameError::EmptyHistory => RejectionKind::EmptyHistory,
        }
    }
}

/// Result of a click on the board, as seen by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveReply {
    pub accepted: bool,
    pub won: bool,
    /// Contract:
    /// - `None` when `accepted` is `true`.
    /// - Set together with `reason` otherwise.
    pub kind: Option<RejectionKind>,
    pub reason: Option<String>,
}

impl From<Result<MoveOutcome, GameError>> for MoveReply {
    fn from(result: Result<MoveOutcome, GameError>) -> Self {
        match result {
            Ok(outcome) => Self {
                accepted: true,
                won: matches!(outcome, MoveOutcome::Won { .. }),
                kind: None,
                reason: None,
            },
            Err(err) => Self {
                accepted: false,
                won: false,
                kind: Some(RejectionKind::from(&err)),
                reason: Some(err.to_string()),
            },
        }
    }
}

/// Page-facing wrapper around one [`GameSession`].
#[wasm_bindgen]
pub struct GomokuGame {
    session: GameSession,
}

#[wasm_bindgen]
impl GomokuGame {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    /// Session that lets runs wrap across row edges like the original page.
    #[wasm_bindgen(js_name = withWrapping)]
    pub fn with_wrapping() -> Self {
        Self {
            session: GameSession::with_config(RuleConfig::wrapping()),
        }
    }

    #[wasm_bindgen(js_name = gridSize)]
    pub fn grid_size() -> usize {
        GRID_SIZE
    }

    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, index: usize) -> Result<JsValue, JsValue> {
        to_js(&MoveReply::from(self.session.attempt_move(index)))
    }

    #[wasm_bindgen(js_name = attemptMoveAt)]
    pub fn attempt_move_at(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        to_js(&MoveReply::from(self.session.attempt_move_at(row, col)))
    }

    /// Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.session.undo() {
            Ok(_) => true,
            Err(err) => {
                debug!("undo ignored: {err}");
                false
            }
        }
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        to_js(&self.session.snapshot())
    }

    /// Registers `callback` to receive the serialized snapshot after every change.
    #[wasm_bindgen(js_name = onChange)]
    pub fn on_change(&mut self, callback: js_sys::Function) {
        self.session.subscribe(Box::new(JsCallback { callback }));
    }
}

impl Default for GomokuGame {
    fn default() -> Self {
        Self::new()
    }
}

struct JsCallback {
    callback: js_sys::Function,
}

impl SessionObserver for JsCallback {
    fn on_change(&mut self, snapshot: &Snapshot) {
        let result = to_js(snapshot).and_then(|value| self.callback.call1(&JsValue::NULL, &value));
        if let Err(err) = result {
            warn!("change callback failed: {err:?}");
        }
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_missing_as_null(true);
    value.serialize(&serializer).map_err(JsValue::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    fn reply(result: Result<MoveOutcome, GameError>) -> MoveReply {
        MoveReply::from(result)
    }

    #[test]
    fn reply_reflects_outcome() {
        let won = reply(Ok(MoveOutcome::Won { winner: Player::O }));
        assert!(won.accepted && won.won);
        assert_eq!(won.kind, None);
        assert_eq!(won.reason, None);

        let rejected = reply(Err(GameError::CellOccupied { index: 3 }));
        assert!(!rejected.accepted);
        assert_eq!(rejected.kind, Some(RejectionKind::CellOccupied));
        assert_eq!(rejected.reason.as_deref(), Some("cell 3 is already occupied"));
    }

    #[test]
    fn rejection_kinds_serialize_in_camel_case() {
        let game_over = reply(Err(GameError::GameOver));
        let off_board = reply(Err(GameError::OffBoard { row: 0, col: 20 }));

        let json = serde_json::to_value(&game_over).unwrap();
        assert_eq!(json["kind"], "gameOver");
        assert_eq!(json["accepted"], false);
        assert_eq!(serde_json::to_value(&off_board).unwrap()["kind"], "offBoard");
        assert_eq!(serde_json::to_value(RejectionKind::OutOfRange).unwrap(), "outOfRange");
    }
}
