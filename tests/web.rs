#![cfg(target_arch = "wasm32")]

use gomoku::wasm::GomokuGame;
use js_sys::Reflect;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

fn field(value: &JsValue, name: &str) -> JsValue {
    Reflect::get(value, &JsValue::from_str(name)).unwrap()
}

#[wasm_bindgen_test]
fn snapshot_starts_empty_with_x_to_move() {
    let game = GomokuGame::new();
    let snapshot = game.snapshot().unwrap();

    assert_eq!(field(&snapshot, "currentPlayer").as_string().as_deref(), Some("X"));
    assert_eq!(field(&snapshot, "gameOver").as_bool(), Some(false));
    assert!(field(&snapshot, "winner").is_null());

    let board = js_sys::Array::from(&field(&snapshot, "board"));
    assert_eq!(board.length() as usize, GomokuGame::grid_size() * GomokuGame::grid_size());
    assert!(board.get(0).is_null());
}

#[wasm_bindgen_test]
fn rejected_click_reports_reason() {
    let mut game = GomokuGame::new();
    game.attempt_move(5).unwrap();

    let reply = game.attempt_move(5).unwrap();

    assert_eq!(field(&reply, "accepted").as_bool(), Some(false));
    assert_eq!(field(&reply, "kind").as_string().as_deref(), Some("cellOccupied"));
    assert_eq!(
        field(&reply, "reason").as_string().as_deref(),
        Some("cell 5 is already occupied")
    );
}

#[wasm_bindgen_test]
fn off_board_click_is_rejected_by_kind() {
    let mut game = GomokuGame::new();

    let reply = game.attempt_move_at(0, GomokuGame::grid_size()).unwrap();

    assert_eq!(field(&reply, "accepted").as_bool(), Some(false));
    assert_eq!(field(&reply, "kind").as_string().as_deref(), Some("offBoard"));
}

#[wasm_bindgen_test]
fn win_undo_and_reset_flow() {
    let mut game = GomokuGame::new();
    for col in 0..4 {
        game.attempt_move(col).unwrap();
        game.attempt_move(20 + col).unwrap();
    }

    let reply = game.attempt_move(4).unwrap();
    assert_eq!(field(&reply, "won").as_bool(), Some(true));

    let score = field(&game.snapshot().unwrap(), "score");
    assert_eq!(field(&score, "X").as_f64(), Some(1.0));

    assert!(game.undo());
    assert_eq!(field(&game.snapshot().unwrap(), "gameOver").as_bool(), Some(false));

    game.reset();
    assert!(!game.undo());
    let score = field(&game.snapshot().unwrap(), "score");
    assert_eq!(field(&score, "X").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
fn on_change_receives_snapshots() {
    let mut game = GomokuGame::new();
    let seen = js_sys::Array::new();
    let push = js_sys::Function::new_with_args("snapshot", "this.push(snapshot)").bind(&seen);
    game.on_change(push);

    game.attempt_move(0).unwrap();
    game.attempt_move(0).unwrap();
    game.reset();

    assert_eq!(seen.length(), 2);
}
