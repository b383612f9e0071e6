use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod history;
pub mod types;
pub mod wasm;
pub mod win;

pub use error::GameError;
pub use game::{GameSession, SessionObserver};

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}
