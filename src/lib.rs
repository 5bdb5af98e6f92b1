// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

pub mod app;
pub mod config;
pub mod logger;
pub mod logic;
pub mod network;
pub mod protocol;

pub use app::character_feed::{CharacterFeed, FeedError};
pub use app::game_app::GameApp;
pub use config::{AppConfig, ConfigError};
pub use logic::{random, CharacterId, GameSession, Outcome, SampleError};
pub use network::{CharacterSource, JikanClient, NetworkError};
pub use protocol::{Character, SessionView};

// Wasm がロードされた時に最初に実行される関数だよ。
// パニックを console に出すフックと、log クレートの出力先を設定する。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    log::info!("animemo: wasm module loaded");
}
