// src/app/mod.rs
//! JS から呼ばれる入口 (GameApp とサンプリング関数) と、その裏方だよ！

pub mod character_feed;
pub mod game_app;
pub mod sampling_exports;
