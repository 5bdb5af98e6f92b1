// src/config/api.rs
//! Jikan API まわりの定数だよ！

pub const JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4"; // Jikan v4 のベース URL
pub const RANDOM_CHARACTER_PATH: &str = "/random/characters"; // ランダムなキャラ1体
pub const CHARACTER_PATH: &str = "/characters"; // `/characters/{id}`

/// 「前回と違うキャラ」を引き直す最大回数。
pub const DEFAULT_MAX_FETCH_ATTEMPTS: u32 = 5;

pub const DEFAULT_LOG_LEVEL: &str = "info";
