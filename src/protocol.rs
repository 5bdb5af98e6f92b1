// src/protocol.rs

// Jikan API から返ってくる JSON と、JS 側に渡す JSON の形をここで定義するよ！💌
// 変換は全部 serde にお任せ。Jikan のレスポンスには他にもいっぱいフィールドがあるけど、
// 画面に出すぶんだけ拾って残りは無視する。
use serde::{Deserialize, Serialize};

use crate::logic::session::{CharacterId, GameSession, Outcome};

/// `/random/characters` や `/characters/{id}` のレスポンス。`data` に1体だけ入ってる。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterResponse {
    pub data: Character,
}

/// キャラクター1体ぶんの情報。カードに表示するのはこれ！🃏
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Character {
    /// MyAnimeList の ID。ゲームの「見た／見てない」判定はこれで行う。
    pub mal_id: CharacterId,
    pub url: String,
    pub name: String,
    #[serde(default)]
    pub name_kanji: Option<String>,
    pub images: CharacterImages,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CharacterImages {
    pub jpg: ImageSet,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ImageSet {
    pub image_url: String,
}

impl Character {
    pub fn image_url(&self) -> &str {
        &self.images.jpg.image_url
    }
}

/// JS 側に渡すセッションのスナップショット。
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SessionView {
    pub state: Outcome,
    pub seen_count: usize,
    pub seen_ids: Vec<CharacterId>,
    /// このゲームで表示したカードの枚数
    pub cards_shown: u32,
}

impl SessionView {
    pub fn new(session: &GameSession, cards_shown: u32) -> Self {
        Self {
            state: session.state(),
            seen_count: session.seen_count(),
            seen_ids: session.seen_ids(),
            cards_shown,
        }
    }
}
