// src/app/game_app.rs

use std::sync::Arc;

use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::app::character_feed::CharacterFeed;
use crate::config::AppConfig;
use crate::logic::session::{CharacterId, GameSession};
use crate::network::JikanClient;
use crate::protocol::SessionView;

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
// JS の UI ルートがひとつ作って持ち続ける。セッションは捨てずに reset で使い回す。
#[wasm_bindgen]
pub struct GameApp {
    session: GameSession,
    feed: Arc<CharacterFeed<JikanClient>>,
    config: AppConfig,
}

#[wasm_bindgen]
impl GameApp {
    /// `config_json` は省略可。例: `{"max_fetch_attempts": 3, "log_level": "debug"}`
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<GameApp, JsValue> {
        let config = AppConfig::from_json(config_json.as_deref())?;
        log::set_max_level(config.level_filter()?);

        let client = JikanClient::from_config(&config);
        let feed = Arc::new(CharacterFeed::new(client, config.max_fetch_attempts));
        info!(
            "GameApp: initialized (api: {}, max_fetch_attempts: {})",
            config.base_url(),
            config.max_fetch_attempts
        );
        Ok(Self { session: GameSession::new(), feed, config })
    }

    /// 「見たことない！」ボタン
    pub fn accept(&mut self, id: CharacterId) {
        self.session.accept(id);
    }

    /// 「見たことある！」ボタン
    pub fn reject(&mut self, id: CharacterId) {
        self.session.reject(id);
    }

    /// 勝ち判定は UI 側が決めて、ここで知らせてもらう。
    pub fn declare_won(&mut self) {
        self.session.declare_won();
    }

    /// 新しいゲームを始める。先読みしたカードや枚数カウントも捨てる。
    pub fn reset(&mut self) {
        self.session.reset();
        self.feed.reset();
    }

    /// `"ongoing" | "won" | "lost"`
    pub fn state(&self) -> String {
        self.session.state().as_str().to_string()
    }

    pub fn card_count(&self) -> u32 {
        self.feed.served()
    }

    pub fn session_json(&self) -> Result<String, JsValue> {
        let view = SessionView::new(&self.session, self.feed.served());
        serde_json::to_string(&view).map_err(|e| JsValue::from_str(&format!("Failed to serialize session: {}", e)))
    }

    pub fn api_base_url(&self) -> String {
        self.config.base_url().to_string()
    }

    /// 次のカードのキャラを JSON 文字列で resolve する Promise を返すよ。
    pub fn next_character(&self) -> js_sys::Promise {
        let feed = Arc::clone(&self.feed);
        future_to_promise(async move {
            let character = feed.next().await?;
            let json = serde_json::to_string(&character)
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize character: {}", e)))?;
            Ok::<JsValue, JsValue>(JsValue::from_str(&json))
        })
    }

    /// ID 指定でキャラを JSON 文字列で resolve する。カード枚数や「前回」には数えない。
    pub fn character_by_id(&self, id: CharacterId) -> js_sys::Promise {
        let feed = Arc::clone(&self.feed);
        future_to_promise(async move {
            let character = feed.lookup(id).await?;
            let json = serde_json::to_string(&character)
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize character: {}", e)))?;
            Ok::<JsValue, JsValue>(JsValue::from_str(&json))
        })
    }

    /// 次のカードを裏で先読みしておく。resolve 値は undefined。
    pub fn prefetch(&self) -> js_sys::Promise {
        let feed = Arc::clone(&self.feed);
        future_to_promise(async move {
            feed.prefetch().await?;
            Ok::<JsValue, JsValue>(JsValue::UNDEFINED)
        })
    }
}
