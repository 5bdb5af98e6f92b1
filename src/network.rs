// src/network.rs

// このファイルは Jikan API との通信を担当するモジュールだよ！📡
// ブラウザの fetch API を `web_sys` 経由で呼んで、返ってきた Promise を
// `wasm_bindgen_futures::JsFuture` で await する。
use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::{api, AppConfig};
use crate::logic::session::CharacterId;
use crate::protocol::{Character, CharacterResponse};

/// 通信まわりのエラー。
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("request failed: {0}")]
    Network(String),
    #[error("not found: {url}")]
    NotFound { url: String },
    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
    #[error("response body was not text")]
    Body,
    #[error("failed to decode character JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<NetworkError> for JsValue {
    fn from(e: NetworkError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

/// JS 側で起きたエラー (Promise の reject とか) を NetworkError に包む。
fn js_error(value: JsValue) -> NetworkError {
    let message = value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value));
    NetworkError::Network(message)
}

/// HTTP ステータスを見て、失敗なら対応するエラーを返す。
pub fn check_status(status: u16, url: &str) -> Result<(), NetworkError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(NetworkError::NotFound { url: url.to_string() }),
        _ => Err(NetworkError::Status { status, url: url.to_string() }),
    }
}

/// 「ランダムなキャラを1体ちょうだい」ができるもの。
///
/// 本番は `JikanClient`、テストでは台本どおりに返すダミーを使うよ。
#[allow(async_fn_in_trait)]
pub trait CharacterSource {
    async fn random_character(&self) -> Result<Character, NetworkError>;

    /// ID を指定してキャラを取ってくる。存在しなければ `NetworkError::NotFound`。
    async fn character_by_id(&self, id: CharacterId) -> Result<Character, NetworkError>;
}

/// Jikan API のクライアント。中身はベース URL だけなので Clone は軽い。
#[derive(Debug, Clone)]
pub struct JikanClient {
    base_url: String,
}

impl JikanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.base_url())
    }

    pub fn random_character_url(&self) -> String {
        format!("{}{}", self.base_url, api::RANDOM_CHARACTER_PATH)
    }

    pub fn character_url(&self, id: CharacterId) -> String {
        format!("{}{}/{}", self.base_url, api::CHARACTER_PATH, id)
    }

    async fn get_character(&self, url: &str) -> Result<Character, NetworkError> {
        debug!("JikanClient: GET {}", url);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
        request.headers().set("Accept", "application/json").map_err(js_error)?;

        let window = web_sys::window().ok_or(NetworkError::NoWindow)?;
        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let response: Response = response_value.dyn_into().map_err(js_error)?;

        if let Err(e) = check_status(response.status(), url) {
            warn!("JikanClient: {}", e);
            return Err(e);
        }

        let body = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .ok_or(NetworkError::Body)?;
        let parsed: CharacterResponse = serde_json::from_str(&body)?;
        debug!("JikanClient: got character {} ({})", parsed.data.mal_id, parsed.data.name);
        Ok(parsed.data)
    }
}

impl CharacterSource for JikanClient {
    async fn random_character(&self) -> Result<Character, NetworkError> {
        self.get_character(&self.random_character_url()).await
    }

    async fn character_by_id(&self, id: CharacterId) -> Result<Character, NetworkError> {
        self.get_character(&self.character_url(id)).await
    }
}
