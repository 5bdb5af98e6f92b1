// src/app/character_feed.rs
//! 次に見せるキャラを用意する係だよ！
//!
//! - 前回と同じキャラが来たら引き直す (最大 `max_attempts` 回まで)
//! - 1枚先読み (prefetch) しておける
//!
//! 内部状態のロックは `.await` をまたいで持たない。
//! 通信中に `reset` されたら、その結果は新しいゲームに書き込まない (`generation` で判定)。

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::logic::session::CharacterId;
use crate::network::{CharacterSource, NetworkError};
use crate::protocol::Character;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Network(#[from] NetworkError),
    #[error("no character different from the previous one after {attempts} attempts")]
    NoDistinctCharacter { attempts: u32 },
    #[error("the game was reset while the character was being fetched")]
    Superseded,
}

impl From<FeedError> for JsValue {
    fn from(e: FeedError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

#[derive(Debug, Default)]
struct FeedState {
    previous_id: Option<CharacterId>,
    prefetched: Option<Character>,
    served: u32,
    /// `reset` のたびに +1。
    generation: u64,
}

pub struct CharacterFeed<S> {
    source: S,
    max_attempts: u32,
    state: Mutex<FeedState>,
}

impl<S: CharacterSource> CharacterFeed<S> {
    pub fn new(source: S, max_attempts: u32) -> Self {
        Self {
            source,
            max_attempts: max_attempts.max(1),
            state: Mutex::new(FeedState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// このゲームで見せたカードの枚数。
    pub fn served(&self) -> u32 {
        self.state().served
    }

    pub fn previous_id(&self) -> Option<CharacterId> {
        self.state().previous_id
    }

    /// `previous` と違う ID のキャラが来るまで引く。
    ///
    /// 通信エラーはその場で返す。全部同じキャラだったら `NoDistinctCharacter`。
    pub async fn fetch_distinct(&self, previous: Option<CharacterId>) -> Result<Character, FeedError> {
        for attempt in 1..=self.max_attempts {
            let character = self.source.random_character().await?;
            if Some(character.mal_id) != previous {
                return Ok(character);
            }
            debug!(
                "CharacterFeed: attempt {}/{} returned previous character {}",
                attempt, self.max_attempts, character.mal_id
            );
        }
        warn!("CharacterFeed: gave up after {} attempts", self.max_attempts);
        Err(FeedError::NoDistinctCharacter { attempts: self.max_attempts })
    }

    /// 次のカード。先読みがあって前回と違えばそれを使う。
    ///
    /// 取ってくる間に `reset` されたら `FeedError::Superseded` を返して、状態には触らない。
    pub async fn next(&self) -> Result<Character, FeedError> {
        let (generation, previous, cached) = {
            let mut state = self.state();
            (state.generation, state.previous_id, state.prefetched.take())
        };

        let character = match cached {
            Some(c) if Some(c.mal_id) != previous => c,
            Some(stale) => {
                debug!("CharacterFeed: dropping stale prefetched character {}", stale.mal_id);
                self.fetch_distinct(previous).await?
            }
            None => self.fetch_distinct(previous).await?,
        };

        let mut state = self.state();
        if state.generation != generation {
            debug!("CharacterFeed: discarding {} fetched before reset", character.mal_id);
            return Err(FeedError::Superseded);
        }
        state.previous_id = Some(character.mal_id);
        state.served += 1;
        info!("CharacterFeed: serving card #{} ({})", state.served, character.mal_id);
        Ok(character)
    }

    /// 今のカードと違うキャラを1枚先読みしておく。
    /// 途中で `reset` されたら黙って捨てる。
    pub async fn prefetch(&self) -> Result<(), FeedError> {
        let (generation, previous) = {
            let state = self.state();
            (state.generation, state.previous_id)
        };
        let character = self.fetch_distinct(previous).await?;

        let mut state = self.state();
        if state.generation != generation {
            debug!("CharacterFeed: discarding prefetched {} from before reset", character.mal_id);
            return Ok(());
        }
        debug!("CharacterFeed: prefetched {}", character.mal_id);
        state.prefetched = Some(character);
        Ok(())
    }

    /// ID 指定でキャラを引く。フィードの状態 (前回・枚数・先読み) には触らない。
    pub async fn lookup(&self, id: CharacterId) -> Result<Character, FeedError> {
        Ok(self.source.character_by_id(id).await?)
    }

    /// 新しいゲーム用にまっさらにする。
    pub fn reset(&self) {
        let mut state = self.state();
        let generation = state.generation.wrapping_add(1);
        *state = FeedState { generation, ..FeedState::default() };
    }
}
