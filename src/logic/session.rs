// src/logic/session.rs
//! 1ゲーム分の状態 (見たキャラの ID と勝敗) を管理するステートマシンだよ！🃏
//!
//! `accept` / `reject` はエラーを返さない。どんな入力も状態遷移として吸収する。
//! 勝ち (`Won`) にするのは外側から `declare_won` を呼んだときだけ。

use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// キャラクターの ID (Jikan の `mal_id`)。
pub type CharacterId = u32;

/// ゲームの勝敗を表す列挙型だよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// プレイ中
    #[default]
    Ongoing,
    /// 勝ち！🏆
    Won,
    /// 負け…
    Lost,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// 終了状態 (もう変化しない) かどうか。
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// ゲームセッション本体。
///
/// UI のルート (`GameApp`) がひとつ持って、`reset` で使い回すよ。
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    outcome: Outcome,
    seen_ids: HashSet<CharacterId>,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在の勝敗。
    pub fn state(&self) -> Outcome {
        self.outcome
    }

    /// 「見たことない！」として受け入れる。
    ///
    /// もう見たことある ID なら負け。そうでなければ ID を覚えてプレイ続行。
    pub fn accept(&mut self, id: CharacterId) {
        if self.is_frozen("accept", id) {
            return;
        }
        if self.seen_ids.contains(&id) {
            info!("GameSession: accepted {} twice -> lost", id);
            self.outcome = Outcome::Lost;
            return;
        }
        self.seen_ids.insert(id);
    }

    /// 「見たことある！」として弾く。
    ///
    /// まだ受け入れてない ID を弾いたら負け。見たことある ID なら何も起きない。
    pub fn reject(&mut self, id: CharacterId) {
        if self.is_frozen("reject", id) {
            return;
        }
        if !self.seen_ids.contains(&id) {
            info!("GameSession: rejected unseen {} -> lost", id);
            self.outcome = Outcome::Lost;
        }
    }

    /// 外からの「勝ち」シグナル。もう終わってるゲームには効かない。
    pub fn declare_won(&mut self) {
        if self.outcome.is_terminal() {
            debug!("GameSession: declare_won ignored, already {}", self.outcome.as_str());
            return;
        }
        info!("GameSession: won after {} accepted characters", self.seen_ids.len());
        self.outcome = Outcome::Won;
    }

    /// 見た ID を全部忘れて、プレイ中に戻す。何回呼んでも同じ。
    pub fn reset(&mut self) {
        self.seen_ids.clear();
        self.outcome = Outcome::Ongoing;
        info!("GameSession: reset");
    }

    pub fn has_seen(&self, id: CharacterId) -> bool {
        self.seen_ids.contains(&id)
    }

    pub fn seen_count(&self) -> usize {
        self.seen_ids.len()
    }

    /// 見た ID を昇順で返す (JSON スナップショット用)。
    pub fn seen_ids(&self) -> Vec<CharacterId> {
        self.seen_ids.iter().copied().sorted().collect()
    }

    fn is_frozen(&self, action: &str, id: CharacterId) -> bool {
        if self.outcome.is_terminal() {
            debug!(
                "GameSession: {}({}) ignored, session is {}",
                action,
                id,
                self.outcome.as_str()
            );
            return true;
        }
        false
    }
}
