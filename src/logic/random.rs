// src/logic/random.rs
//! ランダム系のユーティリティ関数をまとめたモジュールだよ！🎲
//!
//! どの関数も乱数生成器 (`rng`) を引数で受け取るようにしてる。
//! 本番では `thread_rng()`、テストでは `StdRng::seed_from_u64` を渡せば OK！
//! `shuffle` 以外は呼び出し側のスライスを書き換えないよ。

use log::warn;
use rand::seq::SliceRandom;
use rand::Rng;
use thiserror::Error;

/// サンプリング系の関数が返すエラーだよ。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// 空っぽの `items` から選ぼうとした。
    #[error("cannot choose from an empty sequence")]
    EmptyInput,
    /// `n` がマイナス。数えられない！
    #[error("received negative `n = {n}`; a count cannot be negative")]
    NegativeCount { n: isize },
    /// 重複なしサンプリングで `n` が `items` の数を超えた。
    #[error("received `n = {n}`; must not exceed {len} (the number of items)")]
    CountExceedsLength { n: isize, len: usize },
}

impl SampleError {
    /// 引数の範囲エラー (JS でいう RangeError 系) かどうか。
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::NegativeCount { .. } | Self::CountExceedsLength { .. })
    }
}

/// `from` 以上 `to` 未満のランダムな浮動小数点数。
///
/// `from == to` なら常に `from` が返るよ。逆向きの範囲は正規化しない。
pub fn float<R: Rng + ?Sized>(rng: &mut R, from: f64, to: f64) -> f64 {
    let range = to - from;
    rng.gen::<f64>() * range + from
}

/// `from` 以上 `to` 未満のランダムな整数。`float` の結果を切り捨てるだけ！
pub fn integer<R: Rng + ?Sized>(rng: &mut R, from: i64, to: i64) -> i64 {
    float(rng, from as f64, to as f64).floor() as i64
}

/// `items` からランダムに1個選ぶよ。
///
/// 空なら `SampleError::EmptyInput`。範囲外アクセスにはならないように
/// インデックスは最後の要素でクランプしておく。
pub fn choice<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Result<&'a T, SampleError> {
    if items.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    let last = items.len() - 1;
    let idx = (integer(rng, 0, items.len() as i64).max(0) as usize).min(last);
    Ok(&items[idx])
}

/// `items` を **その場で** シャッフルして、同じスライスを返すよ (Fisher–Yates)。
///
/// 要素数が 0 や 1 なら何もしない。
pub fn shuffle<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a mut [T]) -> &'a mut [T] {
    items.shuffle(rng);
    items
}

/// `items` から **重複なし** で `n` 個選ぶよ (非復元抽出)。
///
/// コピーをシャッフルして先頭 `n` 個を返すだけのシンプル実装。
/// 元の `items` はいじらない！
pub fn sample<R: Rng + ?Sized, T: Clone>(
    rng: &mut R,
    items: &[T],
    n: isize,
) -> Result<Vec<T>, SampleError> {
    if n < 0 {
        return Err(SampleError::NegativeCount { n });
    }
    let count = n as usize;
    if count > items.len() {
        return Err(SampleError::CountExceedsLength { n, len: items.len() });
    }
    if let Some(degenerate) = degenerate_result(rng, items, count) {
        return Ok(degenerate);
    }

    let mut copy = items.to_vec();
    shuffle(rng, &mut copy);
    copy.truncate(count);
    Ok(copy)
}

/// `items` から **重複ありで** `n` 個選ぶよ (復元抽出)。
///
/// 中身は `choice` を `n` 回呼んでるだけ。
/// `n == items.len()` のときはシャッフルしたコピーを返す (`sample` と挙動をそろえてる)。
pub fn choices<R: Rng + ?Sized, T: Clone>(
    rng: &mut R,
    items: &[T],
    n: isize,
) -> Result<Vec<T>, SampleError> {
    if n < 0 {
        return Err(SampleError::NegativeCount { n });
    }
    let count = n as usize;
    if let Some(degenerate) = degenerate_result(rng, items, count) {
        return Ok(degenerate);
    }

    (0..count)
        .map(|_| choice(rng, items).cloned())
        .collect()
}

/// `n == 0` と `n == items.len()` の「意味の薄い呼び出し」を処理するよ。
/// エラーにはしないけど warn ログは出す。
fn degenerate_result<R: Rng + ?Sized, T: Clone>(
    rng: &mut R,
    items: &[T],
    count: usize,
) -> Option<Vec<T>> {
    if count == items.len() {
        warn!("Given `items` already has `n = {}` items; just shuffle instead?", count);
        let mut copy = items.to_vec();
        shuffle(rng, &mut copy);
        return Some(copy);
    }
    if count == 0 {
        warn!("Sampling `n = 0` items; getting nothing?");
        return Some(Vec::new());
    }
    None
}
