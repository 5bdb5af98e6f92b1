// src/app/sampling_exports.rs
//! JS の UI から直接呼べるサンプリング関数たち。ID の配列 (Uint32Array) を扱うよ。

use rand::thread_rng;
use wasm_bindgen::prelude::*;

use crate::logic::random::{self, SampleError};

/// 範囲エラーは JS の RangeError、それ以外は普通の Error にする。
fn to_js_error(e: SampleError) -> JsValue {
    let message = e.to_string();
    if e.is_range_error() {
        js_sys::RangeError::new(&message).into()
    } else {
        js_sys::Error::new(&message).into()
    }
}

#[wasm_bindgen]
pub fn random_float(from: f64, to: f64) -> f64 {
    random::float(&mut thread_rng(), from, to)
}

#[wasm_bindgen]
pub fn random_integer(from: i32, to: i32) -> i32 {
    random::integer(&mut thread_rng(), from as i64, to as i64) as i32
}

#[wasm_bindgen]
pub fn choice_id(ids: Vec<u32>) -> Result<u32, JsValue> {
    random::choice(&mut thread_rng(), &ids).copied().map_err(to_js_error)
}

/// シャッフルした配列を返す (JS 側の配列はコピーで渡ってくる)。
#[wasm_bindgen]
pub fn shuffle_ids(mut ids: Vec<u32>) -> Vec<u32> {
    random::shuffle(&mut thread_rng(), &mut ids);
    ids
}

#[wasm_bindgen]
pub fn sample_ids(ids: Vec<u32>, n: i32) -> Result<Vec<u32>, JsValue> {
    random::sample(&mut thread_rng(), &ids, n as isize).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn choices_ids(ids: Vec<u32>, n: i32) -> Result<Vec<u32>, JsValue> {
    random::choices(&mut thread_rng(), &ids, n as isize).map_err(to_js_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn exports_wrap_the_sampling_library() {
        let x = random_float(1.0, 2.0);
        assert!((1.0..2.0).contains(&x));

        let i = random_integer(-5, 5);
        assert!((-5..5).contains(&i));

        let ids = vec![10, 20, 30, 40];
        assert!(ids.contains(&choice_id(ids.clone()).unwrap()));

        let shuffled = shuffle_ids(ids.clone());
        assert_eq!(shuffled.iter().copied().sorted().collect::<Vec<_>>(), ids);

        let sampled = sample_ids(ids.clone(), 2).unwrap();
        assert_eq!(sampled.len(), 2);
        assert!(sampled.iter().all_unique());

        let chosen = choices_ids(ids.clone(), 9).unwrap();
        assert_eq!(chosen.len(), 9);
        assert!(chosen.iter().all(|c| ids.contains(c)));
    }

    // JsValue を作るので wasm でしか動かせない
    #[cfg(target_arch = "wasm32")]
    mod wasm {
        use super::super::*;
        use wasm_bindgen::JsCast;
        use wasm_bindgen_test::*;

        #[wasm_bindgen_test]
        fn range_errors_become_js_range_errors() {
            let too_many = sample_ids(vec![1], 2).unwrap_err();
            assert!(too_many.dyn_into::<js_sys::RangeError>().is_ok());

            let negative = choices_ids(vec![1, 2], -1).unwrap_err();
            assert!(negative.is_instance_of::<js_sys::RangeError>());

            let empty = choice_id(Vec::new()).unwrap_err();
            assert!(!empty.is_instance_of::<js_sys::RangeError>(), "空の配列は RangeError じゃない");
            assert!(empty.is_instance_of::<js_sys::Error>());
        }
    }
}
