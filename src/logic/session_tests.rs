// src/logic/session_tests.rs
// GameSession のユニットテスト！

use super::session::*;
use wasm_bindgen_test::*;

#[wasm_bindgen_test(unsupported = test)]
fn test_new_session_is_ongoing_and_empty() {
    let session = GameSession::new();
    assert_eq!(session.state(), Outcome::Ongoing);
    assert_eq!(session.seen_count(), 0);
    assert!(session.seen_ids().is_empty());
}

#[wasm_bindgen_test(unsupported = test)]
fn test_accept_twice_loses() {
    let mut session = GameSession::new();
    session.accept(5);
    assert_eq!(session.state(), Outcome::Ongoing, "1回目は見たことないのでセーフ");
    session.accept(5);
    assert_eq!(session.state(), Outcome::Lost, "2回目の accept は負けのはず");
    assert_eq!(session.seen_count(), 1, "重複して覚えちゃダメ");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_reject_unseen_loses() {
    let mut session = GameSession::new();
    session.reject(7);
    assert_eq!(session.state(), Outcome::Lost);
    assert!(!session.has_seen(7));
}

#[wasm_bindgen_test(unsupported = test)]
fn test_reject_seen_is_a_no_op() {
    let mut session = GameSession::new();
    session.accept(1);
    session.accept(2);
    session.reject(1);
    assert_eq!(session.state(), Outcome::Ongoing);
    assert_eq!(session.seen_ids(), vec![1, 2]);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_reset_clears_membership() {
    let mut session = GameSession::new();
    session.accept(5);
    session.accept(5);
    assert_eq!(session.state(), Outcome::Lost);

    session.reset();
    assert_eq!(session.state(), Outcome::Ongoing);
    assert_eq!(session.seen_count(), 0);

    session.accept(5);
    assert_eq!(session.state(), Outcome::Ongoing, "reset 後の accept(5) で負けちゃダメ");

    // 何回呼んでも同じ
    session.reset();
    session.reset();
    assert_eq!(session.state(), Outcome::Ongoing);
    assert_eq!(session.seen_count(), 0);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_lost_session_is_frozen() {
    let mut session = GameSession::new();
    session.accept(3);
    session.reject(4);
    assert_eq!(session.state(), Outcome::Lost);

    session.accept(10);
    session.reject(3);
    session.declare_won();
    assert_eq!(session.state(), Outcome::Lost);
    assert_eq!(session.seen_ids(), vec![3], "負けた後は ID も増えない");
}

#[wasm_bindgen_test(unsupported = test)]
fn test_declare_won_is_terminal() {
    let mut session = GameSession::new();
    session.accept(1);
    session.declare_won();
    assert_eq!(session.state(), Outcome::Won);

    session.accept(1);
    session.reject(99);
    assert_eq!(session.state(), Outcome::Won, "勝った後は accept/reject で変わらない");

    session.reset();
    assert_eq!(session.state(), Outcome::Ongoing);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_accept_and_reject_never_win() {
    let mut session = GameSession::new();
    for id in 0..100 {
        session.accept(id);
    }
    for id in 0..100 {
        session.reject(id);
    }
    assert_eq!(session.state(), Outcome::Ongoing);
    assert_eq!(session.seen_count(), 100);
}

#[wasm_bindgen_test(unsupported = test)]
fn test_outcome_strings_and_serde() {
    assert_eq!(Outcome::Ongoing.as_str(), "ongoing");
    assert_eq!(Outcome::Won.as_str(), "won");
    assert_eq!(Outcome::Lost.as_str(), "lost");
    assert!(!Outcome::Ongoing.is_terminal());
    assert!(Outcome::Won.is_terminal() && Outcome::Lost.is_terminal());

    let json = serde_json::to_string(&Outcome::Lost).unwrap();
    assert_eq!(json, "\"lost\"");
    println!("Outcome テスト、成功！🎉");
}
