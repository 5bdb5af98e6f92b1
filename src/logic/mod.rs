// src/logic/mod.rs
//! UI に依存しない純粋なゲームロジックだよ！

pub mod random;
pub mod session;

#[cfg(test)]
mod session_tests;

pub use random::SampleError;
pub use session::{CharacterId, GameSession, Outcome};
