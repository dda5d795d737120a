// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod render;
pub mod repos;
pub mod time;

// 時刻関連
pub use time::{FixedClock, SteppingClock, fixed_now};

// レンダラー
pub use render::FailingRenderer;

// リポジトリ関連
pub use repos::{FailingPublisher, FailingSubmissionStore};
