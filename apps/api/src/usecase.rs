//! # ユースケース層
//!
//! Todo API のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時刻を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは薄く保ち、検証とストア呼び出しはユースケースに集約
//! - **リトライしない**: ストアのエラーはそのリクエストの失敗として返す

pub mod todo;

pub use todo::TodoUseCaseImpl;
