//! # Todolist 共有ユーティリティ
//!
//! このクレートは、Todolist
//! プロジェクト全体で使用される共通ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（`IntoResponse` 変換は API 層の責務）
//! - トレーシング初期化は `observability` フィーチャーでのみ有効化する

pub mod api_response;
pub mod health;
pub mod message_response;
pub mod observability;

pub use api_response::ApiResponse;
pub use health::HealthResponse;
pub use message_response::MessageResponse;
