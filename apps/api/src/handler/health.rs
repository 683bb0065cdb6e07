//! # ヘルスチェックハンドラ
//!
//! ロードバランサーやコンテナオーケストレーターからの死活確認に使う。
//! ドキュメントストアへの疎通は確認しない。
//!
//! ```text
//! GET /health
//! ```

use axum::Json;
use todolist_shared::HealthResponse;

/// ヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
