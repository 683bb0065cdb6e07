//! # メッセージレスポンス
//!
//! 成功・失敗を問わず、人間向けのメッセージだけを返す API の
//! レスポンス形式 `{ "message": "..." }` を提供する。
//!
//! エラー時のステータスコード決定と `IntoResponse` 変換は API 層が行う。

use serde::{Deserialize, Serialize};

/// `{ "message": "..." }` 形式のレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
