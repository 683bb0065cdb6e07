//! # API エラー定義
//!
//! Todo API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## 設計方針
//!
//! - 検証エラーは 400、ストアのエラーは 500 に変換する
//! - レスポンスには固定のメッセージのみを含め、内部の詳細はログにのみ出力する

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use todolist_infra::InfraError;
use todolist_shared::MessageResponse;

/// タイトル未入力時のメッセージ
pub const TITLE_REQUIRED_MESSAGE: &str = "The title field is required";
/// リクエストボディが解釈できない場合のメッセージ
pub const INVALID_BODY_MESSAGE: &str = "The request body is invalid";
/// 識別子の形式が不正な場合のメッセージ
pub const INVALID_ID_MESSAGE: &str = "The id is invalid";

/// Todo API で発生するエラー
#[derive(Debug, Error)]
pub enum TodoError {
    /// 入力値の検証失敗
    ///
    /// 保持する文字列はそのままクライアントに返すメッセージ。
    #[error("入力が不正です: {0}")]
    InvalidInput(&'static str),

    /// 識別子の形式が不正
    #[error("識別子が不正です: {0}")]
    InvalidId(String),

    #[error("Todo の取得に失敗しました: {0}")]
    FetchFailed(#[source] InfraError),

    #[error("Todo の作成に失敗しました: {0}")]
    CreateFailed(#[source] InfraError),

    #[error("Todo の更新に失敗しました: {0}")]
    UpdateFailed(#[source] InfraError),

    #[error("Todo の削除に失敗しました: {0}")]
    DeleteFailed(#[source] InfraError),

    /// ホーム画面の描画失敗
    #[error("ホーム画面の描画に失敗しました: {0}")]
    Render(String),

    /// リクエストが制限時間内に完了しなかった
    #[error("リクエストがタイムアウトしました")]
    Timeout,

    /// ミドルウェアで発生した想定外のエラー
    #[error("内部エラー: {0}")]
    Internal(String),
}

impl From<JsonRejection> for TodoError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(detail = %rejection.body_text(), "リクエストボディを解釈できません");
        Self::InvalidInput(INVALID_BODY_MESSAGE)
    }
}

impl TodoError {
    /// クライアントに返すステータスコードとメッセージ
    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            TodoError::InvalidInput(message) => (StatusCode::BAD_REQUEST, *message),
            TodoError::InvalidId(_) => (StatusCode::BAD_REQUEST, INVALID_ID_MESSAGE),
            TodoError::FetchFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch todo"),
            TodoError::CreateFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to create todo")
            }
            TodoError::UpdateFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to update todo")
            }
            TodoError::DeleteFailed(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to delete todo")
            }
            TodoError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page"),
            TodoError::Timeout => (StatusCode::REQUEST_TIMEOUT, "Request timed out"),
            TodoError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        }
    }

    fn store_error(&self) -> Option<&InfraError> {
        match self {
            TodoError::FetchFailed(e)
            | TodoError::CreateFailed(e)
            | TodoError::UpdateFailed(e)
            | TodoError::DeleteFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();

        if let Some(e) = self.store_error() {
            tracing::error!(span_trace = %e.span_trace(), "{}", self);
        } else if status.is_server_error() {
            tracing::error!("{}", self);
        } else if matches!(self, TodoError::Timeout) {
            tracing::warn!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        (status, Json(MessageResponse::new(message))).into_response()
    }
}
