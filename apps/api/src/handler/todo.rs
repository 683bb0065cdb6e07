//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /todo` - Todo 一覧
//! - `POST /todo` - Todo 作成
//! - `PUT /todo/{id}` - Todo 更新（タイトル・完了フラグ）
//! - `DELETE /todo/{id}` - Todo 削除
//!
//! コレクションのルートは `/todo/` でも受け付ける。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use todolist_domain::todo::TodoId;
use todolist_shared::{ApiResponse, MessageResponse};

use crate::{error::TodoError, usecase::TodoUseCaseImpl, view::TodoView};

/// Todo API の共有状態
pub struct TodoState {
    pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// `completed` が送られてきても無視する（常に未完了で作成する）。
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub title: Option<String>,
}

/// Todo 更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub title:     String,
    pub completed: bool,
}

/// Todo 作成レスポンス
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoCreatedResponse {
    pub message: String,
    pub todo_id: String,
}

// --- ハンドラ ---

/// GET /todo
#[tracing::instrument(skip_all)]
pub async fn list_todos(
    State(state): State<Arc<TodoState>>,
) -> Result<impl IntoResponse, TodoError> {
    let todos = state.usecase.list_todos().await?;

    let items: Vec<TodoView> = todos.iter().map(TodoView::from).collect();

    Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// POST /todo
///
/// ## レスポンス
///
/// - `200 OK`: 作成メッセージと採番した ID
/// - `400 Bad Request`: タイトルが空、またはボディが不正
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all)]
pub async fn create_todo(
    State(state): State<Arc<TodoState>>,
    payload: Result<Json<CreateTodoRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TodoError> {
    let Json(req) = payload?;

    let todo_id = state.usecase.create_todo(req.title).await?;

    let response = TodoCreatedResponse {
        message: "Todo Created Successfully!!".to_string(),
        todo_id: todo_id.to_string(),
    };
    Ok((StatusCode::OK, Json(response)))
}

/// PUT /todo/{id}
///
/// 識別子はボディより先に検証する。対象が存在しなくても 200 を返す。
///
/// ## レスポンス
///
/// - `200 OK`: 空のボディ
/// - `400 Bad Request`: 識別子が不正、タイトルが空、またはボディが不正
/// - `500 Internal Server Error`: ストア障害
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn update_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTodoRequest>, JsonRejection>,
) -> Result<StatusCode, TodoError> {
    let todo_id = parse_todo_id(&id)?;
    let Json(req) = payload?;

    state
        .usecase
        .update_todo(&todo_id, req.title, req.completed)
        .await?;

    Ok(StatusCode::OK)
}

/// DELETE /todo/{id}
///
/// 対象が存在しなくても成功メッセージを返す。
#[tracing::instrument(skip_all, fields(todo_id = %id))]
pub async fn delete_todo(
    State(state): State<Arc<TodoState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TodoError> {
    let todo_id = parse_todo_id(&id)?;

    state.usecase.delete_todo(&todo_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Todo Deleted Successfully !!")),
    ))
}

fn parse_todo_id(id: &str) -> Result<TodoId, TodoError> {
    TodoId::parse(id).map_err(|_| TodoError::InvalidId(id.to_string()))
}
