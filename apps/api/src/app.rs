//! # ルーター構築
//!
//! ハンドラ・共有状態・ミドルウェアを組み立てて axum の [`Router`] を作る。
//! 本番起動（`main.rs`）と統合テストの両方から使う。

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    error_handling::HandleErrorLayer,
    routing::{get, put},
};
use todolist_shared::observability::make_request_span;
use tower::{BoxError, ServiceBuilder, timeout::TimeoutLayer};
use tower_http::trace::TraceLayer;

use crate::{
    error::TodoError,
    handler::{
        HomeState,
        TodoState,
        create_todo,
        delete_todo,
        health_check,
        home_page,
        list_todos,
        update_todo,
    },
};

/// アプリケーションのルーターを構築する
///
/// 各リクエストは `request_timeout` を超えると 408 で打ち切られる。
/// ステータスの付け方は [`with_request_timeout`] を参照。
pub fn build_router(
    todo_state: Arc<TodoState>,
    home_state: Arc<HomeState>,
    request_timeout: Duration,
) -> Router {
    let todo_routes = Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/", get(list_todos).post(create_todo))
        .route("/todo/{id}", put(update_todo).delete(delete_todo))
        .with_state(todo_state);

    let home_routes = Router::new()
        .route("/", get(home_page))
        .with_state(home_state);

    let router = Router::new()
        .route("/health", get(health_check))
        .merge(home_routes)
        .merge(todo_routes);

    with_request_timeout(router, request_timeout)
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
}

/// ルーターにリクエスト単位のタイムアウトを付ける
///
/// 打ち切られたリクエストは他の失敗と同じく `{ "message": ... }` を返す。
pub fn with_request_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_middleware_error))
            .layer(TimeoutLayer::new(timeout)),
    )
}

async fn handle_middleware_error(err: BoxError) -> TodoError {
    if err.is::<tower::timeout::error::Elapsed>() {
        TodoError::Timeout
    } else {
        TodoError::Internal(err.to_string())
    }
}
