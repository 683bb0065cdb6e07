//! # Todo API サーバー
//!
//! Todo の CRUD を提供する HTTP サーバーのエントリーポイント。
//!
//! ## 環境変数
//!
//! | 変数名 | 既定値 | 説明 |
//! |--------|--------|------|
//! | `TODO_HOST` | `0.0.0.0` | バインドアドレス |
//! | `TODO_PORT` | `9000` | ポート番号 |
//! | `DYNAMODB_ENDPOINT` | `http://localhost:18000` | DynamoDB エンドポイント |
//! | `DYNAMODB_REGION` | `ap-northeast-1` | DynamoDB リージョン |
//! | `TODO_TABLE_NAME` | `todo` | Todo テーブル名 |
//! | `REQUEST_TIMEOUT_SECS` | `60` | リクエストタイムアウト（秒） |
//! | `STORE_TIMEOUT_SECS` | `10` | ストア呼び出しタイムアウト（秒） |
//! | `LOG_FORMAT` | `pretty` | ログ出力形式（`json` / `pretty`） |
//! | `RUST_LOG` | `info,todolist=debug` | ログレベル |

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use todolist_api::{
    app::build_router,
    config::ApiConfig,
    handler::{HomePageRenderer, HomeState, TodoState},
    usecase::TodoUseCaseImpl,
};
use todolist_domain::clock::SystemClock;
use todolist_infra::{
    dynamodb,
    repository::{DynamoDbTodoRepository, TodoRepository},
};
use todolist_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. DynamoDB クライアントの生成とテーブルの確認（失敗時は終了）
/// 5. ルーターの構築
/// 6. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("todolist-api");
    init_tracing(&tracing_config);
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "API サーバーを起動します: {}:{} (table={})",
        config.host,
        config.port,
        config.table_name
    );

    let client = dynamodb::create_client(
        &config.dynamodb_endpoint,
        &config.dynamodb_region,
        config.store_timeout,
    )
    .await;
    dynamodb::ensure_todo_table(&client, &config.table_name)
        .await
        .context("ドキュメントストアに接続できません")?;

    let todo_repository: Arc<dyn TodoRepository> = Arc::new(DynamoDbTodoRepository::new(
        client,
        config.table_name.clone(),
    ));
    let usecase = TodoUseCaseImpl::new(todo_repository, Arc::new(SystemClock));
    let todo_state = Arc::new(TodoState { usecase });
    let home_state = Arc::new(HomeState {
        renderer: HomePageRenderer::new().context("テンプレートの登録に失敗しました")?,
    });

    let app = build_router(todo_state, home_state, config.request_timeout);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("アドレスのパースに失敗しました")?;

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API サーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl+C ハンドラの登録に失敗しました: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("シャットダウンシグナルを受信しました");
}
