//! # DynamoDB 接続管理
//!
//! Todo を保存するドキュメントストア（Amazon DynamoDB）への接続管理を行う。
//!
//! ## 設計方針
//!
//! - **単一クライアント**: プロセス起動時に一度だけ生成し、全リクエストで共有する
//! - **タイムアウト**: ストア呼び出しごとの上限時間を SDK の operation timeout で設定する
//! - **テーブル自動作成**: 起動時にテーブルが存在しなければ作成する（冪等）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use todolist_infra::dynamodb;
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = dynamodb::create_client(
//!         "http://localhost:18000",
//!         "ap-northeast-1",
//!         Duration::from_secs(10),
//!     )
//!     .await;
//!     dynamodb::ensure_todo_table(&client, "todo").await?;
//!     Ok(())
//! }
//! ```

use std::time::Duration;

use aws_config::timeout::TimeoutConfig;
use aws_sdk_dynamodb::{
    Client,
    types::{AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType},
};

use crate::InfraError;

/// パーティションキーの属性名
pub const TODO_KEY_ATTRIBUTE: &str = "id";

/// DynamoDB クライアントを作成する
///
/// 認証情報はダミー値を使用する（DynamoDB Local は認証情報を検証しない）。
///
/// # 引数
///
/// * `endpoint` - DynamoDB エンドポイント URL（例: `http://localhost:18000`）
/// * `region` - リージョン名
/// * `operation_timeout` - 1 回のストア呼び出しに許す最大時間（リトライを含む）
pub async fn create_client(endpoint: &str, region: &str, operation_timeout: Duration) -> Client {
    let config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .endpoint_url(endpoint)
        .region(aws_config::Region::new(region.to_string()))
        .timeout_config(
            TimeoutConfig::builder()
                .operation_timeout(operation_timeout)
                .build(),
        )
        // DynamoDB Local はクレデンシャルを検証しないが、SDK はプロバイダが必要
        .credentials_provider(aws_sdk_dynamodb::config::Credentials::new(
            "local", "local", None, None, "local",
        ))
        .load()
        .await;

    Client::new(&config)
}

/// Todo テーブルが存在しなければ作成する（冪等）
///
/// テーブルスキーマ:
/// - PK: `id` (String) - 24 桁の 16 進数識別子
///
/// `title` / `completed` / `created_at` はキー以外の属性のため定義不要。
/// ストアに到達できない場合はエラーを返し、呼び出し元（起動処理）は
/// プロセスを終了する。
pub async fn ensure_todo_table(client: &Client, table_name: &str) -> Result<(), InfraError> {
    match client.describe_table().table_name(table_name).send().await {
        Ok(_) => {
            tracing::debug!("テーブル '{}' は既に存在します", table_name);
            return Ok(());
        }
        Err(err) => {
            // ResourceNotFoundException の場合のみテーブル作成に進む
            let not_found = err
                .as_service_error()
                .is_some_and(|e| e.is_resource_not_found_exception());
            if !not_found {
                return Err(InfraError::dynamo_db(format!(
                    "テーブル '{table_name}' の確認に失敗: {err}"
                )));
            }
        }
    }

    tracing::info!("テーブル '{}' を作成します", table_name);

    let key_schema = KeySchemaElement::builder()
        .attribute_name(TODO_KEY_ATTRIBUTE)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("KeySchema 構築エラー: {e}")))?;
    let attribute_definition = AttributeDefinition::builder()
        .attribute_name(TODO_KEY_ATTRIBUTE)
        .attribute_type(ScalarAttributeType::S)
        .build()
        .map_err(|e| InfraError::dynamo_db(format!("AttributeDefinition 構築エラー: {e}")))?;

    let create_result = client
        .create_table()
        .table_name(table_name)
        .key_schema(key_schema)
        .attribute_definitions(attribute_definition)
        .billing_mode(BillingMode::PayPerRequest)
        .send()
        .await;

    if let Err(err) = create_result {
        // ResourceInUseException は複数プロセスの同時起動時に発生しうる
        let in_use = err
            .as_service_error()
            .is_some_and(|e| e.is_resource_in_use_exception());
        if !in_use {
            return Err(InfraError::dynamo_db(format!(
                "テーブル '{table_name}' の作成に失敗: {err}"
            )));
        }
        tracing::debug!(
            "テーブル '{}' は既に作成中または存在します（ResourceInUseException）",
            table_name
        );
        return Ok(());
    }

    tracing::info!("テーブル '{}' を作成しました", table_name);

    Ok(())
}
