//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **DynamoDB**: 1 Todo を 1 アイテムとして格納する（PK = `id`）
//! - **全件取得**: Scan を `LastEvaluatedKey` がなくなるまで繰り返す
//! - **存在しない ID への更新・削除**: エラーにせず何もしない
//!
//! ## アイテム形式
//!
//! | 属性 | 型 | 内容 |
//! |------|----|------|
//! | `id` | S | 24 桁の 16 進数識別子 |
//! | `title` | S | タイトル |
//! | `completed` | BOOL | 完了フラグ |
//! | `created_at` | S | 作成日時（RFC 3339） |

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, types::AttributeValue};
use chrono::{DateTime, Utc};
use todolist_domain::todo::{Todo, TodoChanges, TodoId, TodoTitle};

use crate::{InfraError, dynamodb::TODO_KEY_ATTRIBUTE};

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// すべての Todo を取得する（順序はストア依存）
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError>;

    /// 新しい Todo を保存する
    async fn insert(&self, todo: &Todo) -> Result<(), InfraError>;

    /// 指定 ID の Todo のタイトルと完了フラグを更新する
    ///
    /// 該当する Todo が存在しない場合は何もせず成功を返す。
    /// 新しい Todo を作成することはない。
    async fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> Result<(), InfraError>;

    /// 指定 ID の Todo を削除する
    ///
    /// 該当する Todo が存在しない場合も成功を返す。
    async fn delete_by_id(&self, id: &TodoId) -> Result<(), InfraError>;
}

/// DynamoDB 実装の TodoRepository
pub struct DynamoDbTodoRepository {
    client:     Client,
    table_name: String,
}

impl DynamoDbTodoRepository {
    pub fn new(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }
}

#[async_trait]
impl TodoRepository for DynamoDbTodoRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        let mut todos = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| InfraError::dynamo_db(format!("Todo の一覧取得に失敗: {e}")))?;

            for item in output.items() {
                todos.push(convert_item_to_todo(item)?);
            }

            match output.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!(count = todos.len(), "Todo を取得しました");

        Ok(todos)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(todo_id = %todo.id()))]
    async fn insert(&self, todo: &Todo) -> Result<(), InfraError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(convert_todo_to_item(todo)))
            // 識別子の衝突で既存アイテムを上書きしない
            .condition_expression("attribute_not_exists(#id)")
            .expression_attribute_names("#id", TODO_KEY_ATTRIBUTE)
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("Todo の保存に失敗: {e}")))?;

        Ok(())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(todo_id = %id))]
    async fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> Result<(), InfraError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(TODO_KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .update_expression("SET #title = :title, #completed = :completed")
            // UpdateItem は既定で upsert になるため、存在するアイテムに限定する
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", TODO_KEY_ATTRIBUTE)
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#completed", "completed")
            .expression_attribute_values(
                ":title",
                AttributeValue::S(changes.title.as_str().to_string()),
            )
            .expression_attribute_values(":completed", AttributeValue::Bool(changes.completed))
            .send()
            .await;

        match result {
            Ok(_) => Ok(()),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_conditional_check_failed_exception()) =>
            {
                tracing::debug!("更新対象の Todo が存在しません");
                Ok(())
            }
            Err(err) => Err(InfraError::dynamo_db(format!("Todo の更新に失敗: {err}"))),
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(todo_id = %id))]
    async fn delete_by_id(&self, id: &TodoId) -> Result<(), InfraError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(TODO_KEY_ATTRIBUTE, AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(|e| InfraError::dynamo_db(format!("Todo の削除に失敗: {e}")))?;

        Ok(())
    }
}

/// Todo を DynamoDB アイテムに変換する
fn convert_todo_to_item(todo: &Todo) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (
            TODO_KEY_ATTRIBUTE.to_string(),
            AttributeValue::S(todo.id().to_string()),
        ),
        (
            "title".to_string(),
            AttributeValue::S(todo.title().as_str().to_string()),
        ),
        (
            "completed".to_string(),
            AttributeValue::Bool(todo.completed()),
        ),
        (
            "created_at".to_string(),
            AttributeValue::S(todo.created_at().to_rfc3339()),
        ),
    ])
}

/// DynamoDB アイテムを Todo に変換する
fn convert_item_to_todo(item: &HashMap<String, AttributeValue>) -> Result<Todo, InfraError> {
    let id = TodoId::parse(get_s(item, TODO_KEY_ATTRIBUTE)?)
        .map_err(|e| InfraError::invalid_item(e.to_string()))?;
    let title =
        TodoTitle::new(get_s(item, "title")?).map_err(|e| InfraError::invalid_item(e.to_string()))?;
    let completed = item
        .get("completed")
        .and_then(|v| v.as_bool().ok())
        .copied()
        .ok_or_else(|| InfraError::invalid_item("真偽値属性 'completed' が見つかりません"))?;
    let created_at = DateTime::parse_from_rfc3339(get_s(item, "created_at")?)
        .map_err(|e| InfraError::invalid_item(format!("created_at のパースに失敗: {e}")))?
        .with_timezone(&Utc);

    Ok(Todo::from_db(id, title, completed, created_at))
}

/// DynamoDB アイテムから文字列属性を取得する
fn get_s<'a>(item: &'a HashMap<String, AttributeValue>, key: &str) -> Result<&'a str, InfraError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| InfraError::invalid_item(format!("属性 '{key}' が見つかりません")))
}
