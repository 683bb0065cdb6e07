//! # Todo のレスポンス表現
//!
//! ストアから復元した [`Todo`] を API レスポンスの形に変換する。
//! 変換は副作用を持たず、失敗しない。

use serde::{Deserialize, Serialize};
use todolist_domain::todo::Todo;

/// API で返す Todo
///
/// `id` と `createdAt` は必ず [`Todo`] から生成する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoView {
    pub id:         String,
    pub title:      String,
    pub completed:  bool,
    /// 作成日時（RFC 3339）
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<&Todo> for TodoView {
    fn from(todo: &Todo) -> Self {
        Self {
            id:         todo.id().to_string(),
            title:      todo.title().as_str().to_string(),
            completed:  todo.completed(),
            created_at: todo.created_at().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use pretty_assertions::assert_eq;
    use todolist_domain::todo::{TodoId, TodoTitle};

    use super::*;

    #[test]
    fn test_todoの各フィールドがそのまま渡される() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let todo = Todo::from_db(
            TodoId::parse("6553f100a1b2c3d4e5f60001").unwrap(),
            TodoTitle::new("Buy milk").unwrap(),
            true,
            now,
        );

        let view = TodoView::from(&todo);

        assert_eq!(
            view,
            TodoView {
                id:         "6553f100a1b2c3d4e5f60001".to_string(),
                title:      "Buy milk".to_string(),
                completed:  true,
                created_at: "2023-11-14T22:13:20+00:00".to_string(),
            }
        );
    }

    #[test]
    fn test_jsonのキー名は作成日時のみキャメルケース() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let todo = Todo::new(TodoId::generate(), TodoTitle::new("a").unwrap(), now);

        let json = serde_json::to_value(TodoView::from(&todo)).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        keys.sort_unstable();

        assert_eq!(keys, vec!["completed", "createdAt", "id", "title"]);
    }
}
