//! # API レスポンスエンベロープ
//!
//! 一覧取得などのデータ返却 API で使う `{ "data": T }` 形式を提供する。

use serde::{Deserialize, Serialize};

/// データ返却 API の統一レスポンス型
///
/// ## 使用例
///
/// ```
/// use todolist_shared::ApiResponse;
///
/// let response = ApiResponse::new(vec!["Buy milk"]);
/// assert_eq!(response.data, vec!["Buy milk"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeでdataキーに包まれる() {
        let response = ApiResponse::new(vec!["a", "b"]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": ["a", "b"] }));
    }

    #[test]
    fn test_空の配列もdataキーに包まれる() {
        let response: ApiResponse<Vec<String>> = ApiResponse::new(Vec::new());
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json, serde_json::json!({ "data": [] }));
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let response: ApiResponse<String> = serde_json::from_str(r#"{"data": "world"}"#).unwrap();

        assert_eq!(response.data, "world");
    }
}
