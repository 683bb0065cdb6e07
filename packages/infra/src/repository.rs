//! # リポジトリ実装
//!
//! ユースケース層が依存するリポジトリトレイトと、その DynamoDB 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod todo_repository;

pub use todo_repository::{DynamoDbTodoRepository, TodoRepository};
