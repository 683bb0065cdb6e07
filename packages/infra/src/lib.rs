//! # Todolist インフラ層
//!
//! ドキュメントストア（DynamoDB）との接続と、Todo の永続化を担当する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: ユースケース層は [`repository::TodoRepository`] トレイトにのみ依存する
//! - **接続の共有**: DynamoDB クライアントはプロセス起動時に一度だけ生成し、全リクエストで共有する
//! - **エラーの集約**: AWS SDK のエラーは [`InfraError`] に変換して上位層へ返す
//!
//! ## モジュール構成
//!
//! - [`dynamodb`] - クライアント生成とテーブルの存在保証
//! - [`error`] - インフラ層エラーの定義
//! - [`repository`] - Todo リポジトリ
//! - `mock` - テスト用インメモリリポジトリ（`test-utils` feature）

pub mod dynamodb;
pub mod error;
#[cfg(feature = "test-utils")]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
