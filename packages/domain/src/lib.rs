//! # Todolist ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 検証済みの不変値（[`todo::TodoId`], [`todo::TodoTitle`]）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DynamoDB、HTTP）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`todo`] - Todo エンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todolist_domain::todo::{Todo, TodoId, TodoTitle};
//!
//! let now = chrono::Utc::now();
//! let todo = Todo::new(TodoId::generate(), TodoTitle::new("Buy milk")?, now);
//!
//! assert!(!todo.completed());
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod todo;

pub use error::DomainError;
