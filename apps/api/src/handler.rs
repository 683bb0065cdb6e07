//! # HTTP ハンドラ
//!
//! リクエストをユースケースに委譲し、結果を JSON レスポンスに変換する。
//!
//! ## モジュール構成
//!
//! - [`health`] - ヘルスチェック
//! - [`home`] - ホーム画面
//! - [`todo`] - Todo の CRUD

pub mod health;
pub mod home;
pub mod todo;

pub use health::health_check;
pub use home::{HomePageRenderer, HomeState, home_page};
pub use todo::{TodoState, create_todo, delete_todo, list_todos, update_todo};
