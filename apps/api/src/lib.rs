//! # Todolist API
//!
//! Todo の作成・取得・更新・削除を提供する HTTP サーバー。
//!
//! ## 構成
//!
//! ```text
//! handler（HTTP 入出力） → usecase（検証・ストア呼び出し） → infra（DynamoDB）
//! ```
//!
//! - [`app`] - ルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラーと HTTP レスポンスへの変換
//! - [`handler`] - HTTP ハンドラ
//! - [`usecase`] - Todo ユースケース
//! - [`view`] - Todo のレスポンス表現

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
pub mod view;
