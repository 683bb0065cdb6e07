//! # インフラ層エラー定義
//!
//! ドキュメントストアとの通信で発生するエラーを表現する。
//!
//! ## 設計方針
//!
//! - **ドメインエラーとの分離**: インフラ固有のエラーを明示
//! - **SpanTrace 自動捕捉**: convenience constructor でエラー生成時の呼び出し経路を記録する
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// convenience constructor でエラーを生成すると、
/// その時点のスパン情報が自動的にキャプチャされる。
/// API 層はこのエラーの詳細をクライアントに返さず、ログにのみ出力する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
    kind:       InfraErrorKind,
    span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
    /// DynamoDB エラー
    ///
    /// 接続失敗、タイムアウト、リクエストの拒否など。
    /// AWS SDK のエラー型はジェネリクスが深く `#[from]` が困難なため、
    /// 手動で String にマップする。
    #[error("DynamoDB エラー: {0}")]
    DynamoDb(String),

    /// 保存済みアイテムの復元エラー
    ///
    /// 属性の欠落や、識別子・日時のフォーマット不正など。
    #[error("アイテムの復元に失敗しました: {0}")]
    InvalidItem(String),

    /// 予期しないエラー
    #[error("予期しないエラー: {0}")]
    Unexpected(String),
}

// ===== InfraError のメソッド =====

impl InfraError {
    /// エラー種別を取得する
    pub fn kind(&self) -> &InfraErrorKind {
        &self.kind
    }

    /// SpanTrace を取得する
    pub fn span_trace(&self) -> &SpanTrace {
        &self.span_trace
    }

    fn with_kind(kind: InfraErrorKind) -> Self {
        Self {
            kind,
            span_trace: SpanTrace::capture(),
        }
    }

    // ===== Convenience constructors =====

    /// DynamoDB エラーを生成する
    pub fn dynamo_db(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::DynamoDb(msg.into()))
    }

    /// アイテム復元エラーを生成する
    pub fn invalid_item(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::InvalidItem(msg.into()))
    }

    /// 予期しないエラーを生成する
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::with_kind(InfraErrorKind::Unexpected(msg.into()))
    }
}

// ===== トレイト実装 =====

impl fmt::Debug for InfraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfraError")
            .field("kind", &self.kind)
            .field("span_trace", &self.span_trace)
            .finish()
    }
}

impl std::error::Error for InfraError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.kind.source()
    }
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::layer::SubscriberExt as _;

    use super::*;

    /// テスト用に ErrorLayer 付き subscriber を設定する
    fn with_error_layer(f: impl FnOnce()) {
        let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
        let _guard = tracing::subscriber::set_default(subscriber);
        f();
    }

    #[test]
    fn test_dynamo_dbでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_scan");
            let _enter = span.enter();

            let err = InfraError::dynamo_db("接続失敗");

            assert!(matches!(err.kind(), InfraErrorKind::DynamoDb(msg) if msg == "接続失敗"));
            let trace_str = format!("{}", err.span_trace());
            assert!(
                trace_str.contains("test_scan"),
                "SpanTrace がスパン名を含むこと: {trace_str}",
            );
        });
    }

    #[test]
    fn test_invalid_itemでspan_traceがキャプチャされる() {
        with_error_layer(|| {
            let span = tracing::info_span!("test_decode");
            let _enter = span.enter();

            let err = InfraError::invalid_item("属性 'title' が見つかりません");

            assert!(matches!(err.kind(), InfraErrorKind::InvalidItem(_)));
            let trace_str = format!("{}", err.span_trace());
            assert!(trace_str.contains("test_decode"));
        });
    }

    #[test]
    fn test_unexpectedの種別を取得できる() {
        let err = InfraError::unexpected("ストア停止中");
        assert!(matches!(
            err.kind(),
            InfraErrorKind::Unexpected(msg) if msg == "ストア停止中"
        ));
    }

    #[test]
    fn test_displayがinfra_error_kindのメッセージを出力する() {
        let err = InfraError::dynamo_db("タイムアウト");
        assert_eq!(format!("{err}"), "DynamoDB エラー: タイムアウト");
    }

    #[test]
    fn test_文字列由来のエラーはsourceを持たない() {
        use std::error::Error;

        let err = InfraError::invalid_item("id");
        assert!(err.source().is_none());
    }
}
