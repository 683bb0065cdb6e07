//! # Observability 基盤
//!
//! トレーシング初期化とログ出力形式の設定を提供する。
//! 環境変数 `LOG_FORMAT` による JSON / Pretty 出力の切り替えに対応する。

/// ログ出力形式
///
/// 環境変数 `LOG_FORMAT` で切り替える。
/// 値が未設定または不正な場合は [`Pretty`](LogFormat::Pretty) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 文字列からログ形式をパースする
    ///
    /// 不正な値の場合は [`Pretty`](LogFormat::Pretty) にフォールバックし、
    /// stderr に警告を出力する（この時点ではまだ subscriber が存在しない）。
    pub fn parse(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "pretty" => Self::Pretty,
            other => {
                eprintln!("WARNING: unknown LOG_FORMAT={other:?}, falling back to pretty");
                Self::Pretty
            }
        }
    }

    /// 環境変数 `LOG_FORMAT` から読み取る
    pub fn from_env() -> Self {
        std::env::var("LOG_FORMAT")
            .map(|val| Self::parse(&val))
            .unwrap_or_default()
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// サービス名（起動時のルートスパンに付与する）
    pub service_name: String,
    /// ログ出力形式
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// `LOG_FORMAT` 環境変数から出力形式を決定する
    pub fn from_env(service_name: impl Into<String>) -> Self {
        Self::new(service_name, LogFormat::from_env())
    }
}

/// トレーシングを初期化する
///
/// [`build_subscriber`] で組み立てた subscriber をグローバルに登録する。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
    use tracing_subscriber::util::SubscriberInitExt;

    build_subscriber(config).init();
}

/// subscriber を組み立てる
///
/// `RUST_LOG` 環境変数でログレベルを制御可能。
/// 未設定の場合は `"info,todolist=debug"` をデフォルトとする。
///
/// JSON モードでは `timestamp`, `level`, `target`, `message` が
/// トップレベルに出力され、現在のスパンが `span` に含まれる。
///
/// `ErrorLayer` を含むため、`InfraError` が捕捉する `SpanTrace` に
/// エラー発生時のスパン階層が記録される。
#[cfg(feature = "observability")]
pub fn build_subscriber(
    config: &TracingConfig,
) -> impl tracing::Subscriber + Send + Sync + 'static {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,todolist=debug".into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
}

/// HTTP リクエストごとのスパンを生成する
///
/// `TraceLayer::make_span_with` に渡して使う。
/// メソッドとパスを記録し、ハンドラ内のログをリクエスト単位で束ねる。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // ===== LogFormat::parse テスト =====

    #[test]
    fn test_parse_jsonでjsonを返す() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    }

    #[test]
    fn test_parse_prettyでprettyを返す() {
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
    }

    #[test]
    fn test_parse_不正な値でprettyにフォールバックする() {
        assert_eq!(LogFormat::parse("verbose"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Pretty);
    }

    #[test]
    fn test_defaultでprettyを返す() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }

    // ===== TracingConfig テスト =====

    #[test]
    fn test_newでフィールドが正しく設定される() {
        let config = TracingConfig::new("todolist-api", LogFormat::Json);

        assert_eq!(config.service_name, "todolist-api");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    // ===== make_request_span テスト =====

    #[cfg(feature = "observability")]
    #[test]
    fn test_make_request_spanはrequestスパンを返す() {
        let request = http::Request::builder()
            .method("GET")
            .uri("/todo?x=1")
            .body(())
            .unwrap();

        let span = make_request_span(&request);

        // subscriber 未登録ではスパンが無効化され、メタデータを持たないことがある
        if let Some(metadata) = span.metadata() {
            assert_eq!(metadata.name(), "request");
        }
    }

    // ===== build_subscriber テスト =====

    #[cfg(feature = "observability")]
    #[test]
    fn test_build_subscriberはスパントレースを捕捉できる() {
        let subscriber = build_subscriber(&TracingConfig::new("test", LogFormat::Pretty));

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::info_span!("store_call");
            let _entered = span.enter();

            let trace = tracing_error::SpanTrace::capture();

            assert_eq!(trace.status(), tracing_error::SpanTraceStatus::CAPTURED);
            assert!(trace.to_string().contains("store_call"));
        });
    }
}
