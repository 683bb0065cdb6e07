//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//! 数値として解釈できない値は起動時エラーとする。

use std::{env, str::FromStr, time::Duration};

use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 環境変数の値が解釈できない
    #[error("環境変数 {name} の値が不正です: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host:              String,
    /// ポート番号
    pub port:              u16,
    /// DynamoDB エンドポイント URL
    pub dynamodb_endpoint: String,
    /// DynamoDB リージョン
    pub dynamodb_region:   String,
    /// Todo テーブル名
    pub table_name:        String,
    /// 1 リクエストあたりのタイムアウト
    pub request_timeout:   Duration,
    /// 1 回のストア呼び出しあたりのタイムアウト
    pub store_timeout:     Duration,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 値が存在しない場合は既定値を使う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let string = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

        Ok(Self {
            host:              string("TODO_HOST", "0.0.0.0"),
            port:              parse_or(&lookup, "TODO_PORT", 9000)?,
            dynamodb_endpoint: string("DYNAMODB_ENDPOINT", "http://localhost:18000"),
            dynamodb_region:   string("DYNAMODB_REGION", "ap-northeast-1"),
            table_name:        string("TODO_TABLE_NAME", "todo"),
            request_timeout:   Duration::from_secs(parse_or(&lookup, "REQUEST_TIMEOUT_SECS", 60)?),
            store_timeout:     Duration::from_secs(parse_or(&lookup, "STORE_TIMEOUT_SECS", 10)?),
        })
    }
}

fn parse_or<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(name) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
