//! # ホーム画面ハンドラ
//!
//! API の概要を示す静的な HTML ページを返す。
//!
//! ## 設計方針
//!
//! - **`include_str!` によるコンパイル時埋め込み**: テンプレートはバイナリに埋め込まれる
//! - **Todo データに依存しない**: ストアには触れない
//! - テンプレートの登録は起動時に一度だけ行う

use std::sync::Arc;

use axum::{extract::State, response::Html};
use serde::Serialize;
use tera::{Context, Tera};

use crate::error::TodoError;

const TEMPLATE_NAME: &str = "home.html";

/// ページに掲載するエンドポイント
#[derive(Debug, Serialize)]
struct Endpoint {
    method:      &'static str,
    path:        &'static str,
    description: &'static str,
}

const ENDPOINTS: &[Endpoint] = &[
    Endpoint {
        method:      "GET",
        path:        "/todo",
        description: "List all todos",
    },
    Endpoint {
        method:      "POST",
        path:        "/todo",
        description: "Create a todo",
    },
    Endpoint {
        method:      "PUT",
        path:        "/todo/{id}",
        description: "Update the title and completion of a todo",
    },
    Endpoint {
        method:      "DELETE",
        path:        "/todo/{id}",
        description: "Delete a todo",
    },
    Endpoint {
        method:      "GET",
        path:        "/health",
        description: "Health check",
    },
];

/// ホーム画面のレンダラー
pub struct HomePageRenderer {
    engine: Tera,
}

impl HomePageRenderer {
    /// 埋め込みテンプレートを登録したレンダラーを作成する
    pub fn new() -> Result<Self, TodoError> {
        Self::from_template(include_str!("../../templates/home.html"))
    }

    fn from_template(source: &str) -> Result<Self, TodoError> {
        let mut engine = Tera::default();
        engine
            .add_raw_template(TEMPLATE_NAME, source)
            .map_err(|e| TodoError::Render(e.to_string()))?;
        Ok(Self { engine })
    }

    /// ページを描画する
    pub fn render(&self) -> Result<String, TodoError> {
        let mut context = Context::new();
        context.insert("service_name", "Todo API");
        context.insert("version", env!("CARGO_PKG_VERSION"));
        context.insert("endpoints", ENDPOINTS);

        self.engine
            .render(TEMPLATE_NAME, &context)
            .map_err(|e| TodoError::Render(format!("{e:?}")))
    }
}

/// ホーム画面の共有状態
pub struct HomeState {
    pub renderer: HomePageRenderer,
}

/// GET /
#[tracing::instrument(skip_all)]
pub async fn home_page(State(state): State<Arc<HomeState>>) -> Result<Html<String>, TodoError> {
    state.renderer.render().map(Html)
}
