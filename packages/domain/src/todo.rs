//! # Todo
//!
//! Todo アイテムを表現するドメインモデル。
//!
//! ## 識別子のフォーマット
//!
//! [`TodoId`] はドキュメントストアで広く使われる ObjectId（12 バイト）で、
//! 文字列表現は 24 桁の 16 進数になる。生成とパースは `bson` クレートに任せる。
//!
//! 外部から受け取った文字列は必ず [`TodoId::parse`] を通して型付き識別子に
//! 変換してからリポジトリに渡す。
//!
//! ## ライフサイクル
//!
//! - 作成: `id` と `created_at` はサーバー側で決定し、`completed` は `false`
//! - 更新: `title` と `completed` のみ変更可能（[`TodoChanges`]）
//! - 削除: 物理削除のみ（論理削除の状態は持たない）

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};

use crate::DomainError;

// =========================================================================
// TodoId（識別子）
// =========================================================================

/// Todo の一意識別子
///
/// # 不変条件
///
/// - 文字列表現は小文字の 16 進数 24 桁
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{_0}")]
pub struct TodoId(ObjectId);

impl TodoId {
    /// 新しい識別子を生成する
    pub fn generate() -> Self {
        Self(ObjectId::new())
    }

    /// 24 桁の 16 進数文字列から識別子を復元する
    ///
    /// 大文字・小文字のどちらも受け付ける。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        ObjectId::parse_str(value).map(Self).map_err(|_| {
            DomainError::InvalidId(format!("'{value}' は 24 桁の 16 進数ではありません"))
        })
    }
}

impl std::str::FromStr for TodoId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// Todo のタイトル（値オブジェクト）
///
/// 入力値はトリミングせずそのまま保持する。
///
/// # 不変条件
///
/// - 空文字列・空白のみではない
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{_0}")]
pub struct TodoTitle(String);

impl TodoTitle {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(DomainError::Validation("タイトルは必須です".to_string()));
        }

        Ok(Self(value))
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// 更新可能なフィールドの組
///
/// `id` と `created_at` は不変のため含まない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoChanges {
    pub title:     TodoTitle,
    pub completed: bool,
}

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    id:         TodoId,
    title:      TodoTitle,
    completed:  bool,
    created_at: DateTime<Utc>,
}

impl Todo {
    /// 新しい Todo を作成する（未完了状態）
    pub fn new(id: TodoId, title: TodoTitle, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            completed: false,
            created_at: now,
        }
    }

    /// ストアから Todo を復元する
    pub fn from_db(
        id: TodoId,
        title: TodoTitle,
        completed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title,
            completed,
            created_at,
        }
    }

    /// 変更を適用した新インスタンスを返す
    pub fn apply(&self, changes: &TodoChanges) -> Self {
        Self {
            id:         self.id,
            title:      changes.title.clone(),
            completed:  changes.completed,
            created_at: self.created_at,
        }
    }

    // --- ゲッター ---

    pub fn id(&self) -> &TodoId {
        &self.id
    }

    pub fn title(&self) -> &TodoTitle {
        &self.title
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
