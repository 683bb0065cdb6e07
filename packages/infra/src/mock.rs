//! # テスト用モックリポジトリ
//!
//! ユースケース・ハンドラのテストで使用するインメモリリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todolist-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 失敗モードに切り替えるとすべての操作がエラーを返す。
//! 呼び出し回数を記録するため、検証エラーがストア呼び出しより前に
//! 検出されることをテストで確認できる。

use std::sync::{
    Arc,
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;
use todolist_domain::todo::{Todo, TodoChanges, TodoId};

use crate::{error::InfraError, repository::TodoRepository};

// ===== MockTodoRepository =====

#[derive(Clone, Default)]
pub struct MockTodoRepository {
    todos:   Arc<Mutex<Vec<Todo>>>,
    failing: Arc<AtomicBool>,
    calls:   Arc<AtomicUsize>,
}

impl MockTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 事前データを追加する（呼び出し回数には含めない）
    pub fn add_todo(&self, todo: Todo) {
        self.todos.lock().unwrap().push(todo);
    }

    /// 保存中の Todo のスナップショットを返す
    pub fn todos(&self) -> Vec<Todo> {
        self.todos.lock().unwrap().clone()
    }

    /// 失敗モードを切り替える
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// トレイトメソッドが呼ばれた回数
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn begin_call(&self) -> Result<(), InfraError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(InfraError::unexpected("モックストアは停止中です"));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
    async fn find_all(&self) -> Result<Vec<Todo>, InfraError> {
        self.begin_call()?;
        Ok(self.todos())
    }

    async fn insert(&self, todo: &Todo) -> Result<(), InfraError> {
        self.begin_call()?;
        self.todos.lock().unwrap().push(todo.clone());
        Ok(())
    }

    async fn update_by_id(&self, id: &TodoId, changes: &TodoChanges) -> Result<(), InfraError> {
        self.begin_call()?;
        let mut todos = self.todos.lock().unwrap();
        if let Some(todo) = todos.iter_mut().find(|t| t.id() == id) {
            *todo = todo.apply(changes);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: &TodoId) -> Result<(), InfraError> {
        self.begin_call()?;
        self.todos.lock().unwrap().retain(|t| t.id() != id);
        Ok(())
    }
}
