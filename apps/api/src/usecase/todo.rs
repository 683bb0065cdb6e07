//! Todo ユースケース
//!
//! 検証はすべてストア呼び出しより前に行う。

use std::sync::Arc;

use todolist_domain::{
    clock::Clock,
    todo::{Todo, TodoChanges, TodoId, TodoTitle},
};
use todolist_infra::repository::TodoRepository;

use crate::error::{TITLE_REQUIRED_MESSAGE, TodoError};

/// Todo ユースケース
pub struct TodoUseCaseImpl {
    todo_repository: Arc<dyn TodoRepository>,
    clock:           Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
    pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
        Self {
            todo_repository,
            clock,
        }
    }

    /// すべての Todo を取得する
    pub async fn list_todos(&self) -> Result<Vec<Todo>, TodoError> {
        self.todo_repository
            .find_all()
            .await
            .map_err(TodoError::FetchFailed)
    }

    /// Todo を作成し、採番した ID を返す
    ///
    /// 完了フラグは常に `false` で作成する。
    /// タイトルが未指定の場合は空文字列として扱う。
    pub async fn create_todo(&self, title: Option<String>) -> Result<TodoId, TodoError> {
        let title = parse_title(title.unwrap_or_default())?;
        let now = self.clock.now();
        let todo = Todo::new(TodoId::generate(), title, now);

        self.todo_repository
            .insert(&todo)
            .await
            .map_err(TodoError::CreateFailed)?;

        tracing::info!(todo_id = %todo.id(), "Todo を作成しました");
        Ok(*todo.id())
    }

    /// Todo のタイトルと完了フラグを更新する
    ///
    /// 対象が存在しなくても成功とする（存在確認はしない）。
    pub async fn update_todo(
        &self,
        id: &TodoId,
        title: String,
        completed: bool,
    ) -> Result<(), TodoError> {
        let changes = TodoChanges {
            title: parse_title(title)?,
            completed,
        };

        self.todo_repository
            .update_by_id(id, &changes)
            .await
            .map_err(TodoError::UpdateFailed)
    }

    /// Todo を削除する
    ///
    /// 対象が存在しなくても成功とする。
    pub async fn delete_todo(&self, id: &TodoId) -> Result<(), TodoError> {
        self.todo_repository
            .delete_by_id(id)
            .await
            .map_err(TodoError::DeleteFailed)
    }
}

fn parse_title(title: String) -> Result<TodoTitle, TodoError> {
    TodoTitle::new(title).map_err(|e| {
        tracing::debug!("{}", e);
        TodoError::InvalidInput(TITLE_REQUIRED_MESSAGE)
    })
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use todolist_domain::clock::FixedClock;
    use todolist_infra::mock::MockTodoRepository;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    fn create_sut(repo: &MockTodoRepository) -> TodoUseCaseImpl {
        TodoUseCaseImpl::new(
            Arc::new(repo.clone()),
            Arc::new(FixedClock::new(fixed_now())),
        )
    }

    fn existing_todo(title: &str) -> Todo {
        Todo::new(
            TodoId::generate(),
            TodoTitle::new(title).unwrap(),
            fixed_now(),
        )
    }

    // ===== create_todo =====

    #[tokio::test]
    async fn test_create_todoで未完了のtodoが保存される() {
        // Given
        let repo = MockTodoRepository::new();
        let sut = create_sut(&repo);

        // When
        let id = sut.create_todo(Some("Buy milk".to_string())).await.unwrap();

        // Then
        let todos = repo.todos();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id(), &id);
        assert_eq!(todos[0].title().as_str(), "Buy milk");
        assert!(!todos[0].completed());
        assert_eq!(todos[0].created_at(), fixed_now());
    }

    #[rstest]
    #[case::空文字(Some(String::new()))]
    #[case::空白のみ(Some("   ".to_string()))]
    #[case::未指定(None)]
    #[tokio::test]
    async fn test_create_todoでタイトルが空ならストアを呼ばずに失敗する(
        #[case] title: Option<String>,
    ) {
        let repo = MockTodoRepository::new();
        let sut = create_sut(&repo);

        let result = sut.create_todo(title).await;

        assert!(matches!(
            result,
            Err(TodoError::InvalidInput(TITLE_REQUIRED_MESSAGE))
        ));
        assert_eq!(repo.call_count(), 0);
        assert!(repo.todos().is_empty());
    }

    #[tokio::test]
    async fn test_create_todoでストア障害はcreate_failedになる() {
        let repo = MockTodoRepository::new();
        repo.set_failing(true);
        let sut = create_sut(&repo);

        let result = sut.create_todo(Some("Buy milk".to_string())).await;

        assert!(matches!(result, Err(TodoError::CreateFailed(_))));
    }

    #[tokio::test]
    async fn test_create_todoで採番されるidは毎回異なる() {
        let repo = MockTodoRepository::new();
        let sut = create_sut(&repo);

        let first = sut.create_todo(Some("a".to_string())).await.unwrap();
        let second = sut.create_todo(Some("b".to_string())).await.unwrap();

        assert_ne!(first, second);
    }

    // ===== list_todos =====

    #[tokio::test]
    async fn test_list_todosで保存済みのtodoを返す() {
        let repo = MockTodoRepository::new();
        let todo = existing_todo("Buy milk");
        repo.add_todo(todo.clone());
        let sut = create_sut(&repo);

        let todos = sut.list_todos().await.unwrap();

        assert_eq!(todos, vec![todo]);
    }

    #[tokio::test]
    async fn test_list_todosでストア障害はfetch_failedになる() {
        let repo = MockTodoRepository::new();
        repo.set_failing(true);
        let sut = create_sut(&repo);

        let result = sut.list_todos().await;

        assert!(matches!(result, Err(TodoError::FetchFailed(_))));
    }

    // ===== update_todo =====

    #[tokio::test]
    async fn test_update_todoでタイトルと完了フラグが更新される() {
        let repo = MockTodoRepository::new();
        let todo = existing_todo("Buy milk");
        repo.add_todo(todo.clone());
        let sut = create_sut(&repo);

        sut.update_todo(todo.id(), "Buy milk and eggs".to_string(), true)
            .await
            .unwrap();

        let updated = &repo.todos()[0];
        assert_eq!(updated.title().as_str(), "Buy milk and eggs");
        assert!(updated.completed());
        assert_eq!(updated.created_at(), todo.created_at());
    }

    #[tokio::test]
    async fn test_update_todoで存在しないidは何も変更せず成功する() {
        let repo = MockTodoRepository::new();
        let todo = existing_todo("Buy milk");
        repo.add_todo(todo.clone());
        let sut = create_sut(&repo);
        let missing = TodoId::parse("000000000000000000000000").unwrap();

        sut.update_todo(&missing, "ghost".to_string(), true)
            .await
            .unwrap();

        assert_eq!(repo.todos(), vec![todo]);
    }

    #[tokio::test]
    async fn test_update_todoで空のタイトルはストアを呼ばずに失敗する() {
        let repo = MockTodoRepository::new();
        let todo = existing_todo("Buy milk");
        repo.add_todo(todo.clone());
        let sut = create_sut(&repo);

        let result = sut.update_todo(todo.id(), " ".to_string(), true).await;

        assert!(matches!(result, Err(TodoError::InvalidInput(_))));
        assert_eq!(repo.call_count(), 0);
    }

    #[tokio::test]
    async fn test_update_todoでストア障害はupdate_failedになる() {
        let repo = MockTodoRepository::new();
        repo.set_failing(true);
        let sut = create_sut(&repo);

        let result = sut
            .update_todo(&TodoId::generate(), "a".to_string(), false)
            .await;

        assert!(matches!(result, Err(TodoError::UpdateFailed(_))));
    }

    // ===== delete_todo =====

    #[tokio::test]
    async fn test_delete_todoを2回呼んでも成功する() {
        let repo = MockTodoRepository::new();
        let todo = existing_todo("Buy milk");
        repo.add_todo(todo.clone());
        let sut = create_sut(&repo);

        sut.delete_todo(todo.id()).await.unwrap();
        assert!(repo.todos().is_empty());

        sut.delete_todo(todo.id()).await.unwrap();
        assert!(repo.todos().is_empty());
    }

    #[tokio::test]
    async fn test_delete_todoでストア障害はdelete_failedになる() {
        let repo = MockTodoRepository::new();
        repo.set_failing(true);
        let sut = create_sut(&repo);

        let result = sut.delete_todo(&TodoId::generate()).await;

        assert!(matches!(result, Err(TodoError::DeleteFailed(_))));
    }
}
