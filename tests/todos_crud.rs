#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tempfile::TempDir;
    use chrono::{Duration, Local};
    use tempo::store::todos::{Priority, Recurrence, Status, TodoFilter, Todos};
    use test_context::{test_context, TestContext};

    static TEST_DIR: OnceLock<TempDir> = OnceLock::new();

    struct TodoTestContext;

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let dir = TEST_DIR.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", dir.path());
            std::env::set_var("LOCALAPPDATA", dir.path());
            TodoTestContext
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_insert_and_fetch(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();

        let todo = todos.insert("Write the quarterly report", Priority::High, None, None).unwrap();
        assert!(todo.id > 0);
        assert_eq!(todo.status, Status::Pending);
        assert!(todo.date_completed.is_none());

        let fetched = todos.get_by_id(todo.id).unwrap().unwrap();
        assert_eq!(fetched.task, "Write the quarterly report");
        assert_eq!(fetched.priority, Priority::High);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_complete_stamps_date(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();

        let todo = todos.insert("Water the plants", Priority::Low, None, None).unwrap();
        let (completed, respawned) = todos.complete(todo.id).unwrap().unwrap();

        assert_eq!(completed.status, Status::Done);
        assert!(completed.date_completed.is_some());
        assert!(respawned.is_none());

        // Moving it back to pending clears the completion date.
        let reopened = todos.set_status(todo.id, Status::Pending).unwrap().unwrap();
        assert_eq!(reopened.status, Status::Pending);
        assert!(reopened.date_completed.is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_complete_unknown_id_returns_none(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();
        assert!(todos.complete(99_999).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();

        let todo = todos.insert("Cancel the gym membership", Priority::Medium, None, None).unwrap();
        let deleted = todos.delete(todo.id).unwrap().unwrap();
        assert_eq!(deleted.task, "Cancel the gym membership");

        assert!(todos.get_by_id(todo.id).unwrap().is_none());
        assert!(todos.delete(todo.id).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_open_filter_excludes_done(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();

        let open = todos.insert("Reply to xylophone vendor", Priority::Medium, None, None).unwrap();
        let done = todos.insert("Return xylophone loaner", Priority::Medium, None, None).unwrap();
        todos.complete(done.id).unwrap();

        let open_todos = todos.fetch(TodoFilter::Open).unwrap();
        assert!(open_todos.iter().any(|t| t.id == open.id));
        assert!(!open_todos.iter().any(|t| t.id == done.id));

        let done_todos = todos.fetch(TodoFilter::Done).unwrap();
        assert!(done_todos.iter().any(|t| t.id == done.id));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_completing_recurring_todo_respawns_it(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();
        let today = Local::now().date_naive();

        let todo = todos
            .insert("Weekly review of kitesurf logs", Priority::Medium, Some(today), Some(Recurrence::Weekly))
            .unwrap();
        let (completed, respawned) = todos.complete(todo.id).unwrap().unwrap();
        let next = respawned.unwrap();

        assert_eq!(completed.status, Status::Done);
        assert_ne!(next.id, completed.id);
        assert_eq!(next.task, completed.task);
        assert_eq!(next.status, Status::Pending);
        assert_eq!(next.recurrence, Some(Recurrence::Weekly));
        assert_eq!(next.due_date, Some(today + Duration::days(7)));

        // Both records exist: the done one and the fresh occurrence.
        let open = todos.fetch(TodoFilter::Open).unwrap();
        assert!(open.iter().any(|t| t.id == next.id));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_overdue_recurring_todo_reschedules_from_today(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();
        let today = Local::now().date_naive();
        let last_month = today - Duration::days(30);

        let todo = todos
            .insert("Daily stretching routine reminder", Priority::Low, Some(last_month), Some(Recurrence::Daily))
            .unwrap();
        let (_, respawned) = todos.complete(todo.id).unwrap().unwrap();

        assert_eq!(respawned.unwrap().due_date, Some(today + Duration::days(1)));
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_edit_changes_only_given_fields(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();
        let due = Local::now().date_naive() + Duration::days(3);

        let todo = todos.insert("Draft the allotment newsletter", Priority::Low, None, None).unwrap();
        let updated = todos.edit(todo.id, None, Some(Priority::High), Some(due), None).unwrap().unwrap();

        assert_eq!(updated.task, "Draft the allotment newsletter");
        assert_eq!(updated.priority, Priority::High);
        assert_eq!(updated.due_date, Some(due));
        assert!(updated.recurrence.is_none());

        assert!(todos.edit(88_888, Some("missing".to_string()), None, None, None).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_search_is_case_insensitive(_ctx: &mut TodoTestContext) {
        let todos = Todos::new().unwrap();

        todos.insert("Refill the Zeppelin tank", Priority::Low, None, None).unwrap();

        let matches = todos.search("zeppelin").unwrap();
        assert_eq!(matches.len(), 1);
        assert!(todos.search("no such task text").unwrap().is_empty());
    }
}
