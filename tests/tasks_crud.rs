#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::db::notes::Notes;
    use worklog::db::projects::Projects;
    use worklog::db::tasks::Tasks;
    use worklog::libs::error::StoreError;
    use worklog::libs::note::NoteKind;
    use worklog::libs::task::{NewTask, TaskFilter, TaskPatch, TaskStatus};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            TaskTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl TaskTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklog.db")
        }

        fn tasks(&self) -> Tasks {
            Tasks::with_db(Db::open(self.db_path()).unwrap()).unwrap()
        }

        fn notes(&self) -> Notes {
            Notes::with_db(Db::open(self.db_path()).unwrap()).unwrap()
        }

        fn projects(&self) -> Projects {
            Projects::with_db(Db::open(self.db_path()).unwrap()).unwrap()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_task_defaults(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Fix the build")).unwrap();

        assert_eq!(task.title, "Fix the build");
        assert_eq!(task.description, "");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.next_action, "");
        assert_eq!(task.priority, 2);
        assert_eq!(task.project_id, None);

        // All three clocks start equal
        let created_at = task.created_at.unwrap();
        assert_eq!(task.updated_at.unwrap(), created_at);
        assert_eq!(task.last_touched_at.unwrap(), created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_with_description_writes_snapshot_note(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let mut new_task = NewTask::new("Migrate the database");
        new_task.description = "halfway through the schema rewrite".to_string();
        let task = tasks.create(&new_task).unwrap();

        let notes = ctx.notes().list(task.id.unwrap(), 20).unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].kind, NoteKind::Snapshot);
        assert_eq!(notes[0].content, "halfway through the schema rewrite");
        assert_eq!(notes[0].created_at, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_without_description_writes_no_note(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Quick one")).unwrap();

        let notes = ctx.notes().list(task.id.unwrap(), 20).unwrap();
        assert!(notes.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_blank_title_is_rejected(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let err = tasks.create(&NewTask::new("   ")).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // Nothing was persisted
        assert!(tasks.list(&TaskFilter::default()).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_oversized_title_is_rejected(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let err = tasks.create(&NewTask::new(&"x".repeat(301))).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // Exactly at the limit is fine
        tasks.create(&NewTask::new(&"x".repeat(300))).unwrap();
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_title_is_trimmed(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("  Fix the build  ")).unwrap();
        assert_eq!(task.title, "Fix the build");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_resolves_project_by_name(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let mut new_task = NewTask::new("Wire up CI");
        new_task.project = Some("infra".to_string());
        let task = tasks.create(&new_task).unwrap();

        assert!(task.project_id.is_some());
        assert_eq!(task.project.as_deref(), Some("infra"));

        // Reusing the name attaches to the same project
        let mut second = NewTask::new("Add caching");
        second.project = Some("infra".to_string());
        let second = tasks.create(&second).unwrap();
        assert_eq!(second.project_id, task.project_id);

        assert_eq!(ctx.projects().list().unwrap().len(), 1);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_missing_task(ctx: &mut TaskTestContext) {
        let tasks = ctx.tasks();

        let err = tasks.get(42).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(42)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_changes_only_supplied_fields(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let mut new_task = NewTask::new("Write release notes");
        new_task.description = "v0.3".to_string();
        new_task.next_action = "draft outline".to_string();
        let task = tasks.create(&new_task).unwrap();
        let id = task.id.unwrap();

        let patch = TaskPatch {
            priority: Some(1),
            ..Default::default()
        };
        let updated = tasks.update(id, &patch).unwrap();

        assert_eq!(updated.priority, 1);
        assert_eq!(updated.title, "Write release notes");
        assert_eq!(updated.description, "v0.3");
        assert_eq!(updated.next_action, "draft outline");
        assert_eq!(updated.status, TaskStatus::InProgress);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_bumps_both_clocks(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Tune the cache")).unwrap();
        let id = task.id.unwrap();
        let before_updated = task.updated_at.unwrap();
        let before_touched = task.last_touched_at.unwrap();

        let patch = TaskPatch {
            status: Some(TaskStatus::Paused),
            ..Default::default()
        };
        let updated = tasks.update(id, &patch).unwrap();

        assert!(updated.updated_at.unwrap() > before_updated);
        assert!(updated.last_touched_at.unwrap() > before_touched);
        assert_eq!(updated.updated_at, updated.last_touched_at);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_patch_still_bumps_clocks(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Idle task")).unwrap();
        let id = task.id.unwrap();

        let updated = tasks.update(id, &TaskPatch::default()).unwrap();

        assert!(updated.updated_at.unwrap() > task.updated_at.unwrap());
        assert_eq!(updated.title, task.title);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_reassigns_and_clears_project(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let mut new_task = NewTask::new("Move the docs");
        new_task.project = Some("site".to_string());
        let task = tasks.create(&new_task).unwrap();
        let id = task.id.unwrap();

        // A new name re-resolves through get-or-create
        let patch = TaskPatch {
            project: Some("wiki".to_string()),
            ..Default::default()
        };
        let updated = tasks.update(id, &patch).unwrap();
        assert_eq!(updated.project.as_deref(), Some("wiki"));
        assert_ne!(updated.project_id, task.project_id);

        // A blank name detaches the task
        let patch = TaskPatch {
            project: Some("".to_string()),
            ..Default::default()
        };
        let updated = tasks.update(id, &patch).unwrap();
        assert_eq!(updated.project_id, None);
        assert_eq!(updated.project, None);

        // An omitted project leaves the link alone
        let patch = TaskPatch {
            priority: Some(3),
            ..Default::default()
        };
        let updated = tasks.update(id, &patch).unwrap();
        assert_eq!(updated.project_id, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let err = tasks.update(7, &TaskPatch::default()).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(7)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rejects_blank_title(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Keep me")).unwrap();
        let id = task.id.unwrap();

        let patch = TaskPatch {
            title: Some("  ".to_string()),
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        let err = tasks.update(id, &patch).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));

        // The failed update left nothing behind
        let unchanged = tasks.get(id).unwrap();
        assert_eq!(unchanged.title, "Keep me");
        assert_eq!(unchanged.status, TaskStatus::InProgress);
        assert_eq!(unchanged.updated_at, task.updated_at);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_task_cascades_to_notes(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let mut notes = ctx.notes();

        let task = tasks.create(&NewTask::new("Short-lived")).unwrap();
        let id = task.id.unwrap();
        notes.create(id, "first", NoteKind::Note).unwrap();
        notes.create(id, "second", NoteKind::Decision).unwrap();

        tasks.delete(id).unwrap();

        assert!(matches!(tasks.get(id).unwrap_err(), StoreError::TaskNotFound(_)));
        assert!(notes.list(id, 20).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let err = tasks.delete(99).unwrap_err();
        assert!(matches!(err, StoreError::TaskNotFound(99)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_orders_by_activity(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        let mut notes = ctx.notes();

        let first = tasks.create(&NewTask::new("First")).unwrap();
        let second = tasks.create(&NewTask::new("Second")).unwrap();

        // Newest activity wins
        let listed = tasks.list(&TaskFilter::default()).unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);

        // A note on the older task floats it back to the top
        notes.create(first.id.unwrap(), "still on this", NoteKind::Note).unwrap();
        let listed = tasks.list(&TaskFilter::default()).unwrap();
        assert_eq!(listed[0].id, first.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_filters_combine_with_and(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();

        let mut a = NewTask::new("A");
        a.status = TaskStatus::Todo;
        a.project = Some("x".to_string());
        tasks.create(&a).unwrap();

        let mut b = NewTask::new("B");
        b.status = TaskStatus::Done;
        b.project = Some("x".to_string());
        tasks.create(&b).unwrap();

        let mut c = NewTask::new("C");
        c.status = TaskStatus::Todo;
        tasks.create(&c).unwrap();

        let by_status = tasks
            .list(&TaskFilter {
                status: Some(TaskStatus::Todo),
                project: None,
            })
            .unwrap();
        assert_eq!(by_status.len(), 2);

        let by_project = tasks
            .list(&TaskFilter {
                status: None,
                project: Some("x".to_string()),
            })
            .unwrap();
        assert_eq!(by_project.len(), 2);

        let both = tasks
            .list(&TaskFilter {
                status: Some(TaskStatus::Todo),
                project: Some("x".to_string()),
            })
            .unwrap();
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].title, "A");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_list_unknown_project_is_empty(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.tasks();
        tasks.create(&NewTask::new("Anything")).unwrap();

        let listed = tasks
            .list(&TaskFilter {
                status: None,
                project: Some("nope".to_string()),
            })
            .unwrap();
        assert!(listed.is_empty());

        // The filter must not create the project as a side effect
        assert!(ctx.projects().list().unwrap().is_empty());
    }
}
