#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::db::notes::Notes;
    use worklog::db::tasks::Tasks;
    use worklog::libs::error::StoreError;
    use worklog::libs::note::NoteKind;
    use worklog::libs::task::{NewTask, TaskPatch, TaskStatus};

    struct ResumeTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for ResumeTestContext {
        fn setup() -> Self {
            ResumeTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl ResumeTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklog.db")
        }

        fn tasks(&self) -> Tasks {
            Tasks::with_db(Db::open(self.db_path()).unwrap()).unwrap()
        }

        fn notes(&self) -> Notes {
            Notes::with_db(Db::open(self.db_path()).unwrap()).unwrap()
        }
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_picks_most_recently_touched(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();
        let mut notes = ctx.notes();

        let first = tasks.create(&NewTask::new("Old work")).unwrap();
        tasks.create(&NewTask::new("New work")).unwrap();

        // A note is enough to make the older task current again
        notes.create(first.id.unwrap(), "back on this one", NoteKind::Note).unwrap();

        let resume = tasks.resume().unwrap();
        assert_eq!(resume.task.id, first.id);
        assert_eq!(resume.latest_notes.len(), 1);
        assert_eq!(resume.latest_notes[0].content, "back on this one");
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_excludes_done_tasks(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();

        let older = tasks.create(&NewTask::new("Still open")).unwrap();
        let newer = tasks.create(&NewTask::new("Finished late")).unwrap();

        // Completing the newer task touches it last, but done never wins
        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        tasks.update(newer.id.unwrap(), &patch).unwrap();

        let resume = tasks.resume().unwrap();
        assert_eq!(resume.task.id, older.id);
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_considers_paused_and_todo(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();

        let mut new_task = NewTask::new("Parked");
        new_task.status = TaskStatus::Paused;
        let parked = tasks.create(&new_task).unwrap();

        let resume = tasks.resume().unwrap();
        assert_eq!(resume.task.id, parked.id);
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_with_no_candidates(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();

        // Empty journal
        assert!(matches!(tasks.resume().unwrap_err(), StoreError::NoActiveTask));

        // A journal with only done tasks is just as empty
        let task = tasks.create(&NewTask::new("Already finished")).unwrap();
        let patch = TaskPatch {
            status: Some(TaskStatus::Done),
            ..Default::default()
        };
        tasks.update(task.id.unwrap(), &patch).unwrap();

        assert!(matches!(tasks.resume().unwrap_err(), StoreError::NoActiveTask));
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_is_read_only(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();

        let task = tasks.create(&NewTask::new("Look, don't touch")).unwrap();

        let first = tasks.resume().unwrap();
        let second = tasks.resume().unwrap();

        assert_eq!(first.task.id, second.task.id);
        assert_eq!(first.task.last_touched_at, second.task.last_touched_at);
        assert_eq!(tasks.get(task.id.unwrap()).unwrap().last_touched_at, task.last_touched_at);
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_caps_notes_at_five_newest(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();
        let mut notes = ctx.notes();

        let task = tasks.create(&NewTask::new("Chatty task")).unwrap();
        for i in 1..=7 {
            notes.create(task.id.unwrap(), &format!("note {}", i), NoteKind::Note).unwrap();
        }

        let resume = tasks.resume().unwrap();
        assert_eq!(resume.latest_notes.len(), 5);
        assert_eq!(resume.latest_notes[0].content, "note 7");
        assert_eq!(resume.latest_notes[4].content, "note 3");
    }

    #[test_context(ResumeTestContext)]
    #[test]
    fn test_resume_tie_breaks_toward_newer_task(ctx: &mut ResumeTestContext) {
        let mut tasks = ctx.tasks();

        let first = tasks.create(&NewTask::new("Twin A")).unwrap();
        let second = tasks.create(&NewTask::new("Twin B")).unwrap();

        // Force identical activity stamps to hit the tie-break path
        tasks
            .conn
            .execute(
                "UPDATE tasks SET last_touched_at = (SELECT last_touched_at FROM tasks WHERE id = ?1) WHERE id = ?2",
                rusqlite::params![first.id, second.id],
            )
            .unwrap();

        let resume = tasks.resume().unwrap();
        assert_eq!(resume.task.id, second.id);
    }
}
