#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use worklog::db::db::Db;
    use worklog::db::migrations::{get_db_version, needs_migration, MigrationManager};

    struct MigrationTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            MigrationTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl MigrationTestContext {
        fn db_path(&self) -> PathBuf {
            self.temp_dir.path().join("worklog.db")
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migrations_run_automatically(ctx: &mut MigrationTestContext) {
        // Opening a DB runs all pending migrations
        let db = Db::open(ctx.db_path()).unwrap();

        let version = get_db_version(&db.conn).unwrap();
        assert!(version > 0);

        // Check that no more migrations are needed
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_history(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());

        // Verify migrations are recorded in order
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_idempotency(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        // Run migrations twice
        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        // Version should not change
        assert_eq!(version1, version2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_migration_creates_base_tables(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.db_path()).unwrap();
        MigrationManager::new().run_migrations(&mut conn).unwrap();

        for table in ["projects", "tasks", "notes"] {
            let found: i32 = conn
                .query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |row| row.get(0))
                .unwrap();
            assert_eq!(found, 1, "missing table {}", table);
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_is_migration_applied(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        assert!(manager.is_migration_applied(&conn, 1).unwrap());
        assert!(!manager.is_migration_applied(&conn, 999).unwrap());
    }

    #[cfg(debug_assertions)]
    #[test_context(MigrationTestContext)]
    #[test]
    fn test_rollback_reruns_migrations(ctx: &mut MigrationTestContext) {
        let mut conn = Connection::open(ctx.db_path()).unwrap();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let latest = get_db_version(&conn).unwrap();

        // Roll the tracking table back and verify the migrations re-run
        manager.rollback_to(&mut conn, 0).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());

        manager.run_migrations(&mut conn).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), latest);
    }
}
