#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use school_directory::db::{DbPool, establish_connection_pool};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// SQLite database living in a temporary directory, migrated on creation and
/// removed on drop.
pub struct TestDb {
    dir: TempDir,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self { dir, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Scratch directory next to the database, usable as a public dir.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn public_dir(&self) -> PathBuf {
        self.dir.path().join("public")
    }
}
