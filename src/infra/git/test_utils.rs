//! Test utilities for creating temporary git repositories.

use git2::Repository;
use std::path::Path;
use tempfile::TempDir;

use super::repo::open_repo_at;

/// A temporary git repository for testing.
pub struct TempRepo {
    pub dir: TempDir,
}

impl TempRepo {
    /// Create a new temporary git repository whose only commit has `message`.
    pub fn new(message: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        {
            let sig = git2::Signature::now("Test", "test@example.com").unwrap();
            let tree_id = repo.index().unwrap().write_tree().unwrap();
            let tree = repo.find_tree(tree_id).unwrap();
            repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[])
                .unwrap();
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn open(&self) -> Repository {
        open_repo_at(self.path()).unwrap()
    }

    /// Add an empty commit on top of HEAD.
    pub fn commit(&self, message: &str) {
        let repo = self.open();
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let parent = repo.head().unwrap().peel_to_commit().unwrap();
        let tree = parent.tree().unwrap();
        repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &[&parent])
            .unwrap();
    }
}
