//! Repository operations.

use git2::Repository;

use super::error::{GitError, Result};

/// Open a git repository from the current directory or any parent.
pub fn open_repo() -> Result<Repository> {
    Repository::open_from_env().map_err(|_| GitError::NotInRepo)
}

/// Open a git repository from a specific path.
#[cfg(test)]
pub fn open_repo_at(path: &std::path::Path) -> Result<Repository> {
    use git2::RepositoryOpenFlags;
    Repository::open_ext(
        path,
        RepositoryOpenFlags::empty(),
        std::iter::empty::<&std::path::Path>(),
    )
    .map_err(|_| GitError::NotInRepo)
}

/// Full message of the commit HEAD points at.
pub fn head_commit_message(repo: &Repository) -> Result<String> {
    let commit = repo.head()?.peel_to_commit()?;
    Ok(String::from_utf8_lossy(commit.message_bytes()).into_owned())
}
