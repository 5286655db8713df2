//! Git error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitError {
    #[error("Not in a git repository")]
    NotInRepo,

    #[error("HEAD commit has no Change-Id trailer; pass --change explicitly")]
    MissingChangeId,

    #[error("Git error: {0}")]
    Git2(#[from] git2::Error),
}

pub type Result<T> = std::result::Result<T, GitError>;
