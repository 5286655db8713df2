//! Git operations using git2 (libgit2).
//!
//! Only the HEAD commit is read: its `Change-Id:` trailer names the Gerrit
//! change under review.

mod change_id;
mod error;
mod repo;
#[cfg(test)]
pub mod test_utils;

pub use change_id::current_change_id;
pub use error::GitError;
pub use repo::open_repo;
