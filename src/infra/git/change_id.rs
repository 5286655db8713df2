use git2::Repository;
use lazy_regex::regex;

use super::error::{GitError, Result};
use super::repo::head_commit_message;

/// Extract the Change-Id from a commit message.
///
/// When several `Change-Id:` lines are present the last one wins, matching
/// Gerrit, which reads the trailer block at the end of the message.
pub fn parse_change_id(message: &str) -> Option<&str> {
    regex!(r"Change-Id: ([[:alnum:]]+)")
        .captures_iter(message)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Change-Id of the HEAD commit of `repo`.
pub fn current_change_id(repo: &Repository) -> Result<String> {
    let message = head_commit_message(repo)?;
    parse_change_id(&message)
        .map(str::to_string)
        .ok_or(GitError::MissingChangeId)
}
