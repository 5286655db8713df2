//! Dropping threads that have been resolved.

use tracing::debug;

use super::error::ConsistencyError;
use super::models::Comment;

/// Remove every thread whose last comment is resolved.
///
/// A thread is kept whole or dropped whole: only the resolution state of its
/// final reply matters, so an unresolved reply reopens a thread that an
/// earlier reply resolved and vice versa.
///
/// `linearized` must come from [`super::thread::linearize`]: every reply has
/// to directly follow the comment it replies to.
pub fn filter_resolved(linearized: Vec<Comment>) -> Result<Vec<Comment>, ConsistencyError> {
    let mut out = Vec::new();
    let mut thread: Vec<Comment> = Vec::new();
    let mut previous_id: Option<String> = None;

    for comment in linearized {
        if comment.is_root() {
            commit_thread(&mut out, &mut thread);
        } else if comment.parent_id() != previous_id.as_deref() {
            return Err(ConsistencyError {
                comment_id: comment.id.clone(),
                reply_to: comment.parent_id().unwrap_or_default().to_string(),
                previous_id,
            });
        }
        previous_id = Some(comment.id.clone());
        thread.push(comment);
    }
    commit_thread(&mut out, &mut thread);

    Ok(out)
}

/// Move `thread` into `out` if it is still open, otherwise discard it.
fn commit_thread(out: &mut Vec<Comment>, thread: &mut Vec<Comment>) {
    if thread.last().is_some_and(|c| c.unresolved) {
        out.append(thread);
        return;
    }
    if let (Some(first), Some(last)) = (thread.first(), thread.last()) {
        debug!(root = %first.id, last = %last.id, "dropping resolved thread");
    }
    thread.clear();
}
