//! Test factories for creating review comments with sensible defaults.
//!
//! Use `comment_with()` to customize specific fields, or `root()` / `reply()`
//! for the common thread shapes.
//!
//! # Example
//! ```ignore
//! use crate::testing::factories::{comment_with, reply, root};
//!
//! let thread = vec![root("abc").unresolved(), reply("def", "abc")];
//! let c = comment_with(|c| c.line = 47);
//! ```

use crate::commands::comments::models::{Author, Comment};

/// Create a Comment with default test values.
pub fn comment() -> Comment {
    Comment {
        id: "abc".to_string(),
        reply_to: None,
        patch_set: 1,
        line: 1,
        author: author("reviewer@example.com"),
        message: "Test comment".to_string(),
        unresolved: false,
    }
}

/// Create a Comment with customizations applied via closure.
pub fn comment_with(f: impl FnOnce(&mut Comment)) -> Comment {
    let mut c = comment();
    f(&mut c);
    c
}

/// A resolved root comment.
pub fn root(id: &str) -> Comment {
    comment_with(|c| c.id = id.to_string())
}

/// A resolved reply to `parent`.
pub fn reply(id: &str, parent: &str) -> Comment {
    comment_with(|c| {
        c.id = id.to_string();
        c.reply_to = Some(parent.to_string());
    })
}

/// Create an Author with the given email.
pub fn author(email: &str) -> Author {
    Author {
        name: "Test Reviewer".to_string(),
        email: email.to_string(),
    }
}

/// Ids of `comments` in order, for compact assertions.
pub fn ids(comments: &[Comment]) -> Vec<&str> {
    comments.iter().map(|c| c.id.as_str()).collect()
}

pub trait CommentExt {
    fn unresolved(self) -> Self;
}

impl CommentExt for Comment {
    fn unresolved(mut self) -> Self {
        self.unresolved = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_defaults() {
        let c = comment();
        assert_eq!(c.id, "abc");
        assert!(c.is_root());
        assert!(!c.unresolved);
    }

    #[test]
    fn test_reply_points_at_parent() {
        let c = reply("def", "abc").unresolved();
        assert_eq!(c.parent_id(), Some("abc"));
        assert!(c.unresolved);
    }
}
