use serde::Deserialize;
use std::collections::HashMap;

/// Comments of a change keyed by file path, as returned by Gerrit.
/// Each list is in response order, not reply-chain order.
pub type CommentsByFile = HashMap<String, Vec<Comment>>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default, rename = "in_reply_to")]
    pub reply_to: Option<String>,
    #[serde(default)]
    pub patch_set: i64,
    /// File-level comments have no line and are anchored to line 0.
    #[serde(default)]
    pub line: i64,
    #[serde(default)]
    pub author: Author,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub unresolved: bool,
}

impl Comment {
    /// Id of the comment this one replies to. An empty `in_reply_to` counts as a root.
    pub fn parent_id(&self) -> Option<&str> {
        self.reply_to.as_deref().filter(|id| !id.is_empty())
    }

    pub fn is_root(&self) -> bool {
        self.parent_id().is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
}

impl Author {
    /// Email address, or the display name when Gerrit withholds the email.
    pub fn label(&self) -> &str {
        if self.email.is_empty() {
            &self.name
        } else {
            &self.email
        }
    }
}
