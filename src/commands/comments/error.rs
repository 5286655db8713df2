use thiserror::Error;

/// A reply that does not directly follow its parent in a linearized sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "comment {comment_id} replies to {reply_to} but follows {}",
    .previous_id.as_deref().unwrap_or("nothing")
)]
pub struct ConsistencyError {
    pub comment_id: String,
    pub reply_to: String,
    pub previous_id: Option<String>,
}

#[derive(Error, Debug)]
pub enum CommentsError {
    #[error("Inconsistent comment threads in {path}: {source}")]
    Consistency {
        path: String,
        #[source]
        source: ConsistencyError,
    },

    #[error(
        "{} of {total} files had inconsistent comment threads; output is incomplete:\n{}",
        .failures.len(),
        .failures.join("\n")
    )]
    Inconsistent { failures: Vec<String>, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CommentsError>;
