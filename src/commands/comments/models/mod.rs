mod change;
mod comment;

pub use change::{Change, Revision};
pub use comment::{Author, Comment, CommentsByFile};
