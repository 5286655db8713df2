//! Quickfix-style rendering.
//!
//! The output matches Vim's "generic C compiler" errorformat (see
//! `:help errorformat`), so it can be loaded with `:cfile` or `:cexpr`.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Write};

use super::models::Comment;

/// Write every file's comments, in key order.
pub fn render(out: &mut impl Write, by_file: &BTreeMap<String, Vec<Comment>>) -> io::Result<()> {
    for (path, comments) in by_file {
        out.write_all(format_file(path, comments).as_bytes())?;
    }
    Ok(())
}

/// One `<path>:<line>: ` header per run of comments on the same line, each
/// comment on its own tab-indented line. Messages are written verbatim.
pub fn format_file(path: &str, comments: &[Comment]) -> String {
    let mut output = String::new();
    let mut current_line = None;

    for comment in comments {
        if current_line != Some(comment.line) {
            let _ = writeln!(output, "{path}:{}: ", comment.line);
            current_line = Some(comment.line);
        }
        let _ = writeln!(output, "\t{}: {}", comment.author.label(), comment.message);
    }

    output
}
