//! Reply-chain reconstruction.
//!
//! Gerrit returns a file's comments in no particular order. Threads are
//! singly linked (a comment has at most one reply), so a child lookup plus
//! one walk per root is enough to put every thread back together.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use tracing::{debug, warn};

use super::models::Comment;

/// Reorder `comments` so each root is immediately followed by its reply chain.
///
/// Roots keep their input order. Replies whose parent is not in the input
/// (for example a reply to a comment on a dropped patchset) cannot be reached
/// from any root and are left out. When two replies name the same parent,
/// the one that arrived first continues the chain and the other is left out.
pub fn linearize(comments: Vec<Comment>) -> Vec<Comment> {
    let total = comments.len();
    let mut roots = Vec::new();
    let mut next_of: HashMap<String, Comment> = HashMap::new();

    for comment in comments {
        let Some(parent) = comment.parent_id().map(str::to_string) else {
            roots.push(comment);
            continue;
        };
        match next_of.entry(parent) {
            Entry::Vacant(slot) => {
                slot.insert(comment);
            }
            Entry::Occupied(slot) => {
                warn!(
                    parent = %slot.key(),
                    kept = %slot.get().id,
                    ignored = %comment.id,
                    "comment has more than one reply; keeping the first"
                );
            }
        }
    }

    let mut out = Vec::with_capacity(total);
    for root in roots {
        // Removing as we walk also guarantees termination on cyclic input.
        let mut next = next_of.remove(&root.id);
        out.push(root);
        while let Some(reply) = next {
            next = next_of.remove(&reply.id);
            out.push(reply);
        }
    }

    if !next_of.is_empty() {
        let orphans: Vec<&str> = next_of.values().map(|c| c.id.as_str()).collect();
        debug!(?orphans, "dropping replies that are not reachable from any root");
    }

    out
}
