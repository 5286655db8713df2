use serde::Deserialize;
use std::collections::HashMap;

/// A Gerrit change, fetched with `o=CURRENT_REVISION&o=CURRENT_COMMIT`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Change {
    pub id: String,
    #[serde(default)]
    pub current_revision: Option<String>,
    /// Keyed by commit sha.
    #[serde(default)]
    pub revisions: HashMap<String, Revision>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Revision {
    #[serde(rename = "_number")]
    pub patchset: i64,
}

impl Change {
    /// Patchset number of the current revision, if Gerrit reported it.
    pub fn current_patchset(&self) -> Option<i64> {
        let sha = self.current_revision.as_ref()?;
        self.revisions.get(sha).map(|r| r.patchset)
    }
}
