use super::models::{Change, CommentsByFile};
use crate::infra::gerrit::{GerritClient, GerritError, change_path};

/// Identifies one change on a Gerrit host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeTarget {
    pub project: String,
    pub branch: String,
    pub change_id: String,
}

impl ChangeTarget {
    fn path(&self) -> String {
        change_path(&self.project, &self.branch, &self.change_id)
    }
}

pub async fn fetch_change(
    client: &GerritClient,
    target: &ChangeTarget,
) -> Result<Change, GerritError> {
    let path = format!("{}?o=CURRENT_REVISION&o=CURRENT_COMMIT", target.path());
    client.get_json(&path).await
}

/// All published comments of the change, keyed by file path.
pub async fn fetch_comments(
    client: &GerritClient,
    target: &ChangeTarget,
) -> Result<CommentsByFile, GerritError> {
    client.get_json(&format!("{}/comments", target.path())).await
}
