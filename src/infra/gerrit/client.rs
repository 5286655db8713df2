//! Gerrit REST client implementation using reqwest.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{GerritError, Result};

/// Gerrit prepends this to every JSON body to defeat cross-site script inclusion.
pub const XSSI_PREFIX: &str = ")]}'";

/// Characters escaped in project and branch names. Keeps `-`, `_` and `.`
/// readable; `/` in a project name must become `%2F`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

pub struct GerritClient {
    http: reqwest::Client,
    host: String,
}

impl GerritClient {
    /// Create a client for `host`, e.g. `https://fuchsia-review.googlesource.com`.
    pub fn new(host: &str) -> Result<Self> {
        let host = host.trim_end_matches('/');
        if !(host.starts_with("https://") || host.starts_with("http://")) {
            return Err(GerritError::InvalidHost(host.to_string()));
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("gerrit-threads/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            host: host.to_string(),
        })
    }

    /// GET `path` (relative to the host, starting with `/`) and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{path}", self.host);
        debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(GerritError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let json = strip_xssi_prefix(&body)?;
        Ok(serde_json::from_str(json)?)
    }
}

/// Remove the leading [`XSSI_PREFIX`] from a response body.
pub fn strip_xssi_prefix(body: &str) -> Result<&str> {
    body.strip_prefix(XSSI_PREFIX)
        .ok_or_else(|| GerritError::UnexpectedPrefix {
            found: body.chars().take(XSSI_PREFIX.len()).collect(),
            expected: XSSI_PREFIX,
        })
}

/// `/changes/{project}~{branch}~{change_id}`
pub fn change_path(project: &str, branch: &str, change_id: &str) -> String {
    format!(
        "/changes/{}~{}~{}",
        utf8_percent_encode(project, PATH_SEGMENT),
        utf8_percent_encode(branch, PATH_SEGMENT),
        utf8_percent_encode(change_id, PATH_SEGMENT),
    )
}
