//! wiremock-based Gerrit mock server for testing.
//!
//! ```ignore
//! let mock = GerritMockServer::start().await;
//! mock.change("fuchsia", "master", "Iabc").comments(json!({...})).await;
//! mock.change("fuchsia", "master", "Iabc").info(2).await;
//! mock.change("fuchsia", "master", "Iabc").not_found().await;
//! let client = mock.client();
//! ```

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::client::{GerritClient, XSSI_PREFIX, change_path};

pub struct GerritMockServer {
    server: MockServer,
}

impl GerritMockServer {
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn client(&self) -> GerritClient {
        GerritClient::new(&self.server.uri()).unwrap()
    }

    pub fn change<'a>(&'a self, project: &str, branch: &str, change_id: &str) -> ChangeMock<'a> {
        ChangeMock {
            server: &self.server,
            path: change_path(project, branch, change_id),
        }
    }
}

pub struct ChangeMock<'a> {
    server: &'a MockServer,
    path: String,
}

/// Wrap a JSON value the way Gerrit does.
pub fn gerrit_body(value: &serde_json::Value) -> String {
    format!("{XSSI_PREFIX}\n{value}")
}

impl ChangeMock<'_> {
    /// Mount `GET .../comments` returning `body` (a map of path to comments).
    pub async fn comments(&self, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path(format!("{}/comments", self.path)))
            .respond_with(ResponseTemplate::new(200).set_body_string(gerrit_body(&body)))
            .mount(self.server)
            .await;
    }

    /// Mount `GET .../comments` returning a raw body, without the XSSI guard.
    pub async fn comments_raw(&self, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("{}/comments", self.path)))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(self.server)
            .await;
    }

    /// Mount the change info endpoint with `patchsets` revisions, the last one current.
    pub async fn info(&self, patchsets: i64) {
        let revisions: serde_json::Map<String, serde_json::Value> = (1..=patchsets)
            .map(|n| (format!("sha{n}"), json!({ "_number": n })))
            .collect();
        let body = json!({
            "id": self.path.trim_start_matches("/changes/"),
            "current_revision": format!("sha{patchsets}"),
            "revisions": revisions,
        });
        Mock::given(method("GET"))
            .and(path(self.path.clone()))
            .and(query_param("o", "CURRENT_REVISION"))
            .respond_with(ResponseTemplate::new(200).set_body_string(gerrit_body(&body)))
            .mount(self.server)
            .await;
    }

    /// Every endpoint of this change answers 404, as Gerrit does for unknown changes.
    pub async fn not_found(&self) {
        Mock::given(method("GET"))
            .and(path(self.path.clone()))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found: change\n"))
            .mount(self.server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{}/comments", self.path)))
            .respond_with(ResponseTemplate::new(404).set_body_string("Not found: change\n"))
            .mount(self.server)
            .await;
    }
}
