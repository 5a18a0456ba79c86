//! Shared fixtures for end-to-end tests against a local mock Copr server

use copr_sdk::{Configuration, CoprService, Session};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_LOGIN: &str = "test-login";
pub const TEST_TOKEN: &str = "p4s5w0rd";
/// `Basic base64("test-login:p4s5w0rd")`
pub const TEST_AUTHORIZATION: &str = "Basic dGVzdC1sb2dpbjpwNHM1dzByZA==";

/// Anonymous session against the mock server
pub fn session(server: &MockServer) -> Session {
    CoprService::new()
        .new_session(Configuration::new(server.uri()))
        .expect("session")
}

/// Session carrying test credentials
pub fn authenticated_session(server: &MockServer) -> Session {
    CoprService::new()
        .new_session(Configuration::new(server.uri()).with_credentials(TEST_LOGIN, TEST_TOKEN))
        .expect("session")
}

pub mod fixtures {
    use super::*;

    pub const OVERRIDE_RESULTS: &str =
        "http://copr-be.cloud.fedoraproject.org/results/mizdebsk/override";

    pub fn fail() -> Value {
        json!({"output": "fail"})
    }

    pub fn list_single() -> Value {
        json!({
            "output": "ok",
            "repos": [{
                "name": "log4j",
                "description": "Apache log4j",
                "instructions": "",
                "additional_repos": "",
                "yum_repos": {}
            }]
        })
    }

    pub fn list_multiple() -> Value {
        json!({
            "output": "ok",
            "repos": [{"name": "log4j"}, {"name": "xyzzy"}, {"name": "my-fancy-repo"}]
        })
    }

    pub fn playground() -> Value {
        json!({
            "output": "ok",
            "repos": [
                {"username": "sochotni", "coprname": "fedwatch"},
                {"username": "bkabrda", "coprname": "python-3.4"},
                {"username": "james", "coprname": "yum-rawhide"}
            ]
        })
    }

    /// Raw text so the key order of `yum_repos` is exactly as written
    pub fn detail_override() -> String {
        format!(
            r#"{{
  "output": "ok",
  "detail": {{
    "description": "Fixed or tweaked versions of some Fedora packages, for personal use.",
    "instructions": "Nothing complicated, really...",
    "additional_repos": "",
    "last_modified": 1407916203,
    "name": "override",
    "yum_repos": {{
      "fedora-20-x86_64": "{base}/fedora-20-x86_64/",
      "fedora-21-x86_64": "{base}/fedora-21-x86_64/",
      "fedora-rawhide-x86_64": "{base}/fedora-rawhide-x86_64/"
    }}
  }}
}}"#,
            base = OVERRIDE_RESULTS
        )
    }

    pub fn build_log4j() -> Value {
        json!({"output": "ok", "id": 5, "message": "Build was added to log4j."})
    }
}
