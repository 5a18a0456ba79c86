// Detail command: description, instructions and yum repositories of a project

use chrono::{DateTime, Utc};

use super::envelope::{i64_field, object_field, str_field};
use super::{Envelope, RpcCommand};
use crate::domain::{DetailRequest, DetailResult, YumRepository};
use crate::error::{CoprError, Result};

impl RpcCommand<DetailResult> {
    /// `GET /api/coprs/{user}/{project}/detail/`
    pub fn detail(request: &DetailRequest) -> Self {
        RpcCommand::new(
            "detail",
            format!(
                "/api/coprs/{}/{}/detail/",
                request.user_name, request.project_name
            ),
            decode_detail,
        )
    }
}

fn decode_detail(envelope: &Envelope) -> Result<DetailResult> {
    let detail = envelope.object_field("detail")?;

    let last_modified = i64_field(detail, "last_modified")?;
    let last_modified: DateTime<Utc> = DateTime::from_timestamp(last_modified, 0)
        .ok_or_else(|| {
            CoprError::protocol(format!("last_modified {} is out of range", last_modified))
        })?;

    // Key order of the object is the order the server listed the repositories in
    let yum_repositories = object_field(detail, "yum_repos")?
        .iter()
        .map(|(name, base_url)| {
            base_url
                .as_str()
                .map(|url| YumRepository::new(name.as_str(), url))
                .ok_or_else(|| {
                    CoprError::protocol(format!("yum repository `{}` has no base URL", name))
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DetailResult {
        description: str_field(detail, "description")?.to_string(),
        instructions: str_field(detail, "instructions")?.to_string(),
        additional_repos: str_field(detail, "additional_repos")?.to_string(),
        yum_repositories,
        last_modified,
    })
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;
    use crate::port::{HttpMethod, HttpResponse};
    use serde_json::{json, Value};

    const RESULTS: &str = "http://copr-be.cloud.fedoraproject.org/results/mizdebsk/override";

    fn override_detail() -> Value {
        json!({
            "output": "ok",
            "detail": {
                "description": "Fixed or tweaked versions of some Fedora packages, for personal use.",
                "instructions": "Nothing complicated, really...",
                "additional_repos": "",
                "last_modified": 1407916203,
                "name": "override",
                "yum_repos": {
                    "fedora-20-x86_64": format!("{}/fedora-20-x86_64/", RESULTS),
                    "fedora-21-x86_64": format!("{}/fedora-21-x86_64/", RESULTS),
                    "fedora-rawhide-x86_64": format!("{}/fedora-rawhide-x86_64/", RESULTS)
                }
            }
        })
    }

    #[tokio::test]
    async fn test_detail() {
        let (transport, seen) = transport_once(HttpResponse::ok(override_detail().to_string()));

        let result = RpcCommand::detail(&DetailRequest::new("mizdebsk", "override"))
            .execute(&anonymous(), &transport)
            .await
            .unwrap();

        assert_eq!(
            result.description,
            "Fixed or tweaked versions of some Fedora packages, for personal use."
        );
        assert_eq!(result.instructions, "Nothing complicated, really...");
        assert_eq!(result.additional_repos, "");
        assert_eq!(result.last_modified.timestamp(), 1407916203);
        assert_eq!(
            result.yum_repositories,
            vec![
                YumRepository::new("fedora-20-x86_64", format!("{}/fedora-20-x86_64/", RESULTS)),
                YumRepository::new("fedora-21-x86_64", format!("{}/fedora-21-x86_64/", RESULTS)),
                YumRepository::new(
                    "fedora-rawhide-x86_64",
                    format!("{}/fedora-rawhide-x86_64/", RESULTS)
                ),
            ]
        );

        let requests = seen.lock().unwrap();
        assert_eq!(requests[0].method, HttpMethod::Get);
        assert_eq!(
            requests[0].url,
            "http://copr.test/api/coprs/mizdebsk/override/detail/"
        );
    }

    #[tokio::test]
    async fn test_repositories_follow_server_key_order() {
        // Deliberately not alphabetical
        let body = r#"{"output": "ok", "detail": {
            "description": "d", "instructions": "i", "additional_repos": "",
            "last_modified": 0,
            "yum_repos": {"zeta": "http://z/", "alpha": "http://a/", "mid": "http://m/"}
        }}"#;
        let (transport, _) = transport_once(HttpResponse::ok(body));

        let result = RpcCommand::detail(&DetailRequest::new("u", "p"))
            .execute(&anonymous(), &transport)
            .await
            .unwrap();

        let names: Vec<&str> = result
            .yum_repositories
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["zeta", "alpha", "mid"]);
    }

    #[tokio::test]
    async fn test_missing_or_mistyped_fields() {
        let mutations: [(&str, Value); 5] = [
            ("description", Value::Null),
            ("last_modified", json!("yesterday")),
            ("yum_repos", json!(["fedora-20-x86_64"])),
            ("yum_repos", json!({"fedora-20-x86_64": 20})),
            ("instructions", json!(["step"])),
        ];

        for (field, value) in mutations {
            let mut body = override_detail();
            body["detail"][field] = value;
            let (transport, _) = transport_once(HttpResponse::ok(body.to_string()));

            let result = RpcCommand::detail(&DetailRequest::new("mizdebsk", "override"))
                .execute(&anonymous(), &transport)
                .await;

            assert!(
                matches!(result, Err(CoprError::Protocol(_))),
                "mutating `{}` should be a protocol failure",
                field
            );
        }
    }

    #[tokio::test]
    async fn test_missing_detail_object() {
        let (transport, _) =
            transport_once(HttpResponse::ok(json!({"output": "ok"}).to_string()));

        let err = RpcCommand::detail(&DetailRequest::new("mizdebsk", "override"))
            .execute(&anonymous(), &transport)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("missing field `detail`"));
    }
}
