// List command: projects owned by one user

use serde_json::Value;

use super::envelope::str_field;
use super::{Envelope, RpcCommand};
use crate::domain::{ListRequest, ListResult, ProjectId};
use crate::error::{CoprError, Result};

pub const PROJECTS_FIELD: &str = "repos";

impl RpcCommand<ListResult> {
    /// `GET /api/coprs/{user}/`
    pub fn list(request: &ListRequest) -> Self {
        let owner = request.user_name.clone();
        RpcCommand::new(
            "list",
            format!("/api/coprs/{}/", request.user_name),
            move |envelope| {
                Ok(ListResult {
                    projects: decode_projects(envelope, Some(owner.as_str()))?,
                })
            },
        )
    }
}

/// Decode the project array shared by List and PlaygroundList
///
/// An entry is either a `"user/project"` string or an object naming the
/// project in `coprname` (or `name`) and, optionally, its owner in
/// `username`. Entries without an owner fall back to `default_owner`.
pub(super) fn decode_projects(
    envelope: &Envelope,
    default_owner: Option<&str>,
) -> Result<Vec<ProjectId>> {
    envelope
        .array_field(PROJECTS_FIELD)?
        .iter()
        .map(|entry| decode_project(entry, default_owner))
        .collect()
}

fn decode_project(entry: &Value, default_owner: Option<&str>) -> Result<ProjectId> {
    match entry {
        Value::String(full_name) => match full_name.split_once('/') {
            Some((user, project)) if !user.is_empty() && !project.is_empty() => {
                Ok(ProjectId::new(user, project))
            }
            _ => Err(CoprError::protocol(format!(
                "project entry `{}` is not of the form user/project",
                full_name
            ))),
        },
        Value::Object(object) => {
            let project = if object.contains_key("coprname") {
                str_field(object, "coprname")?
            } else {
                str_field(object, "name")?
            };
            let user = match object.get("username") {
                Some(_) => str_field(object, "username")?,
                None => default_owner.ok_or_else(|| {
                    CoprError::protocol(format!("project entry `{}` has no owner", project))
                })?,
            };
            Ok(ProjectId::new(user, project))
        }
        other => Err(CoprError::protocol(format!(
            "unexpected project entry: {}",
            other
        ))),
    }
}
