// Result Types (decoded from RPC envelopes)

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Project identifier (`owner/name`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProjectId {
    pub user_name: String,
    pub project_name: String,
}

impl ProjectId {
    pub fn new(user_name: impl Into<String>, project_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            project_name: project_name.into(),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user_name, self.project_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListResult {
    pub projects: Vec<ProjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaygroundListResult {
    pub projects: Vec<ProjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YumRepository {
    pub name: String,
    pub base_url: String,
}

impl YumRepository {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailResult {
    pub description: String,
    pub instructions: String,
    pub additional_repos: String,
    /// In the order the server listed them
    pub yum_repositories: Vec<YumRepository>,
    pub last_modified: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildResult {
    pub build_id: i64,
    pub message: String,
}
