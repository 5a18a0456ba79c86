// PlaygroundList command: projects promoted to the playground

use super::list::decode_projects;
use super::RpcCommand;
use crate::domain::{PlaygroundListRequest, PlaygroundListResult};

impl RpcCommand<PlaygroundListResult> {
    /// `GET /api/playground/list/`
    pub fn playground_list(_request: &PlaygroundListRequest) -> Self {
        RpcCommand::new("playground_list", "/api/playground/list/", |envelope| {
            // Playground entries span many owners, so each must name its own
            Ok(PlaygroundListResult {
                projects: decode_projects(envelope, None)?,
            })
        })
    }
}
