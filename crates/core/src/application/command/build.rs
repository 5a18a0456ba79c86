// Build command: submit source RPMs to a project

use super::{Envelope, FormArgs, RpcCommand};
use crate::domain::{BuildRequest, BuildResult};
use crate::error::Result;

impl RpcCommand<BuildResult> {
    /// `POST /api/coprs/{user}/{project}/new_build/` (authenticated)
    pub fn build(request: &BuildRequest) -> Self {
        RpcCommand::new(
            "build",
            format!(
                "/api/coprs/{}/{}/new_build/",
                request.user_name, request.project_name
            ),
            decode_build,
        )
        .with_form(build_form(request))
        .authenticated()
    }
}

/// `pkgs` is always sent, even when no source RPM was given
fn build_form(request: &BuildRequest) -> FormArgs {
    let mut form = vec![("pkgs".to_string(), request.source_rpms().join(" "))];

    if let Some(memory) = &request.memory {
        form.push(("memory".to_string(), memory.clone()));
    }
    if let Some(timeout) = &request.timeout {
        form.push(("timeout".to_string(), timeout.clone()));
    }

    form
}

fn decode_build(envelope: &Envelope) -> Result<BuildResult> {
    Ok(BuildResult {
        build_id: envelope.i64_field("id")?,
        message: envelope.str_field("message")?.to_string(),
    })
}
