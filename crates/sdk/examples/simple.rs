//! Simple SDK Example
//!
//! Demonstrates basic usage of the Copr SDK.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example simple -- <user> [<project>]
//! ```
//!
//! Set `COPR_URL` to talk to a Copr instance other than the public one.

use copr_sdk::{Configuration, CoprService, DetailRequest, ListRequest, DEFAULT_URL};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let user = args.next().unwrap_or_else(|| "msuchy".to_string());
    let project = args.next();

    let url = std::env::var("COPR_URL").unwrap_or_else(|_| DEFAULT_URL.to_string());

    println!("Copr SDK - Simple Example");
    println!("=========================\n");

    // 1. Open a session
    println!("1. Opening session against {}...", url);
    let session = CoprService::new().new_session(Configuration::new(url))?;
    println!("   ✓ Session open\n");

    // 2. List projects
    println!("2. Listing projects of {}...", user);
    let list = session.list(&ListRequest::new(&user)).await?;
    for project in &list.projects {
        println!("   - {}", project);
    }
    println!();

    // 3. Project detail
    if let Some(project) = project {
        println!("3. Fetching detail of {}/{}...", user, project);
        let detail = session.detail(&DetailRequest::new(&user, project)).await?;
        println!("   Description: {}", detail.description);
        println!("   Last modified: {}", detail.last_modified);
        for repo in &detail.yum_repositories {
            println!("   - {} -> {}", repo.name, repo.base_url);
        }
        println!();
    }

    session.close();
    println!("✓ Done");

    Ok(())
}
