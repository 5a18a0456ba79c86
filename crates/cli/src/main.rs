//! Copr CLI - Command-line interface for the Copr build service

mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use copr_sdk::{
    BuildRequest, ConfigLoader, Configuration, CoprService, DetailRequest, ListRequest,
    PlaygroundListRequest, ProjectId, Session, YumRepository,
};
use serde::Serialize;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Parser, Debug)]
#[command(name = "copr")]
#[command(about = "Copr build service client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (default: `copr` on the XDG config path)
    #[arg(long, env = "COPR_CONFIG", global = true)]
    config: Option<String>,

    /// Copr base URL, overriding the configuration file
    #[arg(long, env = "COPR_URL", global = true)]
    url: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List projects of a user
    List {
        /// Project owner
        user: String,
    },

    /// Show details of a project
    Detail {
        /// Project owner
        user: String,

        /// Project name
        project: String,
    },

    /// List playground projects
    PlaygroundList,

    /// Submit a build of source RPMs
    Build {
        /// Project owner
        user: String,

        /// Project name
        project: String,

        /// Source RPM URLs
        srpms: Vec<String>,

        /// Memory limit for the build (MB)
        #[arg(long)]
        memory: Option<String>,

        /// Build timeout (seconds)
        #[arg(long)]
        timeout: Option<String>,
    },
}

#[derive(Tabled)]
struct ProjectRow {
    owner: String,
    project: String,
}

impl From<&ProjectId> for ProjectRow {
    fn from(id: &ProjectId) -> Self {
        Self {
            owner: id.user_name.clone(),
            project: id.project_name.clone(),
        }
    }
}

#[derive(Tabled)]
struct RepoRow {
    name: String,
    base_url: String,
}

impl From<&YumRepository> for RepoRow {
    fn from(repo: &YumRepository) -> Self {
        Self {
            name: repo.name.clone(),
            base_url: repo.base_url.clone(),
        }
    }
}

fn load_configuration(cli: &Cli) -> Result<Configuration> {
    let custom_path = cli
        .config
        .as_deref()
        .map(|path| PathBuf::from(shellexpand::tilde(path).into_owned()));

    let mut configuration = ConfigLoader::from_env()
        .load(custom_path.as_deref())
        .context("Failed to load Copr configuration")?;

    if let Some(url) = &cli.url {
        configuration.set_url(url.clone());
    }

    Ok(configuration)
}

fn build_request(
    user: String,
    project: String,
    srpms: Vec<String>,
    memory: Option<String>,
    timeout: Option<String>,
) -> BuildRequest {
    let mut request = BuildRequest::new(user, project);
    for srpm in srpms {
        request.add_source_rpm(srpm);
    }
    request.memory = memory;
    request.timeout = timeout;
    request
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_projects(heading: &str, projects: &[ProjectId]) {
    println!("{}", heading.cyan().bold());
    if projects.is_empty() {
        println!("{}", "No projects".yellow());
        return;
    }
    let rows: Vec<ProjectRow> = projects.iter().map(ProjectRow::from).collect();
    println!("{}", Table::new(rows));
}

async fn run(cli: Cli, session: &Session) -> Result<()> {
    match cli.command {
        Commands::List { user } => {
            let result = session
                .list(&ListRequest::new(&user))
                .await
                .with_context(|| format!("Failed to list projects of {}", user))?;

            if cli.json {
                print_json(&result)?;
            } else {
                print_projects(&format!("Projects of {}:", user), &result.projects);
            }
        }

        Commands::PlaygroundList => {
            let result = session
                .playground_list(&PlaygroundListRequest::new())
                .await
                .context("Failed to list playground projects")?;

            if cli.json {
                print_json(&result)?;
            } else {
                print_projects("Playground projects:", &result.projects);
            }
        }

        Commands::Detail { user, project } => {
            let result = session
                .detail(&DetailRequest::new(&user, &project))
                .await
                .with_context(|| format!("Failed to get detail of {}/{}", user, project))?;

            if cli.json {
                print_json(&result)?;
            } else {
                println!("{}", format!("{}/{}", user, project).cyan().bold());
                println!("  {} {}", "Description:".bold(), result.description);
                println!("  {} {}", "Instructions:".bold(), result.instructions);
                println!("  {} {}", "Additional repos:".bold(), result.additional_repos);
                println!("  {} {}", "Last modified:".bold(), result.last_modified);
                println!();

                let rows: Vec<RepoRow> = result.yum_repositories.iter().map(RepoRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Build {
            user,
            project,
            srpms,
            memory,
            timeout,
        } => {
            let request = build_request(user, project, srpms, memory, timeout);
            let result = session.build(&request).await.with_context(|| {
                format!(
                    "Failed to submit build to {}/{}",
                    request.user_name, request.project_name
                )
            })?;

            if cli.json {
                print_json(&result)?;
            } else {
                println!(
                    "{}",
                    format!("✓ Build {} submitted", result.build_id).green().bold()
                );
                println!("  {}", result.message);
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let configuration = load_configuration(&cli)?;
    let session = CoprService::new()
        .new_session(configuration)
        .context("Failed to open Copr session")?;

    let outcome = run(cli, &session).await;
    session.close();
    outcome
}
