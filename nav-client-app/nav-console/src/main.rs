use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{error, info};

use nav_core::{ingest, AliasRegistry, MenuSource, NavOutcome, Navigation, NavigationService, UserInfo, DEFAULT_ROLE};
use nav_infrastructure::{build_client, MemorySessionStore, ReqwestTransport};
use nav_shared::config::NavConfig;

#[derive(Parser)]
#[command(name = "nav-console", version)]
#[command(about = "Inspect the menu tree, route table and route guards")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Role the menu is filtered for
    #[arg(long, default_value = DEFAULT_ROLE)]
    role: String,

    /// Menu payload (backend JSON) to use instead of the configured source
    #[arg(long)]
    payload: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the route table
    Routes,
    /// Print the menu tree visible to the role
    Menu,
    /// Resolve a path through the route guard
    Resolve { path: String },
    /// Load a live session from the configured backend
    Fetch {
        /// Id of the logged-in user
        #[arg(long)]
        user_id: u64,

        /// Bearer token of the session
        #[arg(long)]
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = NavConfig::load().context("Failed to load configuration")?;
    nav_shared::telemetry::init_telemetry(&config.log)?;
    info!("{} starting ({})", config.app.name, config.app.env);

    let aliases = Arc::new(AliasRegistry::builtin());
    let store = Arc::new(match &cli.command {
        Commands::Fetch { user_id, .. } => MemorySessionStore::logged_in(UserInfo {
            id: *user_id,
            ..UserInfo::default()
        }),
        _ => MemorySessionStore::new(),
    });

    let client = build_client(config.api.timeout_seconds)?;
    let mut transport = ReqwestTransport::new(client, config.api.base_url.clone());
    if let Commands::Fetch { token: Some(token), .. } = &cli.command {
        transport = transport.with_token(token.clone());
    }

    let service = NavigationService::new(
        Arc::new(transport),
        store,
        Arc::clone(&aliases),
        config.menu.clone(),
        config.routes.clone(),
    );

    // A broken bundled catalog is a build defect; refuse to start.
    if let Err(e) = service.bootstrap() {
        error!("Bundled catalog rejected: {}", e);
        return Err(e.into());
    }

    let navigation = match (&cli.command, &cli.payload) {
        (Commands::Fetch { .. }, _) => service.load_session().await?,
        (_, Some(file)) => from_payload(file, &aliases, &cli.role, &config)?,
        _ => service.load_for_role(&cli.role).await?,
    };

    let output = match &cli.command {
        Commands::Routes | Commands::Fetch { .. } => serde_json::to_value(&navigation)?,
        Commands::Menu => serde_json::to_value(navigation.menu())?,
        Commands::Resolve { path } => resolve(&navigation, path)?,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn from_payload(file: &Path, aliases: &AliasRegistry, role: &str, config: &NavConfig) -> anyhow::Result<Navigation> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read payload {}", file.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Payload {} is not JSON", file.display()))?;

    let tree = ingest(MenuSource::Fetched(payload), aliases)?;
    Ok(Navigation::build(&tree, aliases, role, config.routes.clone())?)
}

fn resolve(navigation: &Navigation, path: &str) -> anyhow::Result<Value> {
    let outcome = navigation.guard(path)?;
    let kind = match outcome {
        NavOutcome::Allowed(_) => "allowed",
        NavOutcome::Forbidden(_) => "forbidden",
        NavOutcome::NotFound(_) => "not_found",
    };
    Ok(json!({
        "path": path,
        "role": navigation.role(),
        "outcome": kind,
        "route": outcome.record(),
    }))
}
