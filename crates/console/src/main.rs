use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use backoffice_console::{Console, ConsoleConfig, Protection, ResourceKind};
use backoffice_observability::LogFormat;

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Backoffice admin console", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Backend base URL (overrides BACKOFFICE_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory for persisted session state (overrides BACKOFFICE_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log output: json or pretty (overrides BACKOFFICE_LOG_FORMAT)
    #[arg(long, global = true)]
    log_format: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and load permissions
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },

    /// Sign out and clear local state
    Logout,

    /// Show the signed-in identity, permissions and visible menu
    Whoami,

    /// Run the gates of a page
    Visit {
        /// Page path, e.g. /employees
        path: String,
    },

    /// Explain the permission gate of a page
    Explain { path: String },

    /// List every page and its gates
    Routes,

    /// Fetch a resource list (employees, orders, delivery-slots, ...)
    List { resource: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ConsoleConfig::from_env().context("invalid environment")?;
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url)?;
    }
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(format) = cli.log_format {
        config.log_format = format.parse::<LogFormat>().map_err(anyhow::Error::msg)?;
    }

    backoffice_observability::init_with(config.log_format);

    let mut console = Console::open(config).context("failed to open console state")?;
    console.hydrate();

    match cli.command {
        Commands::Login { email, password } => {
            let identity = console.login(&email, &password).await?;
            print_json(&json!({
                "identity": identity,
                "permissions": console.sidebar().permissions().sorted(),
                "location": console.navigator().location(),
            }))?;
        }
        Commands::Logout => {
            console.logout().await?;
            print_json(&json!({ "signedOut": true }))?;
        }
        Commands::Whoami => {
            print_json(&json!({
                "authenticated": console.auth().is_authenticated(),
                "identity": console.auth().identity(),
                "permissions": console.sidebar().permissions().sorted(),
                "menu": console.sidebar().visible_menu(),
            }))?;
        }
        Commands::Visit { path } => {
            let outcome = console.visit(&path);
            print_json(&json!({
                "page": outcome,
                "location": console.navigator().location(),
            }))?;
        }
        Commands::Explain { path } => match console.explain(&path)? {
            Some(explanation) => print_json(&explanation)?,
            None => print_json(&json!({ "path": path, "permissionGate": false }))?,
        },
        Commands::Routes => {
            let routes: Vec<_> = console
                .routes()
                .iter()
                .map(|route| {
                    let gates = match &route.protection {
                        Protection::Public => json!("public"),
                        Protection::Session => json!("session"),
                        Protection::Permission(cfg) => json!({
                            "required": cfg.request().required(),
                            "mode": cfg.request().mode(),
                            "fallback": cfg.fallback_route(),
                        }),
                    };
                    json!({ "path": route.pattern, "title": route.title, "gates": gates })
                })
                .collect();
            print_json(&routes)?;
        }
        Commands::List { resource } => {
            let kind: ResourceKind = resource.parse()?;
            let items = console.list(kind).await?;
            print_json(&items)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
