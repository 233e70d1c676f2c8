//! `rest-router` command line.
//!
//! ```text
//! rest-router serve   [--config app.toml]          serve the route table over HTTP
//! rest-router check   [--config app.toml]          validate config, print routes
//! rest-router resolve [--config app.toml] <PATH>   match a path offline
//! ```
//!
//! Without `--config` the built-in demo routes are used.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use rest_router::config::{load_config, AppConfig};
use rest_router::demo;
use rest_router::lifecycle::startup::build_dispatcher;
use rest_router::observability::logging;
use rest_router::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "rest-router")]
#[command(about = "Declarative REST path router", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the configured routes over HTTP
    Serve,
    /// Validate the configuration and print the route table
    Check,
    /// Resolve a path against the route table
    Resolve {
        /// Decoded request path, e.g. /users/42
        path: String,
    },
}

fn load(path: Option<&Path>) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };
    if config.routes.is_empty() {
        config.routes = demo::default_routes();
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load(cli.config.as_deref())?;

    logging::init(&config.observability)?;

    let registry = demo::registry()?;
    let dispatcher = build_dispatcher(&config, &registry)?;

    match cli.command {
        Commands::Serve => {
            tracing::info!(
                bind_address = %config.listener.bind_address,
                routes = dispatcher.router().len(),
                testable = config.server.testable,
                "Configuration loaded"
            );

            let listener = TcpListener::bind(&config.listener.bind_address).await?;
            let shutdown = Shutdown::new();
            let server = HttpServer::new(config, dispatcher);
            server.run(listener, shutdown.subscribe()).await?;

            tracing::info!("Shutdown complete");
        }
        Commands::Check => {
            for (position, entry) in dispatcher.router().entries().iter().enumerate() {
                println!(
                    "{:>3}  {:<40} {:<16} {}",
                    position,
                    entry.pattern().as_str(),
                    entry.handler().name(),
                    entry.name()
                );
            }
            println!("{} route(s) OK", dispatcher.router().len());
        }
        Commands::Resolve { path } => match dispatcher.router().resolve(&path) {
            Ok(bound) => {
                let json = serde_json::json!({
                    "route": bound.entry().name(),
                    "pattern": bound.entry().pattern().as_str(),
                    "handler": bound.handler().name(),
                    "variables": bound.variables(),
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            Err(unmatched) => {
                eprintln!("No route matches {}", unmatched);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
