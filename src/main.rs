//! MOTTO task intent classifier - Main Entry Point

use clap::{Parser, Subcommand};
use motto_classifier::config::ClassifierConfig;
use motto_classifier::observability::init_default_logging;
use motto_classifier::server::{self, category_listing};
use motto_classifier::ClassifierService;
use std::path::{Path, PathBuf};
use std::process;
use tokio::signal;
use tracing::{error, info};

/// Keyword-based task intent classifier
#[derive(Parser)]
#[command(name = "motto-classifier")]
#[command(about = "Classify user requests into MOTTO task categories")]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", env = "MOTTO_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify text and print the result
    Classify {
        /// Text to classify
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print whether text is a task request
    IsTask {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Run the HTTP service
    Serve,
    /// List categories and their keywords
    Categories,
    /// Validate configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_default_logging(cli.verbose);

    let config = match load_configuration(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Classify { text, json } => classify_command(&config, &text.join(" "), json),
        Commands::IsTask { text } => is_task_command(&config, &text.join(" ")),
        Commands::Serve => serve_command(config).await,
        Commands::Categories => categories_command(),
        Commands::Config { show } => config_command(&config, show),
    };

    if let Err(e) = result {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_configuration(
    config_path: Option<&Path>,
) -> Result<ClassifierConfig, Box<dyn std::error::Error>> {
    let mut config = match config_path {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            ClassifierConfig::load_from_file(path)?
        }
        None => {
            let default_paths = ["motto.toml", "config/motto.toml"];
            match default_paths.iter().map(Path::new).find(|p| p.exists()) {
                Some(path) => {
                    info!("Loading configuration from: {}", path.display());
                    ClassifierConfig::load_from_file(path)?
                }
                None => {
                    info!("No configuration file found, using defaults");
                    ClassifierConfig::default()
                }
            }
        }
    };

    config.apply_env_overrides()?;
    Ok(config)
}

fn classify_command(
    config: &ClassifierConfig,
    text: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = ClassifierService::from_config(config).classify(text)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("category:   {}", result.category);
    println!("confidence: {:.2}", result.confidence);
    if let Some(subject) = &result.details.subject {
        println!("subject:    {subject}");
    }
    println!("complexity: {:?}", result.details.complexity);
    println!("urgency:    {:?}", result.details.urgency);
    if !result.details.context.is_empty() {
        println!("matched:    {}", result.details.context.join(", "));
    }
    Ok(())
}

fn is_task_command(config: &ClassifierConfig, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let is_task = ClassifierService::from_config(config).is_task_request(text)?;
    println!("{is_task}");
    Ok(())
}

fn categories_command() -> Result<(), Box<dyn std::error::Error>> {
    for info in category_listing() {
        println!("{:<12} {}", info.category, info.keywords.join(", "));
    }
    Ok(())
}

fn config_command(config: &ClassifierConfig, show: bool) -> Result<(), Box<dyn std::error::Error>> {
    if show {
        println!("{}", toml::to_string_pretty(config)?);
    }

    info!("Configuration validation complete");
    Ok(())
}

async fn serve_command(config: ClassifierConfig) -> Result<(), Box<dyn std::error::Error>> {
    info!(
        "Starting MOTTO classifier service v{}",
        env!("CARGO_PKG_VERSION")
    );

    let service = ClassifierService::from_config(&config);
    let addr = server::resolve_addr(&config.server.host, config.server.port)?;

    server::serve(service, addr, shutdown_signal()).await?;

    info!("Application shutdown complete");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT, shutting down gracefully..."),
        _ = terminate => info!("Received SIGTERM, shutting down gracefully..."),
    }
}
