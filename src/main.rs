// Copyright 2026 LaunchHub Contributors
// SPDX-License-Identifier: Apache-2.0

//! LaunchHub CLI
//!
//! Command-line front end for the dispatch hub.
//!
//! # Usage
//!
//! ```bash
//! # List registered providers
//! launch-hub providers
//!
//! # List available frameworks
//! launch-hub frameworks
//!
//! # Submit a job
//! launch-hub launch ibm --params '{"shots": 100}'
//!
//! # Poll a job once
//! launch-hub status <job-id> ibm
//!
//! # Preview parameter optimization
//! launch-hub optimize '{"shots": 100}'
//! ```

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use launch_hub::job::JobParams;
use launch_hub::provider::ProviderRegistry;
use launch_hub::{catalog::FrameworkCatalog, Config, Error, JobOrchestrator, Result, VERSION};

/// LaunchHub job dispatch hub
#[derive(Parser)]
#[command(name = "launch-hub")]
#[command(author = "LaunchHub Contributors")]
#[command(version = VERSION)]
#[command(about = "Rate-limited multi-provider job dispatch hub")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); defaults to the
    /// configured logging.level
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered providers
    Providers,

    /// List available frameworks
    Frameworks,

    /// Submit a job to a provider
    Launch {
        /// Provider or framework name
        name: String,

        /// Job parameters as inline JSON
        #[arg(long)]
        params: Option<String>,

        /// Job parameters from a JSON file (overrides --params)
        #[arg(long)]
        params_file: Option<PathBuf>,
    },

    /// Poll a job's status once
    Status {
        /// Provider-assigned job id
        job_id: String,

        /// Provider or framework name
        name: String,
    },

    /// Preview parameter optimization without submitting
    Optimize {
        /// Job parameters as inline JSON
        params: String,
    },

    /// Show effective configuration
    Config,

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so logging can honor its level and format.
    let config = Config::load(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    init_logging(level, &config.logging.format);

    match cli.command {
        Commands::Providers => {
            let registry = ProviderRegistry::from_config(&config.providers);
            println!("{}", serde_json::to_string_pretty(&registry.list())?);
        }

        Commands::Frameworks => {
            let catalog = FrameworkCatalog::default();
            println!("{}", serde_json::to_string_pretty(catalog.list())?);
        }

        Commands::Launch {
            name,
            params,
            params_file,
        } => {
            config.validate()?;
            let params = read_params(params.as_deref(), params_file.as_deref())?;
            let hub = JobOrchestrator::from_config(&config)?;

            match hub.launch(&name, &params).await {
                Ok(handle) => {
                    println!("{}", serde_json::to_string_pretty(&handle)?);
                }
                Err(e) => {
                    eprintln!("Launch failed ({}): {}", e.status_code(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Status { job_id, name } => {
            config.validate()?;
            let hub = JobOrchestrator::from_config(&config)?;

            match hub.check_job(&job_id, &name).await {
                Ok(status) => {
                    println!("{}: {}", job_id, status);
                }
                Err(e) => {
                    eprintln!("Status check failed ({}): {}", e.status_code(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Optimize { params } => {
            let params: JobParams = serde_json::from_str(&params)?;
            let optimized = launch_hub::optimizer::optimize(&params);
            println!("{}", serde_json::to_string_pretty(&optimized)?);
        }

        Commands::Config => {
            // Credentials are skipped by the config's serializer.
            println!("{}", serde_yaml::to_string(&config)?);
        }

        Commands::Validate => match config.validate() {
            Ok(()) => {
                println!("Configuration is valid");
            }
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

/// Initialize logging with tracing.
fn init_logging(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true))
            .init();
    }
}

/// Resolve job parameters from a file or inline JSON, defaulting to `{}`.
fn read_params(inline: Option<&str>, file: Option<&Path>) -> Result<JobParams> {
    let raw = match (file, inline) {
        (Some(path), _) => std::fs::read_to_string(path)?,
        (None, Some(json)) => json.to_string(),
        (None, None) => "{}".to_string(),
    };
    serde_json::from_str(&raw).map_err(Error::from)
}
