//! CLI entry point for essayist

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "essayist")]
#[command(version)]
#[command(about = "A small essay-publishing site: flat-file content, tag filtering, read API", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the read API server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to (overrides config)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// List site content (essay, tag)
    List {
        /// Type of content to list
        #[arg(default_value = "essay")]
        r#type: String,
    },

    /// Validate every content file and report all errors
    Check,

    /// Scaffold a new essay
    New {
        /// Title of the new essay
        title: String,

        /// Tags for the new essay
        #[arg(short, long)]
        tag: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "essayist=debug,info"
    } else {
        "essayist=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let site = essayist::Site::new(&base_dir)?;

    match cli.command {
        Commands::Serve { port, ip } => {
            let port = port.unwrap_or(site.config.server.port);
            let ip = ip.unwrap_or_else(|| site.config.server.ip.clone());
            tracing::info!("Starting server at http://{}:{}", ip, port);
            essayist::server::start(site, &ip, port).await?;
        }

        Commands::List { r#type } => {
            essayist::commands::list::run(&site, &r#type)?;
        }

        Commands::Check => {
            essayist::commands::check::run(&site)?;
        }

        Commands::New { title, tag } => {
            tracing::info!("Creating new essay: {}", title);
            essayist::commands::new::run(&site, &title, &tag)?;
        }
    }

    Ok(())
}
