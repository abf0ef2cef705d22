//! CLI entry point for minblog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "minblog")]
#[command(version)]
#[command(about = "A minimal static blog generator", long_about = None)]
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
    /// Build static files
    #[command(alias = "b")]
    Build {
        /// Content identifiers to build (defaults to every post found)
        ids: Vec<String>,

        /// Stop at the first post that fails to write
        #[arg(long)]
        fail_fast: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// List posts
    List,

    /// Clean the output directory
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "minblog=debug,info"
    } else {
        "minblog=info"
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

    let blog = minblog::Blog::new(&base_dir)?;

    match cli.command {
        Commands::Build { ids, fail_fast } => {
            tracing::info!("Building static files...");
            minblog::commands::build::run(&blog, &ids, fail_fast).await?;
            println!("Generated successfully!");
        }

        Commands::New { title } => {
            tracing::info!("Creating new post: {}", title);
            blog.new_post(&title)?;
        }

        Commands::List => {
            minblog::commands::list::run(&blog)?;
        }

        Commands::Clean => {
            tracing::info!("Cleaning output directory...");
            blog.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
