//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod analyze;
pub mod post;
pub mod serve;
pub mod status;

/// Logic Hunter - SEO keyword analysis and blog post generation
#[derive(Parser)]
#[command(name = "hunter")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze a keyword or imported keyword data
    Analyze(analyze::AnalyzeArgs),

    /// Generate an SEO blog post for a keyword
    Post(post::PostArgs),

    /// Show which analysis modes are available
    Status,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
            Commands::Post(args) => post::execute(args).await,
            Commands::Status => status::execute(),
        }
    }
}
