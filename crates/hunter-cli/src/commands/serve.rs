//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use hunter_core::HunterConfig;
use hunter_web::ServeOptions;
use std::path::PathBuf;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "PORT", default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Directory of a built frontend to serve alongside the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,

    /// Also write logs to a file
    #[arg(long)]
    pub log: bool,

    /// Log file path (implies --log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = HunterConfig::from_env()?;

    println!();
    println!("  {} {}", "Logic Hunter".cyan().bold(), "Web Server".bold());
    println!();
    if args.static_dir.is_some() {
        println!(
            "  {}  http://{}:{}",
            "Frontend".green(),
            args.host,
            args.port
        );
    }
    println!(
        "  {}       http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!(
        "  {}     {}",
        "Model".green(),
        config.gemini.model
    );
    let api_mode = if config.external_api_configured() {
        "available".green()
    } else {
        "not configured".yellow()
    };
    println!("  {}  {}", "API mode".green(), api_mode);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    let options = ServeOptions {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
    };
    hunter_web::run_server(&config, options).await?;

    Ok(())
}
