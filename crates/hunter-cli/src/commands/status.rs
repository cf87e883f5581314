//! Configuration status command.

use anyhow::Result;
use colored::Colorize;
use hunter_core::{AnalysisMode, HunterConfig};

pub fn execute() -> Result<()> {
    let config = match HunterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!(
                "  {}",
                "Set GEMINI_API_KEY in the environment or a .env file.".dimmed()
            );
            return Ok(());
        }
    };

    println!("{}", "Logic Hunter Status".bold());
    println!();
    println!(
        "  {} Gemini    {} {}",
        "✓".green(),
        config.gemini.model,
        format!("({})", config.gemini.base_url).dimmed()
    );

    if config.external_api_configured() {
        println!("  {} Naver API configured", "✓".green());
    } else {
        println!(
            "  {} Naver API not configured {}",
            "·".yellow(),
            "(NAVER_ACCESS_KEY, NAVER_SECRET_KEY, NAVER_CUSTOMER_ID)".dimmed()
        );
    }

    println!();
    println!("{}", "Analysis modes".bold());
    for mode in AnalysisMode::ALL {
        let available = !mode.requires_external_api() || config.external_api_configured();
        let marker = if available { "✓".green() } else { "✗".red() };
        println!("  {} {:<10} {}", marker, mode.as_str(), mode.label().dimmed());
    }

    Ok(())
}
