//! Keyword analysis command.

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;
use hunter_core::{export, AnalysisMode, AnalysisRequest, Analyzer, GeminiClient, HunterConfig};
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Keyword, or imported data in manual mode. Use "-" to read stdin.
    pub input: Option<String>,

    /// Analysis mode: simulation, manual or api
    #[arg(long, short, default_value = "simulation")]
    pub mode: AnalysisMode,

    /// Read the input from a file
    #[arg(long, short, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Write the result as JSON and the niche keywords as CSV into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the raw JSON result instead of the report
    #[arg(long)]
    pub json: bool,
}

/// Resolve the analysis input from the argument, a file, or stdin.
fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    match args.input.as_deref() {
        Some("-") => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
        Some(input) => Ok(input.to_string()),
        None => bail!("Provide a keyword, '-' for stdin, or --file <path>."),
    }
}

pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let config = HunterConfig::from_env()?;

    if args.mode.requires_external_api() && !config.external_api_configured() {
        bail!(
            "Naver API is not configured. Set NAVER_ACCESS_KEY, NAVER_SECRET_KEY and NAVER_CUSTOMER_ID."
        );
    }

    let request = AnalysisRequest::new(args.mode, read_input(&args)?)?;
    let analyzer = Analyzer::new(Arc::new(GeminiClient::new(&config.gemini)?));

    let spinner = output::spinner(&format!("{} 분석 중...", args.mode.label()));
    let result = analyzer.run(&request).await;
    spinner.finish_and_clear();
    let result = result?;

    let title = request.display_title(&result);

    if args.json {
        println!("{}", export::analysis_json(&result)?);
    } else {
        output::print_analysis(&title, args.mode, &result);
    }

    if let Some(dir) = &args.export {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let json_path = export::write_analysis_json(dir, &title, &result)?;
        let csv_path = export::write_niche_csv(dir, &title, &result)?;
        eprintln!("{} {}", "Exported".green(), json_path.display());
        eprintln!("{} {}", "Exported".green(), csv_path.display());
    }

    Ok(())
}
