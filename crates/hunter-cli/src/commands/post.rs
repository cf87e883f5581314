//! Blog post generation command.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use hunter_core::{export, GeminiClient, HunterConfig, PostGenerationOptions, PostWriter};
use std::path::PathBuf;
use std::sync::Arc;

use crate::output;

#[derive(Args)]
pub struct PostArgs {
    /// Keyword to write about
    pub keyword: String,

    /// Writing style: review, info or marketing
    #[arg(long, short, default_value = "review")]
    pub style: String,

    /// Target length: 500, 1000 or 1500
    #[arg(long, short, default_value = "1000")]
    pub length: String,

    /// Write the post as a text file into this directory
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Print the raw JSON result instead of the formatted post
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: PostArgs) -> Result<()> {
    let config = HunterConfig::from_env()?;
    let writer = PostWriter::new(Arc::new(GeminiClient::new(&config.gemini)?));
    let options = PostGenerationOptions::from_keys(&args.style, &args.length);

    let spinner = output::spinner("블로그 글 생성 중...");
    let post = writer.generate(&args.keyword, &options).await;
    spinner.finish_and_clear();
    let post = post?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&post)?);
    } else {
        output::print_post(&post);
    }

    if let Some(dir) = &args.export {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
        let path = export::write_post_txt(dir, &args.keyword, &post)?;
        eprintln!("{} {}", "Exported".green(), path.display());
    }

    Ok(())
}
