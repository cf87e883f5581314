//! Export formats for analysis results and posts.

use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::model::{NicheKeyword, SeoAnalysisResult};
use crate::error::{HunterError, HunterResult};
use crate::post::model::BlogPostResult;

/// Header row of the niche keyword CSV.
pub const NICHE_CSV_HEADER: [&str; 4] = ["keyword", "searchVolume", "competitionScore", "reason"];

/// Byte-order mark prepended to CSV output so spreadsheet tools detect UTF-8.
pub const UTF8_BOM: char = '\u{FEFF}';

/// Pretty-printed JSON of the whole result.
pub fn analysis_json(result: &SeoAnalysisResult) -> HunterResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// CSV of the niche keywords, with a leading BOM. Fields containing a comma
/// (or a quote or line break) are quoted, with inner quotes doubled.
pub fn niche_keywords_csv(keywords: &[NicheKeyword]) -> HunterResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(NICHE_CSV_HEADER)?;
    for k in keywords {
        let volume = k.search_volume.to_string();
        let score = k.competition_score.to_string();
        writer.write_record([
            k.keyword.as_str(),
            volume.as_str(),
            score.as_str(),
            k.reason.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| HunterError::Io(e.into_error()))?;
    let body = String::from_utf8(bytes)
        .map_err(|e| HunterError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))?;

    let mut out = String::with_capacity(body.len() + UTF8_BOM.len_utf8());
    out.push(UTF8_BOM);
    out.push_str(&body);
    Ok(out)
}

/// Plain-text rendering of a post: title line, separator, body.
pub fn post_text(post: &BlogPostResult) -> String {
    format!("제목: {}\n\n---\n\n{}", post.title, post.content)
}

/// Make a user-supplied title safe to use as a file name stem.
pub fn file_stem(title: &str) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    if stem.is_empty() {
        "untitled".to_string()
    } else {
        stem
    }
}

/// Write `{title}_analysis.json` into `dir`.
pub fn write_analysis_json(dir: &Path, title: &str, result: &SeoAnalysisResult) -> HunterResult<PathBuf> {
    let path = dir.join(format!("{}_analysis.json", file_stem(title)));
    fs::write(&path, analysis_json(result)?)?;
    Ok(path)
}

/// Write `{title}_analysis_niche_keywords.csv` into `dir`.
pub fn write_niche_csv(dir: &Path, title: &str, result: &SeoAnalysisResult) -> HunterResult<PathBuf> {
    let path = dir.join(format!("{}_analysis_niche_keywords.csv", file_stem(title)));
    fs::write(&path, niche_keywords_csv(&result.niche_keywords)?)?;
    Ok(path)
}

/// Write `{keyword}_post.txt` into `dir`.
pub fn write_post_txt(dir: &Path, keyword: &str, post: &BlogPostResult) -> HunterResult<PathBuf> {
    let path = dir.join(format!("{}_post.txt", file_stem(keyword)));
    fs::write(&path, post_text(post))?;
    Ok(path)
}
