//! Terminal output formatting.

use colored::{ColoredString, Colorize};
use hunter_core::analysis::model::NicheKeyword;
use hunter_core::{AnalysisMode, BlogPostResult, CompetitionRate, SeoAnalysisResult};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// Spinner shown on stderr while waiting for the model.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print a full analysis report.
pub fn print_analysis(title: &str, mode: AnalysisMode, result: &SeoAnalysisResult) {
    let width = term_width().min(100);

    println!();
    println!("{} {}", title.cyan().bold(), format!("({})", mode.label()).dimmed());
    println!("{}", "─".repeat(width).dimmed());

    println!(
        "{:<12} {}",
        "총 검색량".bold(),
        format!("{}회/월", thousands(result.search_volume)).bold()
    );
    if let Some((pc, mobile)) = result.volume_split() {
        let share = result
            .mobile_share()
            .map(|m| format!(" (모바일 {:.0}%)", m))
            .unwrap_or_default();
        println!(
            "{:<12} PC {} · 모바일 {}{}",
            "기기별".bold(),
            thousands(pc),
            thousands(mobile),
            share.dimmed()
        );
    }
    println!(
        "{:<12} {}",
        "경쟁 강도".bold(),
        competition_colored(result.competition_rate)
    );

    let rec = &result.top_exposure_recommendation;
    println!();
    println!("{}", "상위 노출 시뮬레이션".bold());
    println!(
        "  추천 포스팅 {}~{}개",
        rec.recommended_post_count.min.to_string().green().bold(),
        rec.recommended_post_count.max.to_string().green().bold()
    );
    println!("  {} {}", "전략".dimmed(), rec.strategy);
    println!("  {} {}", "근거".dimmed(), rec.reason);

    println!();
    println!("{}", "틈새 키워드".bold());
    print_niche_table(&result.niche_keywords, width);

    if !result.seo_checklist.is_empty() {
        println!();
        println!("{}", "SEO 체크리스트".bold());
        for (i, item) in result.seo_checklist.iter().enumerate() {
            println!("  {}. {}", i + 1, item.task);
            println!("     {}", item.details.dimmed());
        }
    }

    if !result.related_keywords.is_empty() {
        println!();
        println!("{}", "연관 키워드".bold());
        println!("  {}", result.related_keywords.join(" · "));
    }
    println!();
}

fn print_niche_table(keywords: &[NicheKeyword], width: usize) {
    if keywords.is_empty() {
        println!("  {}", "추천된 틈새 키워드가 없습니다.".dimmed());
        return;
    }

    let keyword_w = 20;
    let volume_w = 10;
    let score_w = 6;
    // 2 leading spaces + 3 separators
    let reason_w = width.saturating_sub(keyword_w + volume_w + score_w + 5).max(10);

    println!(
        "  {} {} {} {}",
        pad_right("키워드", keyword_w).dimmed(),
        pad_left("검색량", volume_w).dimmed(),
        pad_left("경쟁", score_w).dimmed(),
        "이유".dimmed()
    );

    for k in keywords {
        let score = pad_left(&k.competition_score.to_string(), score_w);
        let score = match k.competition_score {
            0..=33 => score.green(),
            34..=66 => score.yellow(),
            _ => score.red(),
        };
        println!(
            "  {} {} {} {}",
            pad_right(&truncate_visual(&k.keyword, keyword_w), keyword_w),
            pad_left(&thousands(k.search_volume), volume_w),
            score,
            truncate_visual(&k.reason, reason_w)
        );
    }
}

/// Print a generated post with its tags.
pub fn print_post(post: &BlogPostResult) {
    let width = term_width().min(100);

    println!();
    println!("{}", post.title.cyan().bold());
    println!("{}", "─".repeat(width).dimmed());

    for paragraph in post.paragraphs() {
        println!("{}", paragraph);
        println!();
    }

    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").blue());
    }
    println!();
}

fn competition_colored(rate: CompetitionRate) -> ColoredString {
    match rate {
        CompetitionRate::VeryHigh => rate.label().red().bold(),
        CompetitionRate::High => rate.label().red(),
        CompetitionRate::Medium => rate.label().yellow(),
        CompetitionRate::Low => rate.label().green(),
        CompetitionRate::VeryLow => rate.label().green().bold(),
    }
}

/// Format a number with comma thousands separators.
fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Get terminal width, defaulting to 80.
fn term_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
}

/// Pad a plain string to a given visual width (right-padded).
fn pad_right(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visual))
    }
}

/// Pad a plain string to a given visual width (left-padded).
fn pad_left(s: &str, width: usize) -> String {
    let visual = UnicodeWidthStr::width(s);
    if visual >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - visual), s)
    }
}

/// Truncate a string respecting visual width.
fn truncate_visual(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut result = String::new();
    let mut current_width = 0;
    for ch in s.chars() {
        let ch_width = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width + ch_width > max_width - 2 {
            break;
        }
        result.push(ch);
        current_width += ch_width;
    }
    result.push_str("..");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_pad_uses_visual_width() {
        // Hangul syllables are two columns wide.
        assert_eq!(pad_right("캠핑", 6), "캠핑  ");
        assert_eq!(pad_left("캠핑", 6), "  캠핑");
        assert_eq!(pad_right("abcdef", 3), "abcdef");
    }

    #[test]
    fn test_truncate_visual() {
        assert_eq!(truncate_visual("short", 10), "short");
        assert_eq!(truncate_visual("캠핑용품추천", 8), "캠핑용..");
        assert_eq!(truncate_visual("abcdef", 3), "...");
    }
}
