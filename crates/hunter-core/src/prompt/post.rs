//! Blog post prompt.

use super::SCHEMA_REQUIREMENT;
use crate::post::model::PostGenerationOptions;

pub const WRITER_PERSONA: &str = "\
당신은 '달멍봇 콘텐츠 자동 생성기'라는 이름의 AI 블로그 글쓰기 전문가입니다.
사용자가 제공한 키워드와 옵션을 사용하여 SEO에 최적화된 고품질 블로그 게시물을 작성해야 합니다.
";

/// Keyword placement rule: once in the title, two or three times in the body.
pub const KEYWORD_PLACEMENT: &str =
    "제공된 핵심 키워드를 제목에 1회, 그리고 본문에 2~3회 자연스럽게 포함시켜 주세요.";

pub const PARAGRAPH_BREAKS: &str =
    "개행 문자를 사용하여 문단을 명확하게 구분하고, 전체적인 가독성을 높여주세요.";

/// Prompt for a blog post about `keyword`.
pub fn post_prompt(keyword: &str, options: &PostGenerationOptions) -> String {
    let mut doc = String::with_capacity(1024);
    doc.push_str(WRITER_PERSONA);
    doc.push_str("\n**요청 사항:**\n");
    doc.push_str(&format!("1. **핵심 키워드:** \"{}\"\n", keyword));
    doc.push_str(&format!("2. **글 스타일:** {}\n", options.style.descriptor()));
    doc.push_str(&format!("3. **글 길이:** {}\n", options.length.descriptor()));

    doc.push_str("\n**작성 지침:**\n");
    doc.push_str(&format!("- {}\n", KEYWORD_PLACEMENT));
    doc.push_str(&format!(
        "- 본문에는 \"{}\"와 관련된 연관 키워드를 2~3개 자연스럽게 녹여내 주세요.\n",
        keyword
    ));
    doc.push_str(&format!("- {}\n", PARAGRAPH_BREAKS));
    doc.push_str(&format!("- {}\n", SCHEMA_REQUIREMENT));
    doc
}
