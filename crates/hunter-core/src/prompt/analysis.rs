//! Analysis prompts, one builder per mode.

use super::SCHEMA_REQUIREMENT;

/// Persona and task framing shared by all analysis modes.
pub const PERSONA: &str = "\
당신은 '로직 헌터'라는 이름의 대한민국 최고의 네이버 SEO 분석 AI입니다.
당신의 임무는 주어진 데이터에 대해 매우 구체적이고 현실적인 데이터를 기반으로 심층 분석을 제공하는 것입니다.
데이터는 실제 한국 시장 상황과 '네이버 검색광고 시스템'의 데이터 경향성을 반영하여 창의적이지만 그럴듯하게 만들어주세요.

사용자는 경쟁이 너무 치열한 '대표 키워드'보다는, 적당한 검색량을 가지면서도 현실적으로 상위 노출을 노려볼 만한 '중간 키워드' 또는 '세부 키워드'를 찾는 데 가장 큰 관심이 있습니다. '틈새 키워드' 추천 시 이 점을 최우선으로 고려하여, 너무 경쟁이 세지 않으면서도 가치 있는 키워드를 발굴해주세요.
";

/// Volume/competition band for niche keyword recommendations.
pub const NICHE_KEYWORD_POLICY: &str = "특히 '틈새 키워드' 추천 시, 검색량이 너무 적은(예: 월 100회 미만) 키워드는 피하고, 경쟁이 낮으면서도 어느 정도 의미있는 중간 수준의 검색량(최소 월 수백회 이상)을 가진 키워드를 우선적으로 골라주세요.";

/// Request for a concrete post-count range in the exposure simulation.
pub const EXPOSURE_GUIDANCE: &str = "'상위 노출 시뮬레이션'에서는 상위 노출에 필요한 포스팅 개수를 구체적인 수치(예: 3-5개)로 제시하고, 그 근거를 명확히 설명해야 합니다.";

pub const SIMULATION_HEADING: &str = "**모드: AI 시뮬레이션**";

/// Ask the model to invent a total and split it between PC and mobile.
pub const SIMULATION_INSTRUCTION: &str = "총 검색량(searchVolume)과 함께, PC(pcSearchVolume)와 모바일(mobileSearchVolume) 검색량을 현실적으로 추정하여 분배해주세요.";

pub const MANUAL_HEADING: &str = "**모드: 가져온 데이터 분석**";

pub const MANUAL_DATA_START: &str = "--- 데이터 시작 ---";
pub const MANUAL_DATA_END: &str = "--- 데이터 끝 ---";

/// Aggregation steps the model must perform on imported data.
pub const MANUAL_STEPS: [&str; 7] = [
    "제공된 데이터의 전반적인 핵심 주제(mainTheme)를 한두 단어로 요약하여 식별하세요.",
    "제공된 모든 키워드의 월간 PC 검색량을 합산하여 총 PC 검색량(pcSearchVolume)을 계산하세요.",
    "제공된 모든 키워드의 월간 모바일 검색량을 합산하여 총 모바일 검색량(mobileSearchVolume)을 계산하세요.",
    "총 PC와 모바일 검색량을 더해 전체 검색량(searchVolume)을 계산하세요.",
    "제공된 키워드들의 검색량과 특성을 종합적으로 고려하여 전체적인 경쟁 강도(competitionRate)를 평가하세요.",
    "PC와 모바일 검색량 비중을 분석하고, 이 인사이트를 '상위 노출 전략(topExposureRecommendation)'에 반드시 반영하세요.",
    "이 데이터를 기반으로, '틈새 키워드 추천', 'SEO 점검표', '연관 키워드'를 생성하세요.",
];

pub const API_HEADING: &str = "**모드: 네이버 API 직접 분석 (시뮬레이션)**";

/// Tells the model to leave `mainTheme` out in `api` mode.
pub const OMIT_MAIN_THEME: &str =
    "이 모드에서는 'mainTheme' 필드를 생성하지 마세요. 키워드 자체가 주제입니다.";

/// Preamble common to all modes: persona, niche policy, exposure guidance.
fn preamble() -> String {
    let mut doc = String::with_capacity(2048);
    doc.push_str(PERSONA);
    doc.push('\n');
    doc.push_str(NICHE_KEYWORD_POLICY);
    doc.push('\n');
    doc.push_str(EXPOSURE_GUIDANCE);
    doc.push_str("\n\n");
    doc
}

fn finish(mut doc: String) -> String {
    doc.push('\n');
    doc.push_str(SCHEMA_REQUIREMENT);
    doc.push('\n');
    doc
}

/// Prompt for a single keyword with invented figures.
pub fn simulation_prompt(keyword: &str) -> String {
    let mut doc = preamble();
    doc.push_str(SIMULATION_HEADING);
    doc.push('\n');
    doc.push_str(&format!(
        "사용자가 분석을 요청한 키워드는 \"{}\" 입니다. 이 키워드에 대한 분석을 수행하세요.\n",
        keyword
    ));
    doc.push_str(SIMULATION_INSTRUCTION);
    doc.push('\n');
    finish(doc)
}

/// Prompt for imported `keyword,pc,mobile` records. The data block is
/// embedded byte-for-byte between the delimiters.
pub fn manual_prompt(data: &str) -> String {
    let mut doc = preamble();
    doc.push_str(MANUAL_HEADING);
    doc.push('\n');
    doc.push_str("사용자가 네이버 광고 시스템 등에서 직접 추출한 '키워드,월간PC검색수,월간모바일검색수' 형식의 데이터를 아래와 같이 제공했습니다.\n\n");
    doc.push_str(MANUAL_DATA_START);
    doc.push('\n');
    doc.push_str(data);
    doc.push('\n');
    doc.push_str(MANUAL_DATA_END);
    doc.push_str("\n\n이 데이터를 분석하여 다음 작업을 수행하세요:\n");
    for (i, step) in MANUAL_STEPS.iter().enumerate() {
        doc.push_str(&format!("{}. {}\n", i + 1, step));
    }
    finish(doc)
}

/// Prompt that role-plays a fresh Naver ad API lookup for a keyword.
pub fn api_prompt(keyword: &str) -> String {
    let mut doc = preamble();
    doc.push_str(API_HEADING);
    doc.push('\n');
    doc.push_str(&format!(
        "사용자가 자신의 네이버 광고 API를 연동하여 키워드 \"{}\"의 데이터를 요청했습니다.\n",
        keyword
    ));
    doc.push_str("마치 실제 API를 통해 방금 데이터를 받은 것처럼 행동하세요.\n");
    doc.push_str("'네이버 검색광고 시스템'에서 제공하는 실제 데이터와 매우 유사한 검색량(PC, 모바일), 경쟁률 데이터를 생성하여 응답을 구성해야 합니다.\n");
    doc.push_str(OMIT_MAIN_THEME);
    doc.push('\n');
    doc.push_str("나머지 분석(틈새 키워드, SEO 체크리스트 등)은 이 실제와 같은 데이터를 기반으로 수행하세요.\n");
    finish(doc)
}
