//! Analysis prompt templates and localized fallback strings
//!
//! Two template variants exist: a sentiment summary and a sentiment summary
//! with a price forecast. Both embed the asset id verbatim — the id is
//! opaque text as far as the pipeline is concerned and is never validated
//! or rewritten here.

use crate::Language;
use serde::{Deserialize, Serialize};

/// Which analysis the generative text source is asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PromptKind {
    /// Summarize current investor sentiment
    #[default]
    Sentiment,
    /// Summarize sentiment and forecast the price
    Forecast,
}

/// Build the localized analysis prompt for one asset
///
/// Pure and deterministic: same inputs, same prompt. The asset id is
/// embedded verbatim.
///
/// # Examples
///
/// ```
/// use coinsight_prompt::{analysis_prompt, Language, PromptKind};
///
/// let prompt = analysis_prompt(PromptKind::Forecast, "ethereum", Language::English);
/// assert!(prompt.contains("ethereum"));
/// assert!(prompt.contains("forecast"));
/// ```
pub fn analysis_prompt(kind: PromptKind, asset_id: &str, language: Language) -> String {
    match (kind, language) {
        (PromptKind::Sentiment, Language::Korean) => format!(
            "{asset_id}의 최근 시세와 뉴스 정보를 바탕으로 현재 투자자 심리를 분석하고 요약해줘."
        ),
        (PromptKind::Sentiment, Language::English) => format!(
            "Based on the recent price and news of {asset_id}, analyze and summarize investor sentiment."
        ),
        (PromptKind::Forecast, Language::Korean) => format!(
            "{asset_id} 코인의 최근 시세와 뉴스 정보를 바탕으로 현재 투자자 심리를 분석하고 가격을 예측해줘."
        ),
        (PromptKind::Forecast, Language::English) => format!(
            "Based on the recent price and news of {asset_id}, analyze investor sentiment and forecast the price."
        ),
    }
}

/// Localized message shown in place of the aggregate when a fetch cycle fails
pub fn fetch_failure_message(language: Language) -> &'static str {
    match language {
        Language::Korean => "❌ 데이터를 불러오지 못했습니다.",
        Language::English => "❌ Failed to load data.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_deterministic() {
        let a = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::Korean);
        let b = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::Korean);
        assert_eq!(a, b);
    }

    #[test]
    fn test_prompt_embeds_id_verbatim() {
        for kind in [PromptKind::Sentiment, PromptKind::Forecast] {
            for language in [Language::Korean, Language::English] {
                let prompt = analysis_prompt(kind, "doge-coin.v2", language);
                assert!(
                    prompt.contains("doge-coin.v2"),
                    "id missing from {kind:?}/{language:?} prompt"
                );
            }
        }
    }

    #[test]
    fn test_languages_differ_only_in_wording() {
        let ko = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::Korean);
        let en = analysis_prompt(PromptKind::Sentiment, "bitcoin", Language::English);
        assert_ne!(ko, en);
        assert!(ko.contains("bitcoin") && en.contains("bitcoin"));
    }

    #[test]
    fn test_forecast_variant_asks_for_prediction() {
        let ko = analysis_prompt(PromptKind::Forecast, "bitcoin", Language::Korean);
        let en = analysis_prompt(PromptKind::Forecast, "bitcoin", Language::English);
        assert!(ko.contains("가격을 예측"));
        assert!(en.contains("forecast the price"));
    }

    #[test]
    fn test_failure_message_localized() {
        assert_eq!(
            fetch_failure_message(Language::Korean),
            "❌ 데이터를 불러오지 못했습니다."
        );
        assert_eq!(
            fetch_failure_message(Language::English),
            "❌ Failed to load data."
        );
    }
}
