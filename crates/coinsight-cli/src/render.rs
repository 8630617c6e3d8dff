//! Terminal rendering of the aggregate
//!
//! The presentation layer proper: turns one [`AggregateResult`] into the
//! price / news / analysis sections. Nothing here feeds back into the
//! engine.

use coinsight_engine::{AggregateResult, FetchStatus, Language};

/// Localized "working" line shown while a run is in flight
pub fn loading_line(language: Language) -> &'static str {
    match language {
        Language::Korean => "🔄 분석 중...",
        Language::English => "🔄 Loading analysis...",
    }
}

/// Render one aggregate into the section layout
pub fn render(aggregate: &AggregateResult) -> String {
    let language = aggregate.query.language;
    let mut out = String::new();

    if aggregate.status == FetchStatus::Failed {
        if let Some(message) = &aggregate.error_message {
            out.push_str(message);
            out.push('\n');
        }
        return out;
    }

    if let Some(price) = &aggregate.price {
        match language {
            Language::Korean => {
                out.push_str("💰 시세 정보\n");
                out.push_str(&format!("가격: ₩{}\n", format_amount(price.amount_krw)));
                out.push_str(&format!(
                    "24시간 변동률: {:.2}%\n",
                    price.change_24h_percent
                ));
            }
            Language::English => {
                out.push_str("💰 Price Information\n");
                out.push_str(&format!("₩{}\n", format_amount(price.amount_krw)));
                out.push_str(&format!("24h Change: {:.2}%\n", price.change_24h_percent));
            }
        }
        out.push('\n');
    }

    match language {
        Language::Korean => out.push_str("📰 관련 뉴스\n"),
        Language::English => out.push_str("📰 Related News\n"),
    }
    for article in &aggregate.news {
        out.push_str(&format!("- {} ({})\n", article.title, article.url));
    }
    out.push('\n');

    if let Some(sentiment) = &aggregate.sentiment {
        match language {
            Language::Korean => out.push_str("🤖 GPT 분석\n"),
            Language::English => out.push_str("🤖 GPT Analysis\n"),
        }
        out.push_str(&sentiment.text);
        out.push('\n');
    }

    out
}

/// Group the whole-number part in threes, the way the web UI formatted it
fn format_amount(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.abs().to_string();

    let mut grouped = String::new();
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if whole < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
