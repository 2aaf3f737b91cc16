//! Shared fixtures for integration tests

use sazanami::models::{Batch, Post};

/// A header with Japanese column names, as exported by the post archive
#[allow(dead_code)]
pub fn japanese_header() -> Vec<String> {
    vec!["投稿日時".to_string(), "テキスト".to_string()]
}

/// Rows matching [`japanese_header`]
#[allow(dead_code)]
pub fn japanese_rows() -> Vec<Vec<String>> {
    [
        ("2025/08/09 21:27", "今日の勉強会最高でした！😊 #ノンプロ研 #勉強会"),
        ("2025/08/09 09:15", "great session on parsing #ノンプロ研 https://t.co/abc"),
        ("2025/08/10 12:00", "@friend check this out #勉強会"),
        ("", "no timestamp on this one #ノンプロ研"),
    ]
    .iter()
    .map(|(ts, text)| vec![ts.to_string(), text.to_string()])
    .collect()
}

/// An English header/rows pair for sentiment-heavy scenarios
#[allow(dead_code)]
pub fn english_table() -> (Vec<String>, Vec<Vec<String>>) {
    let header = vec!["created_at".to_string(), "text".to_string()];
    let rows = [
        ("2025-08-09T10:00:00", "this library is great #rust"),
        ("2025-08-09T11:30:00", "terrible build times today #rust #cargo"),
        ("2025-08-10T09:00:00", "neutral observation #cargo"),
    ]
    .iter()
    .map(|(ts, text)| vec![ts.to_string(), text.to_string()])
    .collect();
    (header, rows)
}

/// Build an already-enriched post without running the pipeline
#[allow(dead_code)]
pub fn enriched_post(normalized: &str, hashtags: &[&str], sentiment: f64) -> Post {
    Post {
        raw_text: normalized.to_string(),
        normalized_text: normalized.to_string(),
        hashtags: hashtags.iter().map(|s| s.to_string()).collect(),
        sentiment,
        ..Default::default()
    }
}

/// Batch of already-enriched posts
#[allow(dead_code)]
pub fn enriched_batch(posts: Vec<Post>) -> Batch {
    Batch::new(posts)
}
