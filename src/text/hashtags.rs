//! Hashtag extraction from raw post text
//!
//! Extraction runs on the raw, pre-normalization text so tags survive even
//! when the surrounding punctuation is later stripped. Duplicates within a
//! post are kept: repetition is a frequency signal for the rankings.

use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#\w+").unwrap());

/// Extract hashtag tokens, scanned left to right
///
/// Matches `#` followed by one or more word characters. Order is preserved
/// and duplicates are kept; comparisons elsewhere are case-insensitive, the
/// extracted strings are not altered here.
///
/// # Examples
///
/// ```
/// use sazanami::text::extract_hashtags;
///
/// let tags = extract_hashtags("hello #a #a #b");
/// assert_eq!(tags, vec!["#a", "#a", "#b"]);
/// ```
pub fn extract_hashtags(raw: &str) -> Vec<String> {
    HASHTAG_REGEX
        .find_iter(raw)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_order_and_duplicates() {
        let tags = extract_hashtags("hello #a #a #b");
        assert_eq!(tags, vec!["#a", "#a", "#b"]);
    }

    #[test]
    fn test_extract_none() {
        assert!(extract_hashtags("no tags here").is_empty());
        assert!(extract_hashtags("").is_empty());
    }

    #[test]
    fn test_extract_cjk_hashtags() {
        let tags = extract_hashtags("参加します #ノンプロ研 #勉強会");
        assert_eq!(tags, vec!["#ノンプロ研", "#勉強会"]);
    }

    #[test]
    fn test_extract_stops_at_punctuation() {
        let tags = extract_hashtags("#rust! and #cargo,");
        assert_eq!(tags, vec!["#rust", "#cargo"]);
    }

    #[test]
    fn test_bare_hash_is_not_a_tag() {
        assert!(extract_hashtags("# nothing").is_empty());
    }

    #[test]
    fn test_case_preserved() {
        let tags = extract_hashtags("#Rust #rust");
        assert_eq!(tags, vec!["#Rust", "#rust"]);
    }
}
