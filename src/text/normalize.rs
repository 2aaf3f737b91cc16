//! Post text normalization
//!
//! This module cleans raw post text before segmentation and scoring. The
//! steps run in a fixed order and each step is idempotent:
//!
//! 1. Remove URL substrings (`scheme://...`)
//! 2. Remove `@mention` tokens
//! 3. Remove emoji code points, leaving no placeholder
//! 4. Replace any character that is not a word character, whitespace, or `#`
//!    with a single space
//! 5. Collapse whitespace runs to one space and trim
//!
//! Hashtag markers survive normalization on purpose: the hashtag filter
//! matches queries against normalized text.

use regex::Regex;
use std::sync::LazyLock;

// Pre-compiled regex patterns for performance
static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z][A-Za-z0-9+.-]*://\S+").unwrap());

static MENTION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+").unwrap());

static SYMBOL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s#]").unwrap());

static WHITESPACE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Normalize raw post text
///
/// Applies all cleaning steps in order. A missing value should be mapped to
/// an empty string by the caller before reaching this function; an empty
/// input simply yields an empty output.
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize;
///
/// let raw = "Check https://example.com 😊 @alice #rust!!";
/// assert_eq!(normalize(raw), "Check #rust");
/// ```
pub fn normalize(raw: &str) -> String {
    let mut result = remove_urls(raw);
    result = remove_mentions(&result);
    result = remove_emoji(&result);
    result = replace_symbols(&result);
    collapse_whitespace(&result)
}

/// Remove URL substrings matching a `scheme://...` pattern
///
/// No percent-decoding is attempted; the whole non-whitespace run following
/// the scheme is dropped.
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize::remove_urls;
///
/// let text = "see https://example.com/a?b=1 now";
/// assert_eq!(remove_urls(text), "see  now");
/// ```
pub fn remove_urls(text: &str) -> String {
    URL_REGEX.replace_all(text, "").to_string()
}

/// Remove mention tokens of the form `@` followed by word characters
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize::remove_mentions;
///
/// assert_eq!(remove_mentions("hi @alice bye"), "hi  bye");
/// ```
pub fn remove_mentions(text: &str) -> String {
    MENTION_REGEX.replace_all(text, "").to_string()
}

/// Remove emoji code points, replacing with the empty string
///
/// Covers the emoji presentation blocks plus the joiners that stitch
/// presentation sequences together:
/// - U+1F000..=U+1FAFF (pictographs, emoticons, transport, supplemental)
/// - U+2600..=U+27BF (miscellaneous symbols, dingbats)
/// - U+2B00..=U+2BFF (stars, geometric shapes)
/// - U+FE0E, U+FE0F (variation selectors)
/// - U+200D (zero-width joiner), U+20E3 (combining keycap)
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize::remove_emoji;
///
/// assert_eq!(remove_emoji("こんにちは！😊"), "こんにちは！");
/// ```
pub fn remove_emoji(text: &str) -> String {
    text.chars().filter(|c| !is_emoji_char(*c)).collect()
}

/// Check whether a character belongs to an emoji presentation sequence
fn is_emoji_char(c: char) -> bool {
    matches!(c,
        '\u{1F000}'..='\u{1FAFF}' |
        '\u{2600}'..='\u{27BF}' |
        '\u{2B00}'..='\u{2BFF}' |
        '\u{FE0E}'..='\u{FE0F}' |
        '\u{200D}' |
        '\u{20E3}'
    )
}

/// Replace any character that is not a word character, whitespace, or `#`
/// with a single space
///
/// Word characters follow the Unicode definition, so CJK letters survive.
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize::replace_symbols;
///
/// assert_eq!(replace_symbols("good!!#rust"), "good  #rust");
/// ```
pub fn replace_symbols(text: &str) -> String {
    SYMBOL_REGEX.replace_all(text, " ").to_string()
}

/// Collapse runs of whitespace to one space and trim
///
/// # Examples
///
/// ```
/// use sazanami::text::normalize::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  a \t b\n c  "), "a b c");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_full() {
        let raw = "Check https://example.com 😊 @alice #rust!!";
        assert_eq!(normalize(raw), "Check #rust");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_remove_urls() {
        let text = "before http://a.example/path?q=1 after";
        assert_eq!(remove_urls(text), "before  after");
    }

    #[test]
    fn test_remove_urls_multiple_schemes() {
        let text = "ftp://files.example https://web.example plain";
        let clean = remove_urls(text);
        assert!(!clean.contains("://"));
        assert!(clean.contains("plain"));
    }

    #[test]
    fn test_remove_mentions() {
        assert_eq!(remove_mentions("@user1 hello @user2"), " hello ");
    }

    #[test]
    fn test_mention_stops_at_non_word() {
        // Only the word-character run after '@' is removed
        assert_eq!(remove_mentions("@alice, hi"), ", hi");
    }

    #[test]
    fn test_remove_emoji_basic() {
        assert_eq!(remove_emoji("hello 😊 world 🚀"), "hello  world ");
    }

    #[test]
    fn test_remove_emoji_leaves_cjk() {
        assert_eq!(remove_emoji("こんにちは！😊 #テスト"), "こんにちは！ #テスト");
    }

    #[test]
    fn test_remove_emoji_zwj_sequence() {
        // Family sequence: man + ZWJ + woman + ZWJ + girl
        let text = "a\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}b";
        assert_eq!(remove_emoji(text), "ab");
    }

    #[test]
    fn test_remove_emoji_keycap() {
        let text = "vote 1\u{FE0F}\u{20E3} now";
        assert_eq!(remove_emoji(text), "vote 1 now");
    }

    #[test]
    fn test_replace_symbols_keeps_hash() {
        assert_eq!(replace_symbols("wow!? #tag&more"), "wow   #tag more");
    }

    #[test]
    fn test_replace_symbols_keeps_cjk_word_chars() {
        assert_eq!(replace_symbols("分析、開始。"), "分析 開始 ");
    }

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(collapse_whitespace("  a \t\t b \n c "), "a b c");
    }

    #[test]
    fn test_normalize_japanese_post() {
        let raw = "今日は最高！😊 #ノンプロ研 https://t.co/abc @friend";
        assert_eq!(normalize(raw), "今日は最高 #ノンプロ研");
    }

    #[test]
    fn test_normalize_idempotent_samples() {
        let samples = [
            "Check https://example.com 😊 @alice #rust!!",
            "こんにちは！😊 #テスト",
            "plain words only",
            "",
            "#a #a #b",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn test_normalize_output_purity() {
        let raw = "mix @of 😊 http://everything.example #all!?";
        let clean = normalize(raw);
        assert!(!clean.contains("://"));
        assert!(!MENTION_REGEX.is_match(&clean));
        assert!(!clean.chars().any(is_emoji_char));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn normalize_is_idempotent(s in "\\PC{0,200}") {
                let once = normalize(&s);
                prop_assert_eq!(normalize(&once), once.clone());
            }

            #[test]
            fn normalize_output_has_no_noise(s in "\\PC{0,200}") {
                let clean = normalize(&s);
                prop_assert!(!clean.contains("://"));
                prop_assert!(!MENTION_REGEX.is_match(&clean));
                prop_assert!(!clean.chars().any(is_emoji_char));
            }

            #[test]
            fn normalize_collapses_whitespace(s in "\\PC{0,200}") {
                let clean = normalize(&s);
                prop_assert!(!clean.contains("  "));
                prop_assert_eq!(clean.trim(), clean.as_str());
            }
        }
    }
}
