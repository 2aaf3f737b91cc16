//! Word segmentation for text without whitespace word boundaries
//!
//! This module provides:
//! - [`SegmentDictionary`] - trie vocabulary supplied by the caller
//! - [`WordSegmenter`] - greedy longest-match segmentation over CJK runs,
//!   with space-delimited Latin tokens passed through whole
//!
//! Segmentation is pure: every call recomputes from scratch and there is no
//! shared mutable state, so results are restartable and deterministic. The
//! raw output keeps single-character tokens; the frequency ranker and graph
//! builder apply their own length policy downstream.

pub mod dictionary;

pub use dictionary::SegmentDictionary;

/// Dictionary-driven word segmenter
///
/// Whitespace splits the text first. Within each chunk, runs of CJK
/// characters are segmented by greedy longest match against the dictionary,
/// falling back to single characters where the dictionary is silent; all
/// other characters accumulate into ordinary space-delimited tokens.
#[derive(Debug, Clone, Default)]
pub struct WordSegmenter {
    dictionary: SegmentDictionary,
}

impl WordSegmenter {
    /// Create a segmenter with an empty dictionary
    ///
    /// Without vocabulary every CJK character becomes its own token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter over the given dictionary
    pub fn with_dictionary(dictionary: SegmentDictionary) -> Self {
        Self { dictionary }
    }

    /// The dictionary in use
    pub fn dictionary(&self) -> &SegmentDictionary {
        &self.dictionary
    }

    /// Split text into word-level tokens
    ///
    /// # Examples
    ///
    /// ```
    /// use sazanami::segment::{SegmentDictionary, WordSegmenter};
    ///
    /// let dict = SegmentDictionary::from_words(["勉強会", "参加"]);
    /// let seg = WordSegmenter::with_dictionary(dict);
    /// assert_eq!(seg.segment("Rust勉強会に参加"), vec!["Rust", "勉強会", "に", "参加"]);
    /// ```
    pub fn segment(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for chunk in text.split_whitespace() {
            self.segment_chunk(chunk, &mut tokens);
        }

        tokens
    }

    fn segment_chunk(&self, chunk: &str, tokens: &mut Vec<String>) {
        let chars: Vec<char> = chunk.chars().collect();
        let mut latin = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            if is_cjk(c) {
                if !latin.is_empty() {
                    tokens.push(std::mem::take(&mut latin));
                }
                match self.dictionary.longest_match(&chars, i) {
                    Some(n) => {
                        tokens.push(chars[i..i + n].iter().collect());
                        i += n;
                    }
                    None => {
                        tokens.push(c.to_string());
                        i += 1;
                    }
                }
            } else {
                latin.push(c);
                i += 1;
            }
        }

        if !latin.is_empty() {
            tokens.push(latin);
        }
    }
}

/// Check whether a character needs dictionary segmentation
///
/// Covers Hiragana, Katakana (incl. phonetic extensions), the unified CJK
/// ideograph blocks, and the compatibility ideographs.
fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}' |
        '\u{31F0}'..='\u{31FF}' |
        '\u{3400}'..='\u{4DBF}' |
        '\u{4E00}'..='\u{9FFF}' |
        '\u{F900}'..='\u{FAFF}'
    )
}
