//! Segmentation dictionary backed by a character trie
//!
//! The dictionary is the external vocabulary collaborator of the segmenter:
//! callers load it with the word list of their domain (or deserialize a
//! prepared one) and the segmenter consults it for longest-prefix matches
//! inside CJK character runs.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrieNode {
    children: HashMap<char, usize>,
    is_word: bool,
}

impl TrieNode {
    fn new() -> Self {
        Self {
            children: HashMap::new(),
            is_word: false,
        }
    }
}

/// A character trie holding the segmentation vocabulary
///
/// Nodes live in a flat arena indexed by `usize`; index 0 is the root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDictionary {
    nodes: Vec<TrieNode>,
    word_count: usize,
}

impl SegmentDictionary {
    /// Create an empty dictionary
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::new()],
            word_count: 0,
        }
    }

    /// Build a dictionary from a word list
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for word in words {
            dict.insert(word.as_ref());
        }
        dict
    }

    /// Insert one word
    ///
    /// Empty words are ignored. Inserting a duplicate is a no-op.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }

        let mut node_idx = 0;
        for c in word.chars() {
            let next_idx = if let Some(&id) = self.nodes[node_idx].children.get(&c) {
                id
            } else {
                let new_id = self.nodes.len();
                self.nodes.push(TrieNode::new());
                self.nodes[node_idx].children.insert(c, new_id);
                new_id
            };
            node_idx = next_idx;
        }

        if !self.nodes[node_idx].is_word {
            self.nodes[node_idx].is_word = true;
            self.word_count += 1;
        }
    }

    /// Check whether a word is present
    pub fn contains(&self, word: &str) -> bool {
        let mut node_idx = 0;
        for c in word.chars() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&id) => node_idx = id,
                None => return false,
            }
        }
        self.nodes[node_idx].is_word
    }

    /// Length in characters of the longest dictionary word starting at
    /// `chars[start]`, if any
    pub fn longest_match(&self, chars: &[char], start: usize) -> Option<usize> {
        let mut node_idx = 0;
        let mut best = None;

        for (offset, &c) in chars[start..].iter().enumerate() {
            match self.nodes[node_idx].children.get(&c) {
                Some(&id) => {
                    node_idx = id;
                    if self.nodes[node_idx].is_word {
                        best = Some(offset + 1);
                    }
                }
                None => break,
            }
        }

        best
    }

    /// Number of words in the dictionary
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Check if the dictionary holds no words
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

impl Default for SegmentDictionary {
    fn default() -> Self {
        Self::new()
    }
}
