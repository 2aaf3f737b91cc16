//! Token frequency counting and top-k ranking
//!
//! Counts are exact occurrence counts over one batch, never estimates.
//! Ranking order is fully deterministic: descending count, ties broken by
//! first occurrence in the input stream.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::RankedEntry;

/// Frequency table preserving first-occurrence order for tie-breaking
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    counts: HashMap<String, Slot>,
    next_rank: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Slot {
    count: u64,
    first_seen: usize,
}

impl FrequencyTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of a token
    pub fn add(&mut self, token: &str) {
        match self.counts.get_mut(token) {
            Some(slot) => slot.count += 1,
            None => {
                self.counts.insert(
                    token.to_string(),
                    Slot {
                        count: 1,
                        first_seen: self.next_rank,
                    },
                );
            }
        }
        self.next_rank += 1;
    }

    /// Record occurrences of every token in an iterator
    pub fn add_all<'a, I>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for token in tokens {
            self.add(token);
        }
    }

    /// Occurrence count for a token
    pub fn count(&self, token: &str) -> u64 {
        self.counts.get(token).map_or(0, |s| s.count)
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if the table holds no tokens
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All entries ranked by descending count, ties by first occurrence
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut entries: Vec<(&String, &Slot)> = self.counts.iter().collect();
        entries.sort_by(|a, b| {
            b.1.count
                .cmp(&a.1.count)
                .then(a.1.first_seen.cmp(&b.1.first_seen))
        });
        entries
            .into_iter()
            .map(|(label, slot)| RankedEntry::new(label.clone(), slot.count))
            .collect()
    }

    /// The `k` highest-count entries
    pub fn top_k(&self, k: usize) -> Vec<RankedEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(k);
        ranked
    }
}

/// Rank a token stream and return the top `k` entries
///
/// An empty input yields an empty output. Single-character tokens are NOT
/// filtered here; that policy belongs to the callers that want it.
///
/// # Examples
///
/// ```
/// use sazanami::analytics::top_k;
///
/// let tokens = ["a", "b", "a"];
/// let top = top_k(tokens.iter().copied(), 1);
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].label, "a");
/// assert_eq!(top[0].count, 2);
/// ```
pub fn top_k<'a, I>(tokens: I, k: usize) -> Vec<RankedEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut table = FrequencyTable::new();
    table.add_all(tokens);
    table.top_k(k)
}
