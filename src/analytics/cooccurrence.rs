//! Windowed word co-occurrence graph construction
//!
//! Builds a weighted undirected graph from token adjacency across a whole
//! batch. Pair keys are canonicalized so direction never matters, and every
//! ordering decision is deterministic: identical input yields a bit-identical
//! edge list, including order.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tokens shorter than this many characters are dropped before pairing
const MIN_TOKEN_CHARS: usize = 2;

/// One weighted undirected edge between two distinct tokens
///
/// `source`/`target` hold the canonical (lexicographically sorted) order of
/// the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceEdge {
    pub source: String,
    pub target: String,
    /// Number of windowed co-occurrences across the batch
    pub weight: u64,
}

/// Co-occurrence graph restricted to the heaviest edges
///
/// Nodes are exactly the tokens appearing in at least one retained edge;
/// isolated tokens are absent. The structure is pure data, consumable for a
/// force-directed layout by the display collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CooccurrenceGraph {
    /// Tokens in first-appearance order over the ranked edge list
    pub nodes: Vec<String>,
    /// Edges ranked by descending weight, ties by first observation
    pub edges: Vec<CooccurrenceEdge>,
}

impl CooccurrenceGraph {
    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph holds no edges
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Build a co-occurrence graph from per-post token sequences
///
/// For each post, tokens of at least two characters are kept and each
/// position `i` is paired with the tokens at `i+1..=i+lookahead`. The
/// default `lookahead` of 2 pairs a token with its next two neighbors, which
/// reproduces the established adjacency semantics; it is deliberately not a
/// symmetric window. Pairs of identical tokens are skipped. After counting
/// across the whole batch, the `top_k` heaviest pairs become edges, with
/// ties broken by first observation order.
///
/// # Examples
///
/// ```
/// use sazanami::analytics::build_graph;
///
/// let posts = vec![
///     vec!["rust".to_string(), "async".to_string()],
///     vec!["async".to_string(), "rust".to_string()],
/// ];
/// let graph = build_graph(&posts, 2, 20);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.edges[0].weight, 2);
/// ```
pub fn build_graph(
    batch_tokens: &[Vec<String>],
    lookahead: usize,
    top_k: usize,
) -> CooccurrenceGraph {
    let mut counts: HashMap<(String, String), Slot> = HashMap::new();
    let mut next_rank = 0usize;

    for tokens in batch_tokens {
        let words: Vec<&String> = tokens
            .iter()
            .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
            .collect();

        for i in 0..words.len() {
            let upper = (i + lookahead).min(words.len().saturating_sub(1));
            for j in (i + 1)..=upper {
                if words[i] == words[j] {
                    continue;
                }
                let key = canonical_pair(words[i], words[j]);
                match counts.get_mut(&key) {
                    Some(slot) => slot.count += 1,
                    None => {
                        counts.insert(
                            key,
                            Slot {
                                count: 1,
                                first_seen: next_rank,
                            },
                        );
                        next_rank += 1;
                    }
                }
            }
        }
    }

    let mut ranked: Vec<((String, String), Slot)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| {
        b.1.count
            .cmp(&a.1.count)
            .then(a.1.first_seen.cmp(&b.1.first_seen))
    });
    ranked.truncate(top_k);

    let mut nodes = Vec::new();
    let mut edges = Vec::with_capacity(ranked.len());
    for ((source, target), slot) in ranked {
        push_unique(&mut nodes, &source);
        push_unique(&mut nodes, &target);
        edges.push(CooccurrenceEdge {
            source,
            target,
            weight: slot.count,
        });
    }

    CooccurrenceGraph { nodes, edges }
}

#[derive(Debug)]
struct Slot {
    count: u64,
    first_seen: usize,
}

/// Sort the two tokens so `{a,b}` and `{b,a}` share one key
fn canonical_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

fn push_unique(nodes: &mut Vec<String>, token: &str) {
    if !nodes.iter().any(|n| n == token) {
        nodes.push(token.to_string());
    }
}
