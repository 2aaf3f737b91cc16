// Core data structures for sazanami analytics

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One social-media post with its derived analysis fields
///
/// Derived fields are computed once at batch-load time and are immutable
/// afterwards; the owning [`Batch`] is the only holder of the post.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Post {
    /// Original text as uploaded
    pub raw_text: String,
    /// Post timestamp; None when absent or unparseable
    pub timestamp: Option<NaiveDateTime>,
    /// Text after URL/mention/emoji/symbol stripping
    pub normalized_text: String,
    /// Hashtags in raw-text order, duplicates preserved
    pub hashtags: Vec<String>,
    /// Polarity score in [-1.0, 1.0]; 0.0 when scoring was not possible
    pub sentiment: f64,
}

impl Post {
    /// Create a post from raw text only; derived fields stay at defaults
    /// until the pipeline enriches them
    pub fn new(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Default::default()
        }
    }

    /// Character count of the normalized text
    pub fn normalized_chars(&self) -> usize {
        self.normalized_text.chars().count()
    }
}

/// Ordered collection of posts processed as one unit
///
/// A sub-batch produced by filtering is a fresh `Batch`; the parent is never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Batch {
    pub posts: Vec<Post>,
}

impl Batch {
    /// Create a batch from posts
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    /// Number of posts
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    /// Check if the batch holds no posts
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Filter posts by a hashtag query
    ///
    /// An empty query returns the batch unchanged. Otherwise the query is
    /// matched case-insensitively as a substring of each post's normalized
    /// text; when that pass matches nothing, a second pass matches the query
    /// against each post's extracted hashtags. The first pass wins whenever
    /// it yields any posts.
    ///
    /// # Examples
    ///
    /// ```
    /// use sazanami::models::{Batch, Post};
    ///
    /// let batch = Batch::new(vec![Post {
    ///     raw_text: "has #foo tag".to_string(),
    ///     normalized_text: "has #foo tag".to_string(),
    ///     hashtags: vec!["#foo".to_string()],
    ///     ..Default::default()
    /// }]);
    /// assert_eq!(batch.filter_by_hashtag("#FOO").len(), 1);
    /// ```
    pub fn filter_by_hashtag(&self, query: &str) -> Batch {
        if query.is_empty() {
            return self.clone();
        }

        let needle = query.to_lowercase();

        let by_text: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| p.normalized_text.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if !by_text.is_empty() {
            return Batch::new(by_text);
        }

        // Fallback: match against the extracted hashtags
        let by_tag: Vec<Post> = self
            .posts
            .iter()
            .filter(|p| {
                p.hashtags
                    .iter()
                    .any(|tag| tag.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect();

        Batch::new(by_tag)
    }
}

/// One entry of a ranked list: label and occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub label: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(label: impl Into<String>, count: u64) -> Self {
        Self {
            label: label.into(),
            count,
        }
    }
}

/// Aggregate statistics over a batch
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BatchStats {
    /// Total posts in the batch
    pub post_count: usize,
    /// Mean character count of normalized text
    pub mean_text_chars: f64,
    /// Total hashtag occurrences (duplicates counted)
    pub hashtag_count: usize,
    /// Mean sentiment score
    pub mean_sentiment: f64,
}

impl BatchStats {
    /// Compute statistics for a batch
    pub fn from_batch(batch: &Batch) -> Self {
        let post_count = batch.len();
        if post_count == 0 {
            return Self::default();
        }

        let total_chars: usize = batch.posts.iter().map(Post::normalized_chars).sum();
        let hashtag_count: usize = batch.posts.iter().map(|p| p.hashtags.len()).sum();
        let total_sentiment: f64 = batch.posts.iter().map(|p| p.sentiment).sum();

        Self {
            post_count,
            mean_text_chars: total_chars as f64 / post_count as f64,
            hashtag_count,
            mean_sentiment: total_sentiment / post_count as f64,
        }
    }
}
