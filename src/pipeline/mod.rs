//! Batch analysis pipeline
//!
//! Orchestrates the full run for one batch: per-post enrichment
//! (normalization, hashtag extraction, sentiment), segmentation, frequency
//! rankings, co-occurrence graph construction, and time bucketing. The
//! pipeline is synchronous and stateless across invocations; every public
//! method is a pure function of its inputs, so the display collaborator can
//! call it from any execution model.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::analytics::{build_graph, summarize, top_k, CooccurrenceGraph, TimelineSummary};
use crate::cache::ContentCache;
use crate::config::AnalyticsConfig;
use crate::error::Result;
use crate::loader::load_batch;
use crate::models::{Batch, BatchStats, RankedEntry};
use crate::segment::WordSegmenter;
use crate::sentiment::SentimentScorer;
use crate::text::{extract_hashtags, normalize};

/// One post in the sentiment ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredPost {
    /// Normalized text of the post
    pub text: String,
    /// Polarity score
    pub score: f64,
}

/// Complete analysis output for one batch
///
/// Pure data with no side effects; every surface the display layer consumes
/// lives here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// The enriched (and possibly filtered) batch
    pub batch: Batch,
    /// Aggregate batch statistics
    pub stats: BatchStats,
    /// Hashtag usage ranking
    pub hashtag_ranking: Vec<RankedEntry>,
    /// Word frequency ranking over segmented tokens
    pub word_ranking: Vec<RankedEntry>,
    /// Posts ranked by sentiment score
    pub sentiment_ranking: Vec<ScoredPost>,
    /// Word co-occurrence graph
    pub graph: CooccurrenceGraph,
    /// Daily/hourly buckets and daily mean sentiment
    pub timeline: TimelineSummary,
}

/// The analysis pipeline
///
/// Holds the configuration and the two model collaborators. Processing is
/// single-threaded and runs to completion for one batch before any result
/// is consumable; callers wanting bounded latency cap the batch size first.
pub struct Pipeline {
    config: AnalyticsConfig,
    scorer: SentimentScorer,
    segmenter: WordSegmenter,
}

impl Pipeline {
    /// Create a pipeline with default configuration and collaborators
    pub fn new() -> Self {
        Self::with_config(AnalyticsConfig::default())
    }

    /// Create a pipeline with the given configuration
    pub fn with_config(config: AnalyticsConfig) -> Self {
        Self {
            config,
            scorer: SentimentScorer::new(),
            segmenter: WordSegmenter::new(),
        }
    }

    /// Replace the sentiment scorer
    pub fn with_scorer(mut self, scorer: SentimentScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Replace the word segmenter
    pub fn with_segmenter(mut self, segmenter: WordSegmenter) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// The configuration in use
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Compute the derived fields of every post
    ///
    /// Normalization and hashtag extraction read the raw text; the sentiment
    /// scorer also sees the raw text, matching what its model was built for.
    /// Derived fields are written once and not touched again.
    pub fn enrich(&self, mut batch: Batch) -> Batch {
        for post in &mut batch.posts {
            post.normalized_text = normalize(&post.raw_text);
            post.hashtags = extract_hashtags(&post.raw_text);
            post.sentiment = self.scorer.score(&post.raw_text);
        }
        batch
    }

    /// Produce the full report for an enriched batch
    pub fn analyze(&self, batch: &Batch) -> AnalysisReport {
        tracing::info!(posts = batch.len(), "analyzing batch");

        let hashtag_ranking = top_k(
            batch
                .posts
                .iter()
                .flat_map(|p| p.hashtags.iter().map(String::as_str)),
            self.config.ranking.hashtag_top_k,
        );

        let batch_tokens: Vec<Vec<String>> = batch
            .posts
            .iter()
            .map(|p| self.segmenter.segment(&p.normalized_text))
            .collect();

        // Single-character tokens carry no ranking signal; the graph builder
        // applies the same policy itself
        let word_ranking = top_k(
            batch_tokens
                .iter()
                .flatten()
                .filter(|t| t.chars().count() > 1)
                .map(String::as_str),
            self.config.ranking.word_top_k,
        );

        let graph = build_graph(
            &batch_tokens,
            self.config.graph.lookahead,
            self.config.graph.top_k,
        );

        let sentiment_ranking = rank_by_sentiment(batch, self.config.ranking.sentiment_top_k);
        let timeline = summarize(batch);
        let stats = BatchStats::from_batch(batch);

        tracing::info!(
            hashtags = hashtag_ranking.len(),
            words = word_ranking.len(),
            edges = graph.edge_count(),
            "batch analysis complete"
        );

        AnalysisReport {
            batch: batch.clone(),
            stats,
            hashtag_ranking,
            word_ranking,
            sentiment_ranking,
            graph,
            timeline,
        }
    }

    /// Load, enrich, filter, and analyze in one call
    ///
    /// `hashtag_query` follows the filter contract: empty means no filter,
    /// otherwise a normalized-text substring pass with a hashtag fallback.
    ///
    /// # Errors
    ///
    /// Only load errors abort; see the loader for the policy.
    pub fn analyze_rows(
        &self,
        header: &[String],
        rows: &[Vec<String>],
        hashtag_query: &str,
    ) -> Result<AnalysisReport> {
        let batch = load_batch(header, rows, &self.config.loader)?;
        let enriched = self.enrich(batch);
        let filtered = enriched.filter_by_hashtag(hashtag_query);

        if !hashtag_query.is_empty() {
            tracing::info!(
                query = hashtag_query,
                matched = filtered.len(),
                total = enriched.len(),
                "applied hashtag filter"
            );
        }

        Ok(self.analyze(&filtered))
    }

    /// Like [`analyze_rows`](Self::analyze_rows), memoized on the exact
    /// upload bytes
    ///
    /// The cache key is the caller's original input bytes; a byte-identical
    /// re-upload returns the stored report without recomputation.
    pub fn analyze_rows_cached(
        &self,
        cache: &mut ContentCache<AnalysisReport>,
        input_bytes: &[u8],
        header: &[String],
        rows: &[Vec<String>],
        hashtag_query: &str,
    ) -> Result<Arc<AnalysisReport>> {
        if let Some(report) = cache.get(input_bytes) {
            return Ok(report);
        }
        let report = self.analyze_rows(header, rows, hashtag_query)?;
        Ok(cache.insert(input_bytes, report))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Rank posts by descending sentiment, ties by batch order
fn rank_by_sentiment(batch: &Batch, k: usize) -> Vec<ScoredPost> {
    let mut scored: Vec<ScoredPost> = batch
        .posts
        .iter()
        .map(|p| ScoredPost {
            text: p.normalized_text.clone(),
            score: p.sentiment,
        })
        .collect();

    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}
