//! sazanami - Social-Post Batch Analytics
//!
//! A synchronous, batch-oriented text analytics core for short social-media
//! posts: normalization, hashtag extraction, sentiment scoring, dictionary
//! segmentation, frequency rankings, a windowed co-occurrence graph, and
//! time-bucketed trends. The display layer is an external collaborator that
//! hands in a tabular batch and consumes pure data back.
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management and column-alias policy
//! - [`loader`] - Tabular batch loading and timestamp parsing
//! - [`text`] - Normalization and hashtag extraction
//! - [`sentiment`] - Polarity scoring with a never-fails boundary
//! - [`segment`] - Dictionary word segmentation for CJK/Latin text
//! - [`analytics`] - Frequency ranking, co-occurrence graph, time buckets
//! - [`pipeline`] - Orchestration producing an [`pipeline::AnalysisReport`]
//! - [`cache`] - Content-addressed memoization of processed batches
//! - [`models`] - Core data structures and types
//!
//! # Example
//!
//! ```
//! use sazanami::pipeline::Pipeline;
//!
//! let header = vec!["text".to_string()];
//! let rows = vec![vec!["loving the #rust meetup".to_string()]];
//!
//! let pipeline = Pipeline::new();
//! let report = pipeline.analyze_rows(&header, &rows, "")?;
//! assert_eq!(report.hashtag_ranking[0].label, "#rust");
//! # Ok::<(), sazanami::error::Error>(())
//! ```

pub mod analytics;
pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod segment;
pub mod sentiment;
pub mod text;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::analytics::{build_graph, top_k, CooccurrenceGraph, TimelineSummary};
    pub use crate::cache::ContentCache;
    pub use crate::config::AnalyticsConfig;
    pub use crate::error::{Error, ErrorCategory, Result, SazanamiErrorTrait};
    pub use crate::models::{Batch, BatchStats, Post, RankedEntry};
    pub use crate::pipeline::{AnalysisReport, Pipeline};
    pub use crate::segment::{SegmentDictionary, WordSegmenter};
    pub use crate::sentiment::SentimentScorer;
}

// Direct re-exports for convenience
pub use models::{Batch, Post, RankedEntry};
pub use pipeline::{AnalysisReport, Pipeline};
