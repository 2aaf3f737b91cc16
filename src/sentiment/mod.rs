//! Per-post sentiment scoring
//!
//! This module provides:
//! - [`PolarityModel`] - the trait a polarity model collaborator implements
//! - [`LexiconModel`] - built-in lexicon-backed model
//! - [`SentimentScorer`] - the public boundary that never fails
//!
//! Internally a model returns `Result<f64, ModelError>`; the scorer collapses
//! any failure to an exactly-neutral 0.0 at its boundary. A flat score is
//! preferred over a crashed batch: one bad row never sacrifices the rest.

pub mod lexicon;

pub use lexicon::LexiconModel;

use crate::error::ModelError;

/// A polarity model collaborator
///
/// Implementations are treated as synchronous, pure black boxes: the same
/// input yields the same output. Returned values are expected in
/// [-1.0, 1.0]; the scorer clamps regardless.
pub trait PolarityModel {
    /// Score the polarity of a text
    fn polarity(&self, text: &str) -> Result<f64, ModelError>;
}

/// Public sentiment-scoring boundary
///
/// `score` upholds the contract that sentiment scoring never aborts the
/// pipeline: empty input and every model failure map to exactly `0.0`.
pub struct SentimentScorer {
    model: Box<dyn PolarityModel + Send + Sync>,
}

impl SentimentScorer {
    /// Create a scorer with the built-in lexicon model
    pub fn new() -> Self {
        Self {
            model: Box::new(LexiconModel::new()),
        }
    }

    /// Create a scorer backed by a custom model
    pub fn with_model(model: Box<dyn PolarityModel + Send + Sync>) -> Self {
        Self { model }
    }

    /// Score a text, returning a polarity in [-1.0, 1.0]
    ///
    /// Empty input yields exactly `0.0`. A model failure is logged and also
    /// yields `0.0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sazanami::sentiment::SentimentScorer;
    ///
    /// let scorer = SentimentScorer::new();
    /// assert_eq!(scorer.score(""), 0.0);
    /// assert!(scorer.score("what a great day") > 0.0);
    /// ```
    pub fn score(&self, text: &str) -> f64 {
        if text.is_empty() {
            return 0.0;
        }

        match self.model.polarity(text) {
            Ok(score) => score.clamp(-1.0, 1.0),
            Err(e) => {
                tracing::debug!(error = %e, "polarity model failed, substituting neutral score");
                0.0
            }
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
