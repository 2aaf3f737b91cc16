//! Built-in polarity lexicon
//!
//! A small general-purpose word list with per-word weights, intensity
//! modifiers, and negation terms. Callers with domain vocabularies can build
//! their own [`LexiconModel`] and hand it to the scorer.

use std::collections::HashMap;

use crate::error::ModelError;
use crate::sentiment::PolarityModel;

/// Lexicon-backed polarity model
///
/// Scores a text as the mean weight of its matched words, with intensity
/// modifiers applied to the following sentiment word and negations inverting
/// scores within a short window. The result is clamped to [-1.0, 1.0].
#[derive(Debug, Clone)]
pub struct LexiconModel {
    /// Word weights in [-1.0, 1.0]
    weights: HashMap<String, f64>,
    /// Intensity modifiers (multipliers for the next sentiment word)
    modifiers: HashMap<String, f64>,
    /// Negation terms
    negations: Vec<String>,
    /// How many words after a negation it stays active
    negation_window: usize,
}

impl LexiconModel {
    /// Create a model with the built-in general-purpose lexicon
    pub fn new() -> Self {
        let mut weights = HashMap::new();

        let positive = [
            ("amazing", 0.8),
            ("awesome", 0.75),
            ("excellent", 0.8),
            ("fantastic", 0.8),
            ("great", 0.7),
            ("incredible", 0.85),
            ("love", 0.7),
            ("wonderful", 0.75),
            ("best", 0.7),
            ("happy", 0.65),
            ("fun", 0.55),
            ("good", 0.5),
            ("nice", 0.45),
            ("cool", 0.4),
            ("interesting", 0.35),
            ("promising", 0.55),
            ("strong", 0.5),
            ("success", 0.7),
            ("win", 0.6),
            ("useful", 0.5),
            ("helpful", 0.5),
            ("thanks", 0.5),
            ("glad", 0.55),
            ("enjoy", 0.6),
            ("like", 0.4),
        ];

        let negative = [
            ("awful", -0.8),
            ("terrible", -0.85),
            ("horrible", -0.85),
            ("worst", -0.8),
            ("hate", -0.75),
            ("disaster", -0.9),
            ("bad", -0.5),
            ("sad", -0.55),
            ("angry", -0.6),
            ("annoying", -0.55),
            ("broken", -0.5),
            ("bug", -0.4),
            ("fail", -0.6),
            ("failure", -0.65),
            ("problem", -0.4),
            ("slow", -0.35),
            ("boring", -0.45),
            ("useless", -0.6),
            ("wrong", -0.45),
            ("disappointed", -0.65),
            ("lose", -0.5),
            ("pain", -0.5),
        ];

        for (word, weight) in positive.iter().chain(negative.iter()) {
            weights.insert((*word).to_string(), *weight);
        }

        let mut modifiers = HashMap::new();
        for (word, factor) in [
            ("very", 1.3),
            ("really", 1.25),
            ("so", 1.2),
            ("extremely", 1.5),
            ("totally", 1.3),
            ("slightly", 0.6),
            ("somewhat", 0.7),
            ("barely", 0.5),
        ] {
            modifiers.insert(word.to_string(), factor);
        }

        let negations = ["not", "no", "never", "nothing", "cannot", "cant", "dont", "didnt", "isnt", "wasnt"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();

        Self {
            weights,
            modifiers,
            negations,
            negation_window: 3,
        }
    }

    /// Build a model from caller-supplied word weights
    ///
    /// Weights outside [-1.0, 1.0] are clamped on insertion.
    pub fn from_weights<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let weights = weights
            .into_iter()
            .map(|(w, s)| (w, s.clamp(-1.0, 1.0)))
            .collect();
        Self {
            weights,
            modifiers: HashMap::new(),
            negations: Vec::new(),
            negation_window: 3,
        }
    }

    /// Set the negation window
    pub fn with_negation_window(mut self, window: usize) -> Self {
        self.negation_window = window;
        self
    }

    /// Number of words in the lexicon
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if the lexicon holds no words
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    fn is_negation(&self, word: &str) -> bool {
        self.negations.iter().any(|n| n == word)
    }
}

impl Default for LexiconModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PolarityModel for LexiconModel {
    fn polarity(&self, text: &str) -> Result<f64, ModelError> {
        if !text.chars().any(|c| c.is_alphanumeric()) && !text.is_empty() {
            return Err(ModelError::UnsupportedInput(
                "no scorable word characters".to_string(),
            ));
        }

        let mut total = 0.0;
        let mut matched = 0usize;
        let mut modifier = 1.0;
        let mut negated_for = 0usize;

        for token in text.split_whitespace() {
            let word = token.to_lowercase();

            if self.is_negation(&word) {
                negated_for = self.negation_window;
                continue;
            }

            if let Some(&factor) = self.modifiers.get(&word) {
                modifier = factor;
                continue;
            }

            if let Some(&weight) = self.weights.get(&word) {
                let mut score = weight * modifier;
                if negated_for > 0 {
                    // Invert with damping: "not good" is milder than "bad"
                    score = -score * 0.8;
                }
                total += score;
                matched += 1;
                modifier = 1.0;
            }

            negated_for = negated_for.saturating_sub(1);
        }

        if matched == 0 {
            return Ok(0.0);
        }

        Ok((total / matched as f64).clamp(-1.0, 1.0))
    }
}
