//! Configuration management for the analytics pipeline
//!
//! This module handles loading and validating configuration from defaults
//! and environment variables. Column resolution is an explicit ordered
//! alias list here, not duck-typing at the call site.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Batch loader configuration
    pub loader: LoaderConfig,

    /// Ranked-list sizes
    pub ranking: RankingConfig,

    /// Co-occurrence graph configuration
    pub graph: GraphConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Batch loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Accepted free-text column names, checked in priority order
    pub text_columns: Vec<String>,

    /// Accepted timestamp column names, checked in priority order
    pub timestamp_columns: Vec<String>,
}

/// Ranked-list sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Top-k for the hashtag ranking
    pub hashtag_top_k: usize,

    /// Top-k for the word frequency ranking
    pub word_top_k: usize,

    /// Top-k for the per-post sentiment ranking
    pub sentiment_top_k: usize,
}

/// Co-occurrence graph configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphConfig {
    /// How many following tokens each position pairs with
    pub lookahead: usize,

    /// Number of heaviest edges retained
    pub top_k: usize,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// Log format (text, json)
    pub format: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            text_columns: ["テキスト", "text", "content", "tweet_text"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timestamp_columns: ["投稿日時", "created_at", "timestamp"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            hashtag_top_k: 10,
            word_top_k: 20,
            sentiment_top_k: 10,
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            lookahead: 2,
            top_k: 20,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            ranking: RankingConfig::default(),
            graph: GraphConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(k) = env_usize("SAZANAMI_HASHTAG_TOP_K") {
            config.ranking.hashtag_top_k = k;
        }
        if let Some(k) = env_usize("SAZANAMI_WORD_TOP_K") {
            config.ranking.word_top_k = k;
        }
        if let Some(k) = env_usize("SAZANAMI_SENTIMENT_TOP_K") {
            config.ranking.sentiment_top_k = k;
        }
        if let Some(n) = env_usize("SAZANAMI_GRAPH_LOOKAHEAD") {
            config.graph.lookahead = n;
        }
        if let Some(k) = env_usize("SAZANAMI_GRAPH_TOP_K") {
            config.graph.top_k = k;
        }
        if let Ok(level) = std::env::var("SAZANAMI_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Ok(format) = std::env::var("SAZANAMI_LOG_FORMAT") {
            config.logging.format = format;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.loader.text_columns.is_empty() {
            return Err(Error::config("text column alias list must not be empty"));
        }
        if self.graph.lookahead == 0 {
            return Err(Error::config("graph lookahead must be at least 1"));
        }
        if !matches!(self.logging.format.as_str(), "text" | "json") {
            return Err(Error::config(format!(
                "unknown log format: {}",
                self.logging.format
            )));
        }
        Ok(())
    }
}

fn env_usize(name: &str) -> Option<usize> {
    std::env::var(name).ok().and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_column_priority() {
        let config = LoaderConfig::default();
        assert_eq!(config.text_columns[0], "テキスト");
        assert_eq!(config.text_columns.last().unwrap(), "tweet_text");
    }

    #[test]
    fn test_default_ranking_sizes() {
        let config = RankingConfig::default();
        assert_eq!(config.hashtag_top_k, 10);
        assert_eq!(config.word_top_k, 20);
        assert_eq!(config.sentiment_top_k, 10);
    }

    #[test]
    fn test_default_graph() {
        let config = GraphConfig::default();
        assert_eq!(config.lookahead, 2);
        assert_eq!(config.top_k, 20);
    }

    #[test]
    fn test_validate_default() {
        assert!(AnalyticsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_aliases() {
        let mut config = AnalyticsConfig::default();
        config.loader.text_columns.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_lookahead() {
        let mut config = AnalyticsConfig::default();
        config.graph.lookahead = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_log_format() {
        let mut config = AnalyticsConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }
}
