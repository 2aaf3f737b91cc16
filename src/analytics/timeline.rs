//! Time-bucketed aggregation of post counts and sentiment
//!
//! Buckets posts by calendar date and by hour-of-day, and computes the mean
//! sentiment per calendar date. Posts without a timestamp are excluded here
//! but still participate in every non-temporal aggregate.

use chrono::{NaiveDate, Timelike};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::Batch;

/// Post count for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Post count for one hour of day (0-23), accumulated across all days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyCount {
    pub hour: u32,
    pub count: u64,
}

/// Mean sentiment for one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    pub date: NaiveDate,
    pub mean_sentiment: f64,
}

/// All time-bucketed views over one batch
///
/// Every sequence is sorted by its bucket key, so output order is
/// deterministic. Buckets with zero posts are simply absent; an entirely
/// timestamp-free batch yields empty sequences, which the display layer
/// renders as its "no data" state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimelineSummary {
    pub daily_counts: Vec<DailyCount>,
    pub hourly_counts: Vec<HourlyCount>,
    pub daily_sentiment: Vec<DailySentiment>,
}

impl TimelineSummary {
    /// Check whether any timestamped post contributed
    pub fn is_empty(&self) -> bool {
        self.daily_counts.is_empty()
    }
}

/// Aggregate a batch into its time-bucketed views
pub fn summarize(batch: &Batch) -> TimelineSummary {
    let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
    let mut per_hour: BTreeMap<u32, u64> = BTreeMap::new();
    let mut sentiment_per_day: BTreeMap<NaiveDate, (f64, u64)> = BTreeMap::new();

    for post in &batch.posts {
        let Some(ts) = post.timestamp else {
            continue;
        };

        let date = ts.date();
        *per_day.entry(date).or_insert(0) += 1;
        *per_hour.entry(ts.hour()).or_insert(0) += 1;

        let slot = sentiment_per_day.entry(date).or_insert((0.0, 0));
        slot.0 += post.sentiment;
        slot.1 += 1;
    }

    TimelineSummary {
        daily_counts: per_day
            .into_iter()
            .map(|(date, count)| DailyCount { date, count })
            .collect(),
        hourly_counts: per_hour
            .into_iter()
            .map(|(hour, count)| HourlyCount { hour, count })
            .collect(),
        daily_sentiment: sentiment_per_day
            .into_iter()
            .map(|(date, (total, n))| DailySentiment {
                date,
                mean_sentiment: total / n as f64,
            })
            .collect(),
    }
}
