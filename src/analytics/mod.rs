//! Batch analytics: frequency ranking, co-occurrence, time buckets

pub mod cooccurrence;
pub mod frequency;
pub mod timeline;

pub use cooccurrence::{build_graph, CooccurrenceEdge, CooccurrenceGraph};
pub use frequency::{top_k, FrequencyTable};
pub use timeline::{summarize, DailyCount, DailySentiment, HourlyCount, TimelineSummary};
