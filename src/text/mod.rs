//! Raw text cleaning and token extraction
//!
//! - [`normalize`] - URL/mention/emoji/symbol stripping with whitespace
//!   collapsing
//! - [`hashtags`] - hashtag extraction on raw text

pub mod hashtags;
pub mod normalize;

pub use hashtags::extract_hashtags;
pub use normalize::normalize;
