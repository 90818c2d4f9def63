//! # Feed Module
//!
//! Simulated social feed persisted to durable local storage.
//!
//! ## Components
//! - `store`: in-memory post list mirrored to the local store
//! - `seed`: fixed posts installed on first run and by "load more"
//! - `tags`: hashtag extraction for new posts
//! - `format`: relative timestamps for display

pub mod format;
pub mod seed;
pub mod store;
pub mod tags;

pub use format::time_ago;
pub use store::FeedStore;
pub use tags::extract_tags;
