//! Analysis engine: tag enumeration, history traversal, bump aggregation,
//! and the next-version decision procedure

pub mod bump;
pub mod history;
pub mod next_version;
pub mod tags;

pub use bump::aggregate_bump;
pub use history::{commits_since, nearest_full_release};
pub use next_version::{increment_version, next_version, NextVersionOptions};
pub use tags::tags_and_versions;
