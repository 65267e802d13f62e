//! # Episode Store
//!
//! This crate provides the durable side of the podcast pipeline: the domain
//! types shared across stages and a date-keyed store for finished episodes.
//!
//! An episode is persisted as one directory per calendar day containing the
//! assembled audio artifact and a `metadata.json` document. The store exposes
//! an explicit cache-status check so callers can skip regeneration without
//! racing on partial reads.

mod datastore;
mod domain;

pub use datastore::fs::FsEpisodeStore;
pub use datastore::{CacheStatus, EpisodeStore};
pub use domain::{ArticleNotes, EpisodeDraft, EpisodeRecord, Story};
