//! Tracker for multiplayer transport-simulation servers.
//!
//! Companies (player-run businesses) report periodic economy and
//! infrastructure snapshots into Postgres; this crate reduces those
//! histories into per-company peak records and serves ranked
//! hall-of-fame leaderboards over HTTP.

pub mod cache;
pub mod config;
pub mod db;
pub mod hof;
pub mod http;
pub mod metrics;
