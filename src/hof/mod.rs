//! The hall-of-fame engine: peak aggregation, ranking and the company
//! color palette. Pure domain logic, no I/O of its own — all data comes
//! through the [`source::SnapshotSource`] trait.

pub mod colors;
pub mod leaderboard;
pub mod peaks;
pub mod source;
